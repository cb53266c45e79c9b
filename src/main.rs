//! Sectionsnap - read a markdown file one section at a time.
//!
//! # Usage
//!
//! ```bash
//! sectionsnap README.md
//! sectionsnap --heading-level 1 notes.md
//! sectionsnap --follow-resize --breakpoint 1024 --save portfolio.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sectionsnap::app::App;
use sectionsnap::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use sectionsnap::document::DEFAULT_HEADING_LEVEL;

/// Read a markdown file one section at a time
#[derive(Parser, Debug)]
#[command(name = "sectionsnap", version, about, long_about = None)]
struct Cli {
    /// Markdown file to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Width in logical pixels (8 per column) at or under which scrolling stays native
    #[arg(long, value_name = "PX")]
    breakpoint: Option<u32>,

    /// Re-check the breakpoint whenever the terminal is resized
    #[arg(long)]
    follow_resize: bool,

    /// Hide the auto-hiding section navbar
    #[arg(long)]
    no_navbar: bool,

    /// Show every section at full brightness from the start
    #[arg(long)]
    no_reveal: bool,

    /// Deepest heading level that starts a section
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=6))]
    heading_level: Option<u8>,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    sectionsnap::logging::init(effective.debug_log.as_deref())?;
    tracing::debug!(?effective, "effective flags");

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    let mut app = App::new(cli.file)
        .with_controller_config(effective.controller_config())
        .with_heading_level(effective.heading_level.unwrap_or(DEFAULT_HEADING_LEVEL))
        .with_navbar(!effective.no_navbar)
        .with_reveal(!effective.no_reveal);

    app.run().context("Application error")
}
