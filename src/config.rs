//! Saved command-line defaults.
//!
//! A config file holds CLI flags, one or more per line, with `#` comments.
//! The global file is read first, then `.sectionsnaprc` in the working
//! directory, then the real command line; later sources override options
//! and booleans accumulate.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::controller::{ActivationPolicy, ControllerConfig, MOBILE_BREAKPOINT};

const APP_DIR: &str = "sectionsnap";
const LOCAL_FILE: &str = ".sectionsnaprc";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub follow_resize: bool,
    pub no_navbar: bool,
    pub no_reveal: bool,
    pub breakpoint: Option<u32>,
    pub heading_level: Option<u8>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` on top of `self`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            follow_resize: self.follow_resize || other.follow_resize,
            no_navbar: self.no_navbar || other.no_navbar,
            no_reveal: self.no_reveal || other.no_reveal,
            breakpoint: other.breakpoint.or(self.breakpoint),
            heading_level: other.heading_level.or(self.heading_level),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    /// Controller settings these flags select.
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            breakpoint: self.breakpoint.map_or(MOBILE_BREAKPOINT, f64::from),
            activation: if self.follow_resize {
                ActivationPolicy::FollowViewport
            } else {
                ActivationPolicy::AtLoad
            },
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join(APP_DIR)
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# sectionsnap defaults (saved with --save)".to_string()];
    if flags.follow_resize {
        lines.push("--follow-resize".to_string());
    }
    if flags.no_navbar {
        lines.push("--no-navbar".to_string());
    }
    if flags.no_reveal {
        lines.push("--no-reveal".to_string());
    }
    if let Some(px) = flags.breakpoint {
        lines.push(format!("--breakpoint {px}"));
    }
    if let Some(level) = flags.heading_level {
        lines.push(format!("--heading-level {level}"));
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of `tokens`, skipping everything else.
///
/// Options accept both `--name value` and `--name=value`; values that do
/// not parse are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--follow-resize" => flags.follow_resize = true,
            "--no-navbar" => flags.no_navbar = true,
            "--no-reveal" => flags.no_reveal = true,
            _ => {
                let (name, inline) = match token.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (token, None),
                };
                if !matches!(name, "--breakpoint" | "--heading-level" | "--debug-log") {
                    i += 1;
                    continue;
                }
                let value = match inline {
                    Some(value) => Some(value),
                    None => {
                        let next = tokens.get(i + 1).map(String::as_str);
                        if next.is_some() {
                            i += 1;
                        }
                        next
                    }
                };
                if let Some(value) = value {
                    apply_option(&mut flags, name, value);
                }
            }
        }
        i += 1;
    }
    flags
}

fn apply_option(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--breakpoint" => {
            if let Ok(px) = value.parse() {
                flags.breakpoint = Some(px);
            }
        }
        "--heading-level" => {
            if let Ok(level) = value.parse::<u8>()
                && (1..=6).contains(&level)
            {
                flags.heading_level = Some(level);
            }
        }
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}
