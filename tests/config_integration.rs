use std::path::PathBuf;

use sectionsnap::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use sectionsnap::controller::ActivationPolicy;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".sectionsnaprc");
    let content = r"
# comment
--follow-resize

--breakpoint 1024

--debug-log=scroll.log
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.follow_resize);
    assert_eq!(flags.breakpoint, Some(1024));
    assert_eq!(flags.debug_log, Some(PathBuf::from("scroll.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".sectionsnaprc");
    let content = "--no-navbar\n--breakpoint 900\n--debug-log file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "sectionsnap".to_string(),
        "--breakpoint".to_string(),
        "1200".to_string(),
        "--no-reveal".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_navbar, "file flags should remain enabled");
    assert!(effective.no_reveal, "cli flags should be applied");
    assert_eq!(effective.breakpoint, Some(1200), "cli should override breakpoint");
    assert_eq!(
        effective.debug_log,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_local_file_layers_over_global_file() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".sectionsnaprc");
    std::fs::write(&global, "--heading-level 1\n--no-navbar\n").unwrap();
    std::fs::write(&local, "--heading-level 3\n--follow-resize\n").unwrap();

    let flags = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(flags.heading_level, Some(3));
    assert!(flags.no_navbar);
    assert_eq!(
        flags.controller_config().activation,
        ActivationPolicy::FollowViewport
    );
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}
