//! Tests for configuration resolution
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests
//! that manipulate IMRATE_IMAGES_DIR or IMRATE_PORT are marked #[serial]
//! so they run sequentially, not in parallel.

use std::env;
use std::path::{Path, PathBuf};

use serial_test::serial;

use imrate_common::config::{
    self, TomlConfig, DEFAULT_IMAGES_DIR, DEFAULT_PORT, IMAGES_DIR_ENV, PORT_ENV,
};

#[test]
#[serial]
fn test_cli_argument_wins_over_env() {
    env::set_var(IMAGES_DIR_ENV, "/tmp/imrate-env-images");

    let resolved = config::resolve_images_dir(Some(Path::new("/tmp/imrate-cli-images")));
    assert_eq!(resolved, PathBuf::from("/tmp/imrate-cli-images"));

    env::remove_var(IMAGES_DIR_ENV);
}

#[test]
#[serial]
fn test_env_variable_used_without_cli() {
    env::set_var(IMAGES_DIR_ENV, "/tmp/imrate-env-images");

    let resolved = config::resolve_images_dir(None);
    assert_eq!(resolved, PathBuf::from("/tmp/imrate-env-images"));

    env::remove_var(IMAGES_DIR_ENV);
}

#[test]
#[serial]
fn test_empty_env_variable_is_ignored() {
    env::set_var(IMAGES_DIR_ENV, "");

    let resolved = config::resolve_images_dir(None);
    assert_eq!(resolved, PathBuf::from(DEFAULT_IMAGES_DIR));

    env::remove_var(IMAGES_DIR_ENV);
}

#[test]
#[serial]
fn test_default_images_dir_without_overrides() {
    env::remove_var(IMAGES_DIR_ENV);

    let resolved = config::resolve_images_dir(None);
    assert_eq!(resolved, PathBuf::from(DEFAULT_IMAGES_DIR));
}

#[test]
#[serial]
fn test_port_cli_wins() {
    env::set_var(PORT_ENV, "7000");

    assert_eq!(config::resolve_port(Some(6000)), 6000);

    env::remove_var(PORT_ENV);
}

#[test]
#[serial]
fn test_port_env_variable() {
    env::set_var(PORT_ENV, "7000");

    assert_eq!(config::resolve_port(None), 7000);

    env::remove_var(PORT_ENV);
}

#[test]
#[serial]
fn test_port_env_unparseable_falls_through() {
    env::set_var(PORT_ENV, "not-a-port");

    assert_eq!(config::resolve_port(None), DEFAULT_PORT);

    env::remove_var(PORT_ENV);
}

#[test]
#[serial]
fn test_default_port_without_overrides() {
    env::remove_var(PORT_ENV);

    assert_eq!(config::resolve_port(None), DEFAULT_PORT);
}

#[test]
fn test_toml_config_parses_known_keys() {
    let config: TomlConfig =
        toml::from_str("images_dir = \"/srv/study/images\"\nport = 5999\n").unwrap();
    assert_eq!(config.images_dir, Some(PathBuf::from("/srv/study/images")));
    assert_eq!(config.port, Some(5999));
}

#[test]
fn test_toml_config_all_keys_optional() {
    let config: TomlConfig = toml::from_str("").unwrap();
    assert!(config.images_dir.is_none());
    assert!(config.port.is_none());
}
