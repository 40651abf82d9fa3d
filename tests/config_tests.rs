use appwash_locations::ExporterConfig;
use appwash_locations::config::{EMAIL_ENV_VAR, PASSWORD_ENV_VAR};
use std::env;
use tempfile::TempDir;

#[test]
fn default_config_rejects_placeholder_credentials() {
    let config = ExporterConfig::default();
    assert!(config.validate().is_err());
}

#[test]
fn filled_in_credentials_pass_validation() {
    let mut config = ExporterConfig::default();
    config.account.email = "user@example.com".to_string();
    config.account.password = "hunter2".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn empty_scan_range_is_rejected() {
    let mut config = ExporterConfig::default();
    config.account.email = "user@example.com".to_string();
    config.account.password = "hunter2".to_string();
    config.scan.first_location_id = 100;
    config.scan.location_id_limit = 100;
    assert!(config.validate().is_err());
}

#[test]
fn load_or_create_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appwash-locations.toml");
    let path = path.to_str().unwrap();

    // First load writes the default file.
    let created = ExporterConfig::load_or_create(path).unwrap();
    assert_eq!(created.scan.location_id_limit, 11911);
    assert_eq!(created.output.path, "appwash-locations.csv");

    // Second load reads it back, edits included.
    let mut edited = created.clone();
    edited.account.email = "user@example.com".to_string();
    edited.scan.location_id_limit = 500;
    edited.save(path).unwrap();

    let reloaded = ExporterConfig::load_or_create(path).unwrap();
    assert_eq!(reloaded.account.email, "user@example.com");
    assert_eq!(reloaded.scan.location_id_limit, 500);
}

#[test]
fn environment_credentials_override_the_config_file() {
    let mut config = ExporterConfig::default();

    unsafe {
        env::set_var(EMAIL_ENV_VAR, "env-user@example.com");
        env::set_var(PASSWORD_ENV_VAR, "env-password");
    }
    config.apply_env_overrides();
    unsafe {
        env::remove_var(EMAIL_ENV_VAR);
        env::remove_var(PASSWORD_ENV_VAR);
    }

    assert_eq!(config.account.email, "env-user@example.com");
    assert_eq!(config.account.password, "env-password");
    assert!(config.validate().is_ok());
}
