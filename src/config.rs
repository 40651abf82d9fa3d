use crate::v_info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const EMAIL_PLACEHOLDER: &str = "<YOUR EMAIL>";
pub const PASSWORD_PLACEHOLDER: &str = "<YOUR PASSWORD>";

/// Environment variables that override the config file credentials.
pub const EMAIL_ENV_VAR: &str = "APPWASH_EMAIL";
pub const PASSWORD_ENV_VAR: &str = "APPWASH_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    pub account: AccountConfig,
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Login email for the AppWash account
    pub email: String,
    /// Login password for the AppWash account
    pub password: String,
    /// Home location id, used by the `machines` command
    pub location: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// First location id attempted by the export scan
    pub first_location_id: u32,
    /// Half-open upper bound of the scan; ids in [first, limit) are tried
    pub location_id_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file the exporter appends to
    pub path: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            account: AccountConfig {
                email: EMAIL_PLACEHOLDER.to_string(),
                password: PASSWORD_PLACEHOLDER.to_string(),
                location: 0,
            },
            scan: ScanConfig {
                first_location_id: 0,
                location_id_limit: 11911,
            },
            output: OutputConfig {
                path: "appwash-locations.csv".to_string(),
            },
        }
    }
}

impl ExporterConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: ExporterConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            v_info!("Creating default configuration at {}", config_path);
            let config = ExporterConfig::default();
            config.save(config_path)?;
            v_info!("Edit {} or set {}/{} to provide credentials", config_path, EMAIL_ENV_VAR, PASSWORD_ENV_VAR);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Environment credentials take precedence over the config file,
    /// so real credentials never have to live on disk.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(email) = env::var(EMAIL_ENV_VAR) {
            self.account.email = email;
        }
        if let Ok(password) = env::var(PASSWORD_ENV_VAR) {
            self.account.password = password;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.account.email.is_empty() || self.account.email == EMAIL_PLACEHOLDER {
            return Err(format!(
                "account email is not set - edit the config file or set {}",
                EMAIL_ENV_VAR
            ));
        }
        if self.account.password.is_empty() || self.account.password == PASSWORD_PLACEHOLDER {
            return Err(format!(
                "account password is not set - edit the config file or set {}",
                PASSWORD_ENV_VAR
            ));
        }
        if self.scan.first_location_id >= self.scan.location_id_limit {
            return Err("scan range is empty: first_location_id must be below location_id_limit".to_string());
        }
        if self.output.path.is_empty() {
            return Err("output path must not be empty".to_string());
        }

        v_info!("Configuration validation passed");
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        v_info!("Configuration Summary:");
        v_info!("   Account: {}", self.account.email);
        v_info!(
            "   Scan range: [{}, {})",
            self.scan.first_location_id,
            self.scan.location_id_limit
        );
        v_info!("   Output: {}", self.output.path);
    }
}
