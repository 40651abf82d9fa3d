// AppWash Location Export Library
// Client + exporter for the Involtum laundry-service REST API

pub mod models;
pub mod client;
pub mod config;
pub mod export;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    location::{LocationLookup, LocationRecord},
    responses::*,
};

pub use client::AppWashClient;
pub use config::ExporterConfig;
pub use export::{ExportSummary, LocationExporter, LocationSource};

// Constants
pub const API_BASE_URL: &str = "https://www.involtum-services.com/api-rest";
pub const USER_AGENT: &str = "appwash-locations v0.1.0";
pub const CONFIG_FILE: &str = "appwash-locations.toml";
pub const API_LOG_FILE: &str = "appwash-api.log";
