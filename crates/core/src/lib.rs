//! Climate API Core Library
//!
//! Shared pieces used by the API server:
//! - Configuration discovery and loading (XDG-compliant)
//! - Filesystem probes for the backing database
//! - Application constants

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::is_readable_file;

/// Application name used for XDG paths
pub const APP_NAME: &str = "climate-api";

/// Default API port
pub const DEFAULT_PORT: u16 = 5000;

/// Default location of the observation database
pub const DEFAULT_DATABASE: &str = "./Resources/hawaii.sqlite";

/// Length of the trailing window served by the precipitation and tobs routes
pub const TRAILING_DAYS: i64 = 365;
