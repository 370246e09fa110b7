//! Configuration discovery and loading
//!
//! Values are merged by the caller in priority order:
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file (first one found in the locations below)
//! 4. Built-in defaults

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::APP_NAME;

/// Where a configuration file was found
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Passed with `--config` or through the config env var
    Explicit(PathBuf),
    /// Found in current working directory
    CurrentDir(PathBuf),
    /// Found in the user's config home
    XdgConfig(PathBuf),
    /// Found under /etc
    System(PathBuf),
    /// Nothing found, built-in defaults apply
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigSource::Explicit(p)
            | ConfigSource::CurrentDir(p)
            | ConfigSource::XdgConfig(p)
            | ConfigSource::System(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.path() {
            Some(p) => write!(f, "{}", p.display()),
            None => write!(f, "(defaults)"),
        }
    }
}

/// Find the first existing configuration file.
///
/// Search order: `$env_var`, `./filename`, `$XDG_CONFIG_HOME/climate-api/filename`
/// (or `~/.config/climate-api/filename`), `/etc/climate-api/filename`.
pub fn find_config_file(env_var: &str, filename: &str) -> ConfigSource {
    let existing = |p: PathBuf| p.exists().then_some(p);

    if let Some(p) = env::var(env_var).ok().map(PathBuf::from).and_then(existing) {
        return ConfigSource::Explicit(p);
    }
    if let Some(p) = existing(PathBuf::from(filename)) {
        return ConfigSource::CurrentDir(p);
    }
    if let Some(p) = xdg_config_path(filename).and_then(existing) {
        return ConfigSource::XdgConfig(p);
    }
    existing(PathBuf::from("/etc").join(APP_NAME).join(filename))
        .map(ConfigSource::System)
        .unwrap_or(ConfigSource::Defaults)
}

fn xdg_config_path(filename: &str) -> Option<PathBuf> {
    env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .ok()
        .map(|base| base.join(APP_NAME).join(filename))
}

/// Parse the TOML file behind `source`, or return `T::default()` when there is none.
pub fn load_config<T: DeserializeOwned + Default>(source: &ConfigSource) -> anyhow::Result<T> {
    match source.path() {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        }
        None => Ok(T::default()),
    }
}
