//! Configuration loading utilities
//!
//! Supports loading configuration from multiple sources in priority order:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Config file (searched in standard locations)
//! 4. Built-in defaults (lowest priority)

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::APP_NAME;

/// Describes where a configuration was loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Explicit path provided via CLI or env var
    Explicit(PathBuf),
    /// Found in current working directory
    CurrentDir(PathBuf),
    /// Found in XDG config home (~/.config/booo-games/)
    XdgConfig(PathBuf),
    /// Found in system config (/etc/booo-games/)
    System(PathBuf),
    /// No config file found, using defaults
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

/// Find a configuration file in standard locations
///
/// Search order:
/// 1. Environment variable (e.g., BOOO_SITE_CONFIG)
/// 2. Current directory (site.toml)
/// 3. XDG config home ($XDG_CONFIG_HOME/booo-games/ or ~/.config/booo-games/)
/// 4. System config (/etc/booo-games/)
pub fn find_config_file(env_var: &str, filename: &str) -> ConfigSource {
    if let Ok(path) = env::var(env_var) {
        let p = PathBuf::from(&path);
        if p.exists() {
            return ConfigSource::Explicit(p);
        }
    }

    let local = PathBuf::from(filename);
    if local.exists() {
        return ConfigSource::CurrentDir(local);
    }

    let xdg_path = get_xdg_config_path(filename);
    if xdg_path.exists() {
        return ConfigSource::XdgConfig(xdg_path);
    }

    let system = PathBuf::from(format!("/etc/{}/{}", APP_NAME, filename));
    if system.exists() {
        return ConfigSource::System(system);
    }

    ConfigSource::Defaults
}

fn get_xdg_config_path(filename: &str) -> PathBuf {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_NAME).join(filename)
    } else if let Ok(home) = env::var("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join(APP_NAME)
            .join(filename)
    } else {
        // Won't exist, keeps the lookup total
        PathBuf::from(format!(".config/{}/{}", APP_NAME, filename))
    }
}

/// Load and parse a TOML configuration file
///
/// # Returns
/// * `Ok(config)` - Parsed config, or `T::default()` when the source is `Defaults`
/// * `Err(e)` - Failed to read or parse the config file
pub fn load_config<T: DeserializeOwned + Default>(source: &ConfigSource) -> anyhow::Result<T> {
    match source.path() {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let config: T = toml::from_str(&content)?;
            log::debug!("parsed config file {}", path.display());
            Ok(config)
        }
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(serde::Deserialize, Default, Debug, PartialEq)]
    struct Sample {
        port: Option<String>,
        schedule: Option<String>,
    }

    #[test]
    fn test_config_source_display() {
        let source = ConfigSource::CurrentDir(PathBuf::from("site.toml"));
        assert_eq!(format!("{}", source), "site.toml");

        let source = ConfigSource::Defaults;
        assert_eq!(format!("{}", source), "(defaults)");
    }

    #[test]
    fn test_defaults_source_yields_default_config() {
        let config: Sample = load_config(&ConfigSource::Defaults).unwrap();
        assert_eq!(config, Sample::default());
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "port = \"9000\"\nschedule = \"https://example.com/schedule.json\"").unwrap();

        let config: Sample = load_config(&ConfigSource::Explicit(path)).unwrap();
        assert_eq!(config.port.as_deref(), Some("9000"));
        assert_eq!(
            config.schedule.as_deref(),
            Some("https://example.com/schedule.json")
        );
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "port = [unterminated").unwrap();

        let result: anyhow::Result<Sample> = load_config(&ConfigSource::Explicit(path));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_env_path_falls_through() {
        let source = find_config_file("BOOO_SITE_TEST_UNSET_CONFIG", "definitely-missing-12345.toml");
        assert_eq!(source, ConfigSource::Defaults);
    }
}
