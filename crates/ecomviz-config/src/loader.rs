//! Configuration loading utilities

use crate::defaults::DEFAULT_OUTPUT_PATH;
use crate::Config;
use ecomviz_common::Result as EcomResult;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "ECOMVIZ_CONFIG_PATH";

/// Configuration files looked up in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["ecomviz.yaml", "ecomviz.yml", "ecomviz.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    IoError {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Name of the offending variable
        var: String,
        /// Parse failure for its value
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ecomviz_common::EcomError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file, chosen by extension.
    /// Anything that is not `.toml` is read as YAML.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        debug!(path = %path.display(), "Configuration file parsed");
        Ok(config)
    }

    /// Pick the configuration file: explicit path, then `$ECOMVIZ_CONFIG_PATH`,
    /// then the first default file present in the working directory.
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            })
    }

    /// Load the discovered configuration file, or the built-in defaults when
    /// there is none, and apply environment overrides.
    ///
    /// The result is not validated; callers layer their own overrides on top
    /// and then call [`Config::validate`].
    pub fn load(explicit: Option<&Path>) -> EcomResult<Config> {
        Self::load_from(Self::discover(explicit).as_deref())
    }

    /// Like [`ConfigLoader::load`], but with the file already chosen.
    pub fn load_from(path: Option<&Path>) -> EcomResult<Config> {
        let mut config = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration file");
                Self::load_config(path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
        Ok(config)
    }

    /// Apply `ECOMVIZ_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("ECOMVIZ_CUSTOMERS_PATH") {
            config.inputs.customers = path.into();
        }

        if let Some(path) = lookup("ECOMVIZ_ORDERS_PATH") {
            config.inputs.orders = path.into();
        }

        if let Some(path) = lookup("ECOMVIZ_PAYMENTS_PATH") {
            config.inputs.payments = path.into();
        }

        if let Some(path) = lookup("ECOMVIZ_OUTPUT_PATH") {
            config.output.path = if path.is_empty() {
                DEFAULT_OUTPUT_PATH.into()
            } else {
                path.into()
            };
        }

        if let Some(top_n) = lookup("ECOMVIZ_TOP_N") {
            config.charts.top_n = top_n.trim().parse().map_err(|e| ConfigError::EnvParseError {
                var: "ECOMVIZ_TOP_N".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(level) = lookup("ECOMVIZ_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_yaml_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ecomviz.yaml");
        std::fs::write(
            &path,
            "inputs:\n  customers: data/customers.csv\ncharts:\n  top_n: 3\n",
        )
        .unwrap();

        let config = ConfigLoader::load_config(&path).unwrap();
        assert_eq!(config.inputs.customers, PathBuf::from("data/customers.csv"));
        assert_eq!(config.inputs.orders, PathBuf::from("orders_corrected.csv"));
        assert_eq!(config.charts.top_n, 3);
        assert_eq!(config.charts.highlight_color, "#3A6D8C");
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ecomviz.toml");
        std::fs::write(
            &path,
            "[output]\npath = \"out/report.html\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_config(&path).unwrap();
        assert_eq!(config.output.path, PathBuf::from("out/report.html"));
        assert_eq!(config.output.title, "E-Commerce Public Analysis");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConfigLoader::load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "charts:\n  top_n: [five]\n").unwrap();

        let err = ConfigLoader::load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("ECOMVIZ_CUSTOMERS_PATH", "/data/c.csv"),
            ("ECOMVIZ_OUTPUT_PATH", "/tmp/page.html"),
            ("ECOMVIZ_TOP_N", " 7 "),
            ("ECOMVIZ_LOG_LEVEL", "trace"),
        ]);

        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(config.inputs.customers, PathBuf::from("/data/c.csv"));
        assert_eq!(config.inputs.orders, PathBuf::from("orders_corrected.csv"));
        assert_eq!(config.output.path, PathBuf::from("/tmp/page.html"));
        assert_eq!(config.charts.top_n, 7);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_env_override_parse_failure() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, lookup_from(&[("ECOMVIZ_TOP_N", "five")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvParseError { ref var, .. } if var == "ECOMVIZ_TOP_N"));
    }

    #[test]
    fn test_config_error_converts_to_ecom_error() {
        let err: ecomviz_common::EcomError =
            ConfigLoader::load_config("/definitely/not/here.yaml").unwrap_err().into();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_load_from_does_not_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ecomviz.yaml");
        std::fs::write(&path, "output:\n  path: ''\ncharts:\n  top_n: 0\n").unwrap();

        let config = ConfigLoader::load_from(Some(&path)).unwrap();
        assert_eq!(config.charts.top_n, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let explicit = Path::new("/somewhere/custom.toml");
        assert_eq!(ConfigLoader::discover(Some(explicit)), Some(explicit.to_path_buf()));
    }

    proptest! {
        #[test]
        fn prop_top_n_override_round_trips(top_n in 0usize..100_000, pad in " {0,3}") {
            let mut config = Config::default();
            let raw = format!("{pad}{top_n}{pad}");
            ConfigLoader::apply_overrides(&mut config, lookup_from(&[("ECOMVIZ_TOP_N", raw.as_str())])).unwrap();
            prop_assert_eq!(config.charts.top_n, top_n);
        }

        #[test]
        fn prop_path_overrides_only_touch_their_field(path in "[a-z0-9_/]{1,24}\\.csv") {
            let mut config = Config::default();
            ConfigLoader::apply_overrides(&mut config, lookup_from(&[("ECOMVIZ_ORDERS_PATH", path.as_str())])).unwrap();

            let mut expected = Config::default();
            expected.inputs.orders = PathBuf::from(&path);
            prop_assert_eq!(config, expected);
        }
    }
}
