//! Command line arguments and configuration resolution.

use crate::DashboardResult;
use clap::Parser;
use ecomviz_config::{Config, ConfigLoader};
use std::path::PathBuf;
use tracing::debug;

/// Render the e-commerce public analysis dashboard.
#[derive(Debug, Default, Parser)]
#[command(name = "ecomviz-dashboard", version, about)]
pub struct Args {
    /// Configuration file (YAML or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configuration
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Output page, overriding the configuration
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Level for the logging that covers configuration loading.
    pub fn bootstrap_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Load the configuration, layer the command line on top, then validate.
    ///
    /// Precedence is command line, then `ECOMVIZ_*` variables, then the file,
    /// then the built-in defaults.
    pub fn resolve_config(&self) -> DashboardResult<Config> {
        let mut config = ConfigLoader::load(self.config.as_deref())?;

        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(output) = &self.output {
            config.output.path.clone_from(output);
        }

        config.validate()?;
        debug!(output = %config.output.path.display(), "Configuration resolved");
        Ok(config)
    }
}
