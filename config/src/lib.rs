//! # Configuration Management for sqlweave
//!
//! This crate provides the configuration structures used when rendering
//! queries to text, such as indentation width and line endings.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{LineEnding, RenderConfig};
//!
//! let render = RenderConfig::new(2, LineEnding::CrLf);
//! assert_eq!(render.indent_width, 2);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [render]
//! indent_width = 4
//! line_ending = "lf"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from sqlweave.toml (or the file named by SQLWEAVE_CONFIG)
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sqlweave.toml";
const CONFIG_PATH_VAR: &str = "SQLWEAVE_CONFIG";

/// Number of spaces per indent level when nothing else is configured
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Largest indent width accepted by validation
pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Line terminator written after each rendered line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Text layout configuration for rendered statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default)]
    pub line_ending: LineEnding,
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            line_ending: LineEnding::Lf,
        }
    }
}

impl RenderConfig {
    /// Create a new render configuration
    pub fn new(indent_width: usize, line_ending: LineEnding) -> Self {
        Self {
            indent_width,
            line_ending,
        }
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment (or .env),
    /// falling back to the default config path
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate()? {
            Some(path) => Self::from_file(path),
            None => Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            ))),
        }
    }

    /// Like [`AppConfig::load`], but returns the defaults when no config file is found
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::locate()? {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn locate() -> Result<Option<String>, ConfigError> {
        // A missing .env file is not an error, a malformed one is
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Ok(Some(path)),
            Err(env::VarError::NotPresent) => {
                if Path::new(DEFAULT_CONFIG_PATH).exists() {
                    Ok(Some(DEFAULT_CONFIG_PATH.to_string()))
                } else {
                    Ok(None)
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.render.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "Render indent_width cannot be greater than {}",
                MAX_INDENT_WIDTH
            )));
        }

        Ok(())
    }
}
