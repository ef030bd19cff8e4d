//! Configuration for the alloysim tools.
//!
//! Configuration is a TOML file. Every key is optional:
//!
//! ```toml
//! [log]
//! level = "info"      # default tracing filter directive
//! format = "pretty"   # or "json"
//!
//! [store]
//! trace_actions = false
//! ```
//!
//! The CLI looks for `$XDG_CONFIG_HOME/alloysim/config.toml` (see
//! [`default_path`]) unless a path is given explicitly. Unknown keys are
//! rejected so typos surface at startup.

pub mod error;

use std::path::{Path, PathBuf};

pub use alloysim_store::StoreConfig;
use serde::Deserialize;

pub use error::{ConfigError, Result};


/// Resolved configuration: defaults with every loaded layer applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	pub log: LogConfig,
	pub store: StoreConfig,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	/// Filter directive used when no environment filter is set.
	pub level: String,
	pub format: LogFormat,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::default(),
		}
	}
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
}

/// One configuration file as written. A key left out of the file is
/// `None`, so applying the layer leaves that setting alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
	pub log: LogLayer,
	pub store: StoreLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogLayer {
	pub level: Option<String>,
	pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreLayer {
	pub trace_actions: Option<bool>,
}

impl ConfigLayer {
	/// Parse a TOML string into a layer.
	pub fn parse(input: &str) -> Result<Self> {
		let layer: ConfigLayer = toml::from_str(input)?;
		if layer.log.level.as_deref().is_some_and(|level| level.trim().is_empty()) {
			return Err(ConfigError::EmptyLogLevel);
		}
		Ok(layer)
	}

	/// Load a layer from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(Self::from_layer(ConfigLayer::parse(input)?))
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		Ok(Self::from_layer(ConfigLayer::load(path)?))
	}

	/// Load `path` if given, else the default file if it exists, else
	/// defaults.
	pub fn discover(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Self::load(path),
			None => match default_path() {
				Some(path) if path.is_file() => Self::load(path),
				_ => Ok(Self::default()),
			},
		}
	}

	/// Defaults with `layer` applied.
	pub fn from_layer(layer: ConfigLayer) -> Self {
		let mut config = Self::default();
		config.merge(layer);
		config
	}

	/// Merge a layer into this config. Every value set in `layer` wins,
	/// including one equal to the default; unset values keep `self`.
	pub fn merge(&mut self, layer: ConfigLayer) {
		if let Some(level) = layer.log.level {
			self.log.level = level;
		}
		if let Some(format) = layer.log.format {
			self.log.format = format;
		}
		if let Some(trace_actions) = layer.store.trace_actions {
			self.store.trace_actions = trace_actions;
		}
	}
}

/// `$XDG_CONFIG_HOME/alloysim/config.toml`, if a config directory is known.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("alloysim").join("config.toml"))
}
