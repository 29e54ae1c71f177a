//! Tool defaults loaded from `qstmt.toml`.
//!
//! ```toml
//! [in_clause]
//! add_quotes = true
//! separator = "pipe"
//! oracle_split = true
//!
//! [crud]
//! query_type = "insert"
//! param_style = "oracle"
//!
//! [mapper]
//! direction = "to-snake"
//! property = false
//! data_type = "int"
//!
//! [interpolate]
//! placeholder = "oracle"
//! add_quotes = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::crud::{ParamStyle, QueryType};
use crate::error::{QstmtError, QstmtResult};
use crate::in_clause::InClauseOptions;
use crate::interpolate::PlaceholderStyle;
use crate::mapper::{CaseDirection, DataType, MapperOptions};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "qstmt.toml";

/// Per-tool defaults. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub in_clause: InClauseOptions,
    pub crud: CrudConfig,
    pub mapper: MapperConfig,
    pub interpolate: InterpolateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrudConfig {
    pub query_type: QueryType,
    pub param_style: ParamStyle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub direction: CaseDirection,
    /// Emit C# properties instead of bare names.
    pub property: bool,
    pub data_type: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            direction: CaseDirection::default(),
            property: false,
            data_type: DataType::default().to_string(),
        }
    }
}

impl MapperConfig {
    pub fn options(&self) -> MapperOptions {
        MapperOptions {
            direction: self.direction,
            property: self.property.then(|| self.data_type.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterpolateConfig {
    pub placeholder: PlaceholderStyle,
    pub add_quotes: bool,
}

impl Default for InterpolateConfig {
    fn default() -> Self {
        Self {
            placeholder: PlaceholderStyle::default(),
            add_quotes: true,
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> QstmtResult<Self> {
        toml::from_str(content).map_err(|e| QstmtError::Config(e.to_string()))
    }

    /// Read a config file.
    pub fn from_path(path: &Path) -> QstmtResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| QstmtError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from an explicit path, else the first existing default location,
    /// else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> QstmtResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_path(path);
        }

        for path in default_locations() {
            if path.exists() {
                debug!(path = %path.display(), "loading config");
                return Self::from_path(&path);
            }
        }

        debug!("no config file, using defaults");
        Ok(Self::default())
    }
}

/// `./qstmt.toml`, then `<config dir>/qstmt/config.toml`.
pub fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("qstmt").join("config.toml"));
    }
    paths
}
