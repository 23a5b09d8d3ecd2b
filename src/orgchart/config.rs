use crate::error::{OrgError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "orgchart.json";
const DEFAULT_DELIMITER: char = ';';
const DEFAULT_OUTPUT: &str = "out.png";

/// What to do with an employee whose manager id names nobody in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Leave the employee out of the chart.
    #[default]
    Drop,
    /// Chart the employee as an additional root.
    Root,
}

/// Configuration for orgchart, read from `orgchart.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrgChartConfig {
    /// Field separator for CSV input
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Where the image renderer writes; the extension picks the format
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Fill colour for people with reports
    #[serde(default = "default_manager_color")]
    pub manager_color: String,

    /// Fill colour for people without reports
    #[serde(default = "default_leaf_color")]
    pub leaf_color: String,

    #[serde(default)]
    pub orphans: OrphanPolicy,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_manager_color() -> String {
    "lightblue".to_string()
}

fn default_leaf_color() -> String {
    "lightyellow".to_string()
}

impl Default for OrgChartConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            output: default_output(),
            manager_color: default_manager_color(),
            leaf_color: default_leaf_color(),
            orphans: OrphanPolicy::default(),
        }
    }
}

impl OrgChartConfig {
    /// Load config from `orgchart.json` in the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(config_path)
    }

    /// Load config from an explicit file. Unlike [`OrgChartConfig::load`], a missing file is an error.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(OrgError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(OrgError::Io)?;
        let config: OrgChartConfig =
            serde_json::from_str(&content).map_err(OrgError::Serialization)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || self.delimiter == '\n' || self.delimiter == '"' {
            return Err(OrgError::Config(format!(
                "delimiter must be a single ASCII character other than newline or quote, got {:?}",
                self.delimiter
            )));
        }
        if self.manager_color.trim().is_empty() || self.leaf_color.trim().is_empty() {
            return Err(OrgError::Config("fill colours cannot be empty".to_string()));
        }
        Ok(())
    }

    /// The delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        let mut buf = [0u8; 4];
        self.delimiter.encode_utf8(&mut buf);
        buf[0]
    }

    /// Override the output path (normally from the command line).
    pub fn set_output(&mut self, output: impl Into<PathBuf>) {
        self.output = output.into();
    }
}
