use crate::case::delimiter::{self, DEFAULT_DELIMITER};
use crate::convert::Style;
use crate::error::CaseError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".intact-case.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub delimiter: String,
    pub vendor_prefix: bool,
    pub raw_first_word: bool,
    pub style: Option<Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            vendor_prefix: false,
            raw_first_word: false,
            style: None,
        }
    }
}

/// One configuration source. Only the settings it actually mentions are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub delimiter: Option<String>,
    pub vendor_prefix: Option<bool>,
    pub raw_first_word: Option<bool>,
    pub style: Option<Style>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Command-line flags: a flag that is not passed leaves the option alone.
    pub fn from_args(delimiter: Option<String>, vendor_prefix: bool, raw_first_word: bool) -> Self {
        Self {
            delimiter,
            vendor_prefix: vendor_prefix.then_some(true),
            raw_first_word: raw_first_word.then_some(true),
            style: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        delimiter: Option<String>,
        vendor_prefix: bool,
        raw_first_word: bool,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("loading global config from {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            debug!("loading local config from {}", local_path.display());
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        Ok(config.merge(ConfigLayer::from_args(delimiter, vendor_prefix, raw_first_word)))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(delimiter) = layer.delimiter {
            self.delimiter = delimiter;
        }
        if let Some(vendor_prefix) = layer.vendor_prefix {
            self.vendor_prefix = vendor_prefix;
        }
        if let Some(raw_first_word) = layer.raw_first_word {
            self.raw_first_word = raw_first_word;
        }
        if layer.style.is_some() {
            self.style = layer.style;
        }
        self
    }

    /// The configured delimiter as a single character.
    pub fn delimiter(&self) -> Result<char, CaseError> {
        delimiter::parse(&self.delimiter)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "intact-case").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.delimiter(), Ok('_'));
        assert!(!config.vendor_prefix);
        assert!(!config.raw_first_word);
        assert_eq!(config.style, None);
    }

    #[test]
    fn test_merge_configs() {
        let layer = ConfigLayer {
            delimiter: Some("-".to_string()),
            style: Some(Style::Camel),
            ..Default::default()
        };

        let merged = Config::default().merge(layer);
        assert_eq!(merged.delimiter(), Ok('-'));
        assert_eq!(merged.style, Some(Style::Camel));
        assert!(!merged.vendor_prefix);
    }

    #[test]
    fn test_local_default_delimiter_overrides_global() {
        let global = ConfigLayer {
            delimiter: Some("-".to_string()),
            ..Default::default()
        };
        let local = ConfigLayer {
            delimiter: Some("_".to_string()),
            ..Default::default()
        };

        let config = Config::default().merge(global).merge(local);
        assert_eq!(config.delimiter(), Ok('_'));
    }

    #[test]
    fn test_omitted_flags_keep_earlier_layer() {
        let global = ConfigLayer {
            vendor_prefix: Some(true),
            raw_first_word: Some(true),
            style: Some(Style::Studly),
            ..Default::default()
        };
        let local = ConfigLayer {
            delimiter: Some(".".to_string()),
            ..Default::default()
        };

        let config = Config::default().merge(global).merge(local);
        assert!(config.vendor_prefix);
        assert!(config.raw_first_word);
        assert_eq!(config.style, Some(Style::Studly));
        assert_eq!(config.delimiter(), Ok('.'));
    }

    #[test]
    fn test_local_false_overrides_global_true() {
        let global = ConfigLayer {
            vendor_prefix: Some(true),
            ..Default::default()
        };
        let local = ConfigLayer {
            vendor_prefix: Some(false),
            ..Default::default()
        };

        let config = Config::default().merge(global).merge(local);
        assert!(!config.vendor_prefix);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .merge(ConfigLayer::from_args(Some(".".to_string()), true, false));
        assert_eq!(config.delimiter(), Ok('.'));
        assert!(config.vendor_prefix);
        assert!(!config.raw_first_word);
    }

    #[test]
    fn test_unset_cli_flags_keep_file_settings() {
        let file = ConfigLayer {
            vendor_prefix: Some(true),
            ..Default::default()
        };

        let config = Config::default()
            .merge(file)
            .merge(ConfigLayer::from_args(None, false, false));
        assert!(config.vendor_prefix);
        assert_eq!(config.delimiter(), Ok('_'));
    }

    #[test]
    fn test_empty_delimiter_falls_back() {
        let config = Config {
            delimiter: String::new(),
            ..Default::default()
        };
        assert_eq!(config.delimiter(), Ok('_'));
    }

    #[test]
    fn test_invalid_delimiter() {
        let config = Config {
            delimiter: "::".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.delimiter(),
            Err(CaseError::InvalidDelimiter("::".to_string()))
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "delimiter = \"-\"").unwrap();
        writeln!(file, "vendor_prefix = true").unwrap();
        writeln!(file, "style = \"kebab-case\"").unwrap();

        let layer = ConfigLayer::from_file(file.path()).unwrap();
        assert_eq!(layer.delimiter.as_deref(), Some("-"));
        assert_eq!(layer.vendor_prefix, Some(true));
        assert_eq!(layer.raw_first_word, None);
        assert_eq!(layer.style, Some(Style::Hyphenated));
    }

    #[test]
    fn test_layered_files() {
        let mut global = NamedTempFile::new().unwrap();
        writeln!(global, "delimiter = \"-\"").unwrap();
        writeln!(global, "vendor_prefix = true").unwrap();
        let mut local = NamedTempFile::new().unwrap();
        writeln!(local, "delimiter = \"_\"").unwrap();

        let config = Config::default()
            .merge(ConfigLayer::from_file(global.path()).unwrap())
            .merge(ConfigLayer::from_file(local.path()).unwrap());
        assert_eq!(config.delimiter(), Ok('_'));
        assert!(config.vendor_prefix);
    }

    #[test]
    fn test_from_file_rejects_unknown_style() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "style = \"shouty\"").unwrap();
        assert!(ConfigLayer::from_file(file.path()).is_err());
    }
}
