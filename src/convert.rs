use crate::case::{
    camelize, compound, delimiter, delimiterize, hyphenated, lc_first, to_studly_caps, tokenize,
    uc_first,
};
use crate::error::CaseError;
use crate::Config;
use anyhow::{Context, Result};
use log::debug;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Style {
    Camel,
    Studly,
    Delimited,
    Hyphenated,
    UpperFirst,
    LowerFirst,
}

impl FromStr for Style {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match name.as_str() {
            "camel" | "camelize" | "camelcase" | "tocamelcase" | "nerdcaps" | "tonerdcaps" => {
                Ok(Style::Camel)
            }
            "studly" | "studlycaps" | "tostudlycaps" | "pascal" | "pascalcase"
            | "topascalcase" => Ok(Style::Studly),
            "delimited" | "delimiterize" | "snake" | "snakecase" | "tosnakecase"
            | "underscored" => Ok(Style::Delimited),
            "hyphenated" | "kebab" | "kebabcase" | "tokebabcase" | "train" | "traincase"
            | "totraincase" | "chain" | "chaincase" | "tochaincase" | "spinal"
            | "spinalcase" | "tospinalcase" => Ok(Style::Hyphenated),
            "ucfirst" | "upperfirst" | "touppercasefirst" => Ok(Style::UpperFirst),
            "lcfirst" | "lowerfirst" | "tolowercasefirst" => Ok(Style::LowerFirst),
            _ => Err(CaseError::UnknownStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = CaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Camel => write!(f, "camel"),
            Style::Studly => write!(f, "studly"),
            Style::Delimited => write!(f, "delimited"),
            Style::Hyphenated => write!(f, "hyphenated"),
            Style::UpperFirst => write!(f, "upper-first"),
            Style::LowerFirst => write!(f, "lower-first"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenList {
    pub input: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileConversion {
    pub file: PathBuf,
    pub output: String,
}

/// Case conversions bound to one set of options.
///
/// Holds no mutable state, so a single converter can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Converter {
    delimiter: char,
    vendor_prefix: bool,
    raw_first_word: bool,
    identifier: Regex,
}

impl Converter {
    pub fn new(config: &Config) -> Result<Self> {
        let delimiter = config
            .delimiter()
            .context("Invalid delimiter in configuration")?;
        Self::with_options(delimiter, config.vendor_prefix, config.raw_first_word)
    }

    pub fn with_options(delimiter: char, vendor_prefix: bool, raw_first_word: bool) -> Result<Self> {
        let d = delimiter::escape(delimiter);
        let pattern = format!(
            r"{d}?[A-Za-z][A-Za-z0-9]*(?:{d}+[A-Za-z0-9]+)*{d}*",
            d = d
        );
        let identifier = Regex::new(&pattern)
            .with_context(|| format!("Failed to build identifier pattern for {:?}", delimiter))?;

        debug!(
            "converter: delimiter {:?}, vendor prefix {}, raw first word {}, pattern {}",
            delimiter, vendor_prefix, raw_first_word, pattern
        );

        Ok(Self {
            delimiter,
            vendor_prefix,
            raw_first_word,
            identifier,
        })
    }

    pub fn convert(&self, style: Style, text: &str) -> String {
        let d = Some(self.delimiter);
        match style {
            Style::Camel => camelize(text, d),
            Style::Studly => to_studly_caps(text, d),
            Style::Delimited => delimiterize(text, d, self.vendor_prefix),
            Style::Hyphenated => hyphenated(text, self.vendor_prefix),
            Style::UpperFirst => uc_first(text, d),
            Style::LowerFirst => lc_first(text, d),
        }
    }

    pub fn conversion(&self, style: Style, text: &str) -> Conversion {
        Conversion {
            input: text.to_string(),
            output: self.convert(style, text),
        }
    }

    pub fn tokenize(&self, text: &str) -> TokenList {
        TokenList {
            input: text.to_string(),
            tokens: tokenize(text, Some(self.delimiter), self.raw_first_word),
        }
    }

    pub fn compound<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        compound(tokens, Some(self.delimiter))
    }

    /// Convert every identifier found in free text, leaving the rest as is.
    pub fn convert_text(&self, style: Style, content: &str) -> String {
        self.identifier
            .replace_all(content, |caps: &Captures| self.convert(style, &caps[0]))
            .into_owned()
    }

    pub fn convert_file(&self, style: Style, path: &Path) -> Result<FileConversion> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        debug!("converting {} ({} bytes) to {}", path.display(), content.len(), style);

        Ok(FileConversion {
            file: path.to_path_buf(),
            output: self.convert_text(style, &content),
        })
    }
}
