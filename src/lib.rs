pub mod case;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;

pub use case::delimiter;
pub use case::{
    camelize, compound, delimiterize, hyphenated, lc_first, to_studly_caps, tokenize, uc_first,
};
pub use config::{Config, ConfigLayer};
pub use convert::{Conversion, Converter, Style};
pub use error::CaseError;
