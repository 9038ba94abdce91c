//! Case conversion core: tokenizing identifiers and composing them in a
//! target style without losing acronyms.

pub mod compose;
pub mod compound;
pub mod delimiter;
pub mod tokenizer;
pub(crate) mod word;

pub use compose::{camelize, delimiterize, hyphenated, lc_first, to_studly_caps, uc_first};
pub use compound::compound;
pub use delimiter::DEFAULT_DELIMITER;
pub use tokenizer::tokenize;
