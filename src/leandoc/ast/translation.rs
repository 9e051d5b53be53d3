//! Original/translated text pairs

use serde::{Deserialize, Serialize};

/// A piece of prose and its translation.
///
/// The parser only ever fills `original`; `translated` is left empty for the translation
/// step downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub original: String,
    pub translated: String,
}

impl Translation {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    pub fn is_translated(&self) -> bool {
        !self.translated.is_empty()
    }
}

impl From<&str> for Translation {
    fn from(original: &str) -> Self {
        Self::new(original)
    }
}
