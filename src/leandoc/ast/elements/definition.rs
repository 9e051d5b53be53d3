//! Definition lists
//!
//!     : size
//!       Number of elements in the array.
//!
//!     Each term opens with a `: ` marker line; its description is the indented prose that
//!     follows, split into text and role runs.

use super::super::traits::AstNode;
use super::inline::Inline;
use serde::{Deserialize, Serialize};

/// One term and its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub term: String,
    pub description: Vec<Inline>,
}

impl Definition {
    pub fn new(term: impl Into<String>, description: Vec<Inline>) -> Self {
        Self {
            term: term.into(),
            description,
        }
    }

    pub fn description_text(&self) -> String {
        self.description.iter().map(Inline::source).collect()
    }
}

/// A run of definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionList {
    pub definitions: Vec<Definition>,
    translatable: bool,
}

impl DefinitionList {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self {
            definitions,
            translatable: true,
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.term.as_str())
    }
}

impl AstNode for DefinitionList {
    fn node_type(&self) -> &'static str {
        "DefinitionList"
    }
    fn display_label(&self) -> String {
        self.terms().collect::<Vec<_>>().join(", ")
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}
