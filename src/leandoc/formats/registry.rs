//! Named document formatters
//!
//! The processor resolves `ast-<name>` through [FormatRegistry], and `leandoc formats`
//! lists whatever is registered here, so adding a [Formatter] is enough to expose it.

use crate::leandoc::ast::Document;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "unknown format '{name}'"),
            FormatError::Serialization(msg) => write!(f, "cannot serialize document: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a whole document under a registry name
pub trait Formatter: Send + Sync {
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// Shown by `leandoc formats`
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// A later formatter with the same name wins
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, name: &str) -> Result<String, FormatError> {
        self.get(name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))?
            .serialize(doc)
    }

    /// Registered names in sorted order
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `json`, `yaml` and `treeviz`; `pretty` only affects JSON
    pub fn with_defaults(pretty: bool) -> Self {
        let mut registry = Self::new();
        registry.register(super::JsonFormatter::new(pretty));
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults(true)
    }
}
