//! Leaf block elements
//!
//! Everything here is a single block with no child nodes. Only [Header], [DocComment] and
//! [DocDirective] carry translatable prose; the rest preserve their source text verbatim.

use super::super::traits::AstNode;
use super::super::translation::Translation;
use super::{truncate, LabelStyle, Params};
use serde::{Deserialize, Serialize};

/// `# Title`, `## Section`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub level: usize,
    pub content: Translation,
    translatable: bool,
}

impl Header {
    pub fn new(level: usize, original: impl Into<String>) -> Self {
        Self {
            level,
            content: Translation::new(original),
            translatable: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.content.original
    }
}

impl AstNode for Header {
    fn node_type(&self) -> &'static str {
        "Header"
    }
    fn display_label(&self) -> String {
        format!("h{} {}", self.level, self.content.original)
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// A fenced code block. The body is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: String,
    pub params: Params,
    pub body: String,
    translatable: bool,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, params: Params, body: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            params,
            body: body.into(),
            translatable: false,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl AstNode for CodeBlock {
    fn node_type(&self) -> &'static str {
        "CodeBlock"
    }
    fn display_label(&self) -> String {
        if self.language.is_empty() {
            truncate(&self.body, 30, LabelStyle::PLAIN)
        } else {
            format!("{} {}", self.language, truncate(&self.body, 30, LabelStyle::PLAIN))
        }
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// A source line that starts with a reserved keyword (`import`, `theorem`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLine {
    pub raw: String,
    translatable: bool,
}

impl CodeLine {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            translatable: false,
        }
    }
}

impl AstNode for CodeLine {
    fn node_type(&self) -> &'static str {
        "CodeLine"
    }
    fn display_label(&self) -> String {
        self.raw.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// `/- ... -/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    pub content: Translation,
    translatable: bool,
}

impl DocComment {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            content: Translation::new(original),
            translatable: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.content.original
    }
}

impl AstNode for DocComment {
    fn node_type(&self) -> &'static str {
        "DocComment"
    }
    fn display_label(&self) -> String {
        self.content.original.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// A `#doc` line. Only the first quoted segment is prose; the full line is kept for
/// reassembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocDirective {
    pub content: Translation,
    pub raw_line: String,
    translatable: bool,
}

impl DocDirective {
    pub fn new(original: impl Into<String>, raw_line: impl Into<String>) -> Self {
        Self {
            content: Translation::new(original),
            raw_line: raw_line.into(),
            translatable: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.content.original
    }
}

impl AstNode for DocDirective {
    fn node_type(&self) -> &'static str {
        "DocDirective"
    }
    fn display_label(&self) -> String {
        self.raw_line.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// Front matter between `%%%` fences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataBlock {
    pub raw_body: String,
    translatable: bool,
}

impl MetadataBlock {
    pub fn new(raw_body: impl Into<String>) -> Self {
        Self {
            raw_body: raw_body.into(),
            translatable: false,
        }
    }
}

impl AstNode for MetadataBlock {
    fn node_type(&self) -> &'static str {
        "MetadataBlock"
    }
    fn display_label(&self) -> String {
        format!("{} lines", self.raw_body.lines().count())
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// A `:::` opener whose content is a `show := ...` assignment. Kept as one raw line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionBlock {
    pub raw_content: String,
    translatable: bool,
}

impl DefinitionBlock {
    pub fn new(raw_content: impl Into<String>) -> Self {
        Self {
            raw_content: raw_content.into(),
            translatable: false,
        }
    }
}

impl AstNode for DefinitionBlock {
    fn node_type(&self) -> &'static str {
        "DefinitionBlock"
    }
    fn display_label(&self) -> String {
        self.raw_content.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// `{include ...}` at block position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeDirective {
    pub raw_content: String,
    translatable: bool,
}

impl IncludeDirective {
    pub fn new(raw_content: impl Into<String>) -> Self {
        Self {
            raw_content: raw_content.into(),
            translatable: false,
        }
    }
}

impl AstNode for IncludeDirective {
    fn node_type(&self) -> &'static str {
        "IncludeDirective"
    }
    fn display_label(&self) -> String {
        self.raw_content.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// `{docstring ...}` at block position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocstringPlaceholder {
    pub raw_content: String,
    translatable: bool,
}

impl DocstringPlaceholder {
    pub fn new(raw_content: impl Into<String>) -> Self {
        Self {
            raw_content: raw_content.into(),
            translatable: false,
        }
    }
}

impl AstNode for DocstringPlaceholder {
    fn node_type(&self) -> &'static str {
        "DocstringPlaceholder"
    }
    fn display_label(&self) -> String {
        self.raw_content.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}
