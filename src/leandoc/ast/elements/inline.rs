//! Inline content: paragraphs and the text/role runs inside them

use super::super::traits::AstNode;
use super::{truncate, LabelStyle};
use crate::leandoc::token::RoleKind;
use serde::{Deserialize, Serialize};

/// One run of inline content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Inline {
    Text(Text),
    #[serde(rename = "InlineRole")]
    Role(InlineRole),
}

impl Inline {
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text(Text::new(content))
    }

    pub fn role(role_kind: RoleKind, raw_content: impl Into<String>) -> Self {
        Inline::Role(InlineRole::new(role_kind, raw_content))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Inline::Text(text) => Some(text),
            Inline::Role(_) => None,
        }
    }

    pub fn as_role(&self) -> Option<&InlineRole> {
        match self {
            Inline::Role(role) => Some(role),
            Inline::Text(_) => None,
        }
    }

    /// The source text of this run
    pub fn source(&self) -> &str {
        match self {
            Inline::Text(text) => &text.content,
            Inline::Role(role) => &role.raw_content,
        }
    }
}

impl AstNode for Inline {
    fn node_type(&self) -> &'static str {
        match self {
            Inline::Text(t) => t.node_type(),
            Inline::Role(r) => r.node_type(),
        }
    }
    fn display_label(&self) -> String {
        match self {
            Inline::Text(t) => t.display_label(),
            Inline::Role(r) => r.display_label(),
        }
    }
    fn is_translatable(&self) -> bool {
        match self {
            Inline::Text(t) => t.is_translatable(),
            Inline::Role(r) => r.is_translatable(),
        }
    }
}

/// Prose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    translatable: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            translatable: true,
        }
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }
    fn display_label(&self) -> String {
        self.content.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// A typed annotation such as `{name}`Nat.succ``. `raw_content` keeps the delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRole {
    pub role_kind: RoleKind,
    pub raw_content: String,
    translatable: bool,
}

impl InlineRole {
    pub fn new(role_kind: RoleKind, raw_content: impl Into<String>) -> Self {
        Self {
            role_kind,
            raw_content: raw_content.into(),
            translatable: false,
        }
    }
}

impl AstNode for InlineRole {
    fn node_type(&self) -> &'static str {
        "InlineRole"
    }
    fn display_label(&self) -> String {
        self.raw_content.clone()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

/// A run of prose lines. Soft line breaks stay inside the text runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<Inline>,
    translatable: bool,
}

impl Paragraph {
    pub fn new(children: Vec<Inline>) -> Self {
        let translatable = children.iter().any(|child| child.as_text().is_some());
        Self {
            children,
            translatable,
        }
    }

    /// The paragraph source, roles included
    pub fn text(&self) -> String {
        self.children.iter().map(Inline::source).collect()
    }

    pub fn roles(&self) -> impl Iterator<Item = &InlineRole> {
        self.children.iter().filter_map(Inline::as_role)
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }
    fn display_label(&self) -> String {
        truncate(&self.text(), 50, LabelStyle::PLAIN)
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text_joins_runs() {
        let para = Paragraph::new(vec![
            Inline::text("Hello "),
            Inline::role(RoleKind::Name, "{name}`World`"),
        ]);
        assert_eq!(para.text(), "Hello {name}`World`");
        assert_eq!(para.roles().count(), 1);
        assert!(para.is_translatable());
    }

    #[test]
    fn test_role_only_paragraph_is_not_translatable() {
        let para = Paragraph::new(vec![Inline::role(RoleKind::Todo, "{TODO}[x]")]);
        assert!(!para.is_translatable());
    }

    #[test]
    fn test_inline_serialization_tags() {
        let text = serde_json::to_value(Inline::text("a")).unwrap();
        assert_eq!(text["type"], "Text");
        assert_eq!(text["content"], "a");

        let role = serde_json::to_value(Inline::role(RoleKind::Lean, "{lean}`Nat`")).unwrap();
        assert_eq!(role["type"], "InlineRole");
        assert_eq!(role["role_kind"], "lean");
        assert_eq!(role["raw_content"], "{lean}`Nat`");
        assert_eq!(role["translatable"], false);
    }
}
