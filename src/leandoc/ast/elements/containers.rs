//! Container elements
//!
//!     Two delimiter families nest other blocks:
//!
//!         - `::::` container blocks carry directive tags (`keepEnv`, ...) and/or a title.
//!         - `:::` simple blocks carry a kind (`example`, `syntax`, ...), a title and a
//!           parameter map.
//!
//!     Both own their children exclusively, in source order.

use super::super::traits::{AstNode, Container};
use super::super::translation::Translation;
use super::node::Node;
use super::Params;
use serde::{Deserialize, Serialize};

/// `:::: keepEnv` ... `::::`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Translation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<String>,
    pub children: Vec<Node>,
    translatable: bool,
}

impl ContainerBlock {
    /// Builds a container. Directives are kept as an ordered set: repeats are dropped.
    pub fn new(title: Option<String>, directives: Vec<String>, children: Vec<Node>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(directives.len());
        for directive in directives {
            if !unique.contains(&directive) {
                unique.push(directive);
            }
        }
        Self {
            title: title.filter(|t| !t.is_empty()).map(Translation::new),
            directives: unique,
            children,
            translatable: false,
        }
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_ref().map(|t| t.original.as_str())
    }

    pub fn has_directive(&self, directive: &str) -> bool {
        self.directives.iter().any(|d| d == directive)
    }
}

impl AstNode for ContainerBlock {
    fn node_type(&self) -> &'static str {
        "ContainerBlock"
    }
    fn display_label(&self) -> String {
        self.label()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

impl Container for ContainerBlock {
    fn label(&self) -> String {
        let mut parts: Vec<String> = self.directives.clone();
        if let Some(title) = self.title_text() {
            parts.push(format!("\"{}\"", title));
        }
        parts.join(" ")
    }
    fn children(&self) -> &[Node] {
        &self.children
    }
}

/// `::: kind (key := value) "Title"` ... `:::`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleBlock {
    pub block_kind: String,
    pub title: Translation,
    pub params: Params,
    pub children: Vec<Node>,
    translatable: bool,
}

impl SimpleBlock {
    pub fn new(
        block_kind: impl Into<String>,
        title: impl Into<String>,
        params: Params,
        children: Vec<Node>,
    ) -> Self {
        Self {
            block_kind: block_kind.into(),
            title: Translation::new(title),
            params,
            children,
            translatable: false,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl AstNode for SimpleBlock {
    fn node_type(&self) -> &'static str {
        "SimpleBlock"
    }
    fn display_label(&self) -> String {
        self.label()
    }
    fn is_translatable(&self) -> bool {
        self.translatable
    }
}

impl Container for SimpleBlock {
    fn label(&self) -> String {
        if self.title.is_empty() {
            self.block_kind.clone()
        } else {
            format!("{} \"{}\"", self.block_kind, self.title.original)
        }
    }
    fn children(&self) -> &[Node] {
        &self.children
    }
}
