//! AST traits - Common interfaces for uniform node access

use super::elements::{Inline, Node};

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    /// Whether the node holds prose meant for translation. Fixed when the node is built.
    fn is_translatable(&self) -> bool;
}

/// Nodes that own child nodes
pub trait Container: AstNode {
    fn label(&self) -> String;
    fn children(&self) -> &[Node];
}

/// Read-only tree traversal. Nodes are visited in source order, parents before children.
pub trait Visitor {
    fn visit_node(&mut self, _node: &Node) {}
    fn visit_inline(&mut self, _inline: &Inline) {}
}
