//! Document root

use super::super::traits::Visitor;
use super::inline::Inline;
use super::node::Node;
use serde::{Deserialize, Serialize};

/// The parse result: top-level nodes in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Walk every node and inline run, depth first, in source order
    pub fn walk<V: Visitor>(&self, visitor: &mut V) {
        walk_nodes(&self.children, visitor);
    }
}

fn walk_nodes<V: Visitor>(nodes: &[Node], visitor: &mut V) {
    for node in nodes {
        visitor.visit_node(node);
        match node {
            Node::Paragraph(paragraph) => walk_inlines(&paragraph.children, visitor),
            Node::DefinitionList(list) => {
                for definition in &list.definitions {
                    walk_inlines(&definition.description, visitor);
                }
            }
            _ => walk_nodes(node.children(), visitor),
        }
    }
}

fn walk_inlines<V: Visitor>(inlines: &[Inline], visitor: &mut V) {
    for inline in inlines {
        visitor.visit_inline(inline);
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
