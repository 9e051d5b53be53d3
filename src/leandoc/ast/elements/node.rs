//! Node enum definition

use super::super::traits::{AstNode, Container};
use super::blocks::{
    CodeBlock, CodeLine, DefinitionBlock, DocComment, DocDirective, DocstringPlaceholder, Header,
    IncludeDirective, MetadataBlock,
};
use super::containers::{ContainerBlock, SimpleBlock};
use super::definition::DefinitionList;
use super::inline::{InlineRole, Paragraph};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node represents any block that can appear in a document or inside a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Header(Header),
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    CodeLine(CodeLine),
    DocComment(DocComment),
    DocDirective(DocDirective),
    MetadataBlock(MetadataBlock),
    ContainerBlock(ContainerBlock),
    SimpleBlock(SimpleBlock),
    DefinitionBlock(DefinitionBlock),
    InlineRole(InlineRole),
    IncludeDirective(IncludeDirective),
    DocstringPlaceholder(DocstringPlaceholder),
    DefinitionList(DefinitionList),
}

impl Node {
    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Node::Header(n) => n,
            Node::Paragraph(n) => n,
            Node::CodeBlock(n) => n,
            Node::CodeLine(n) => n,
            Node::DocComment(n) => n,
            Node::DocDirective(n) => n,
            Node::MetadataBlock(n) => n,
            Node::ContainerBlock(n) => n,
            Node::SimpleBlock(n) => n,
            Node::DefinitionBlock(n) => n,
            Node::InlineRole(n) => n,
            Node::IncludeDirective(n) => n,
            Node::DocstringPlaceholder(n) => n,
            Node::DefinitionList(n) => n,
        }
    }

    /// Child blocks; empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::ContainerBlock(c) => c.children(),
            Node::SimpleBlock(s) => s.children(),
            _ => &[],
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::ContainerBlock(_) | Node::SimpleBlock(_))
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Node::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_simple_block(&self) -> Option<&SimpleBlock> {
        match self {
            Node::SimpleBlock(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_container_block(&self) -> Option<&ContainerBlock> {
        match self {
            Node::ContainerBlock(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Node::CodeBlock(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_definition_list(&self) -> Option<&DefinitionList> {
        match self {
            Node::DefinitionList(d) => Some(d),
            _ => None,
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        self.as_ast_node().node_type()
    }
    fn display_label(&self) -> String {
        self.as_ast_node().display_label()
    }
    fn is_translatable(&self) -> bool {
        self.as_ast_node().is_translatable()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.node_type(), self.display_label())
    }
}

macro_rules! impl_from_element {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(element: $variant) -> Self {
                    Node::$variant(element)
                }
            }
        )*
    };
}

impl_from_element!(
    Header,
    Paragraph,
    CodeBlock,
    CodeLine,
    DocComment,
    DocDirective,
    MetadataBlock,
    ContainerBlock,
    SimpleBlock,
    DefinitionBlock,
    InlineRole,
    IncludeDirective,
    DocstringPlaceholder,
    DefinitionList,
);
