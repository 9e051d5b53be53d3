//! Fluent assertion API for parsed documents

use crate::leandoc::ast::{
    AstNode, CodeBlock, ContainerBlock, DefinitionList, Document, Header, Inline, Node,
    Paragraph, SimpleBlock,
};
use crate::leandoc::token::RoleKind;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| n.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

fn child_at<'a, F>(children: &'a [Node], index: usize, context: &str, assertion: F)
where
    F: FnOnce(NodeAssertion<'a>),
{
    assert!(
        index < children.len(),
        "{}: child index {} out of bounds ({} children: [{}])",
        context,
        index,
        children.len(),
        summarize(children)
    );
    assertion(NodeAssertion {
        node: &children[index],
        context: format!("{}.children[{}]", context, index),
    });
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.doc.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} nodes, found {} nodes: [{}]",
            expected,
            actual,
            summarize(&self.doc.children)
        );
        self
    }

    /// Assert the top-level node types, in order
    pub fn node_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.iter().map(|n| n.node_type()).collect();
        assert_eq!(actual, expected, "Top-level node types differ");
        self
    }

    /// Assert on a top-level node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.len(),
            "Node index {} out of bounds (document has {} nodes)",
            index,
            self.doc.len()
        );
        assertion(NodeAssertion {
            node: &self.doc.children[index],
            context: format!("nodes[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.node.node_type()
        )
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn is_translatable(self, expected: bool) -> Self {
        assert_eq!(
            self.node.is_translatable(),
            expected,
            "{}: translatable flag",
            self.context
        );
        self
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.node {
            Node::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            _ => self.mismatch("Paragraph"),
        }
    }

    pub fn assert_header(self) -> HeaderAssertion<'a> {
        match self.node {
            Node::Header(header) => HeaderAssertion {
                header,
                context: self.context,
            },
            _ => self.mismatch("Header"),
        }
    }

    pub fn assert_code_block(self) -> CodeBlockAssertion<'a> {
        match self.node {
            Node::CodeBlock(code) => CodeBlockAssertion {
                code,
                context: self.context,
            },
            _ => self.mismatch("CodeBlock"),
        }
    }

    pub fn assert_simple_block(self) -> SimpleBlockAssertion<'a> {
        match self.node {
            Node::SimpleBlock(block) => SimpleBlockAssertion {
                block,
                context: self.context,
            },
            _ => self.mismatch("SimpleBlock"),
        }
    }

    pub fn assert_container(self) -> ContainerAssertion<'a> {
        match self.node {
            Node::ContainerBlock(container) => ContainerAssertion {
                container,
                context: self.context,
            },
            _ => self.mismatch("ContainerBlock"),
        }
    }

    pub fn assert_definition_list(self) -> DefinitionListAssertion<'a> {
        match self.node {
            Node::DefinitionList(list) => DefinitionListAssertion {
                list,
                context: self.context,
            },
            _ => self.mismatch("DefinitionList"),
        }
    }

    /// Assert a standalone role node at block position
    pub fn assert_inline_role(self, role_kind: RoleKind, raw_content: &str) -> Self {
        match self.node {
            Node::InlineRole(role) => {
                assert_eq!(role.role_kind, role_kind, "{}: role kind", self.context);
                assert_eq!(role.raw_content, raw_content, "{}: raw content", self.context);
            }
            _ => self.mismatch("InlineRole"),
        }
        self
    }

    /// Assert only the node type
    pub fn assert_type(self, expected: &str) -> Self {
        if self.node.node_type() != expected {
            self.mismatch(expected);
        }
        self
    }
}

// ============================================================================
// Inline runs
// ============================================================================

fn check_inlines(context: &str, actual: &[Inline], expected: &[Inline]) {
    assert_eq!(
        actual, expected,
        "{}: inline runs differ",
        context
    );
}

fn check_text_at(context: &str, inlines: &[Inline], index: usize, content: &str) {
    match inlines.get(index) {
        Some(Inline::Text(text)) => {
            assert_eq!(text.content, content, "{}: text run {}", context, index)
        }
        other => panic!("{}: expected Text at {}, found {:?}", context, index, other),
    }
}

fn check_role_at(
    context: &str,
    inlines: &[Inline],
    index: usize,
    role_kind: RoleKind,
    raw_content: &str,
) {
    match inlines.get(index) {
        Some(Inline::Role(role)) => {
            assert_eq!(role.role_kind, role_kind, "{}: role {} kind", context, index);
            assert_eq!(
                role.raw_content, raw_content,
                "{}: role {} content",
                context, index
            );
        }
        other => panic!(
            "{}: expected InlineRole at {}, found {:?}",
            context, index, other
        ),
    }
}

// ============================================================================
// Paragraph Assertions
// ============================================================================

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// Assert the full source text of the paragraph
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.paragraph.text(),
            expected,
            "{}: paragraph text",
            self.context
        );
        self
    }

    pub fn inline_count(self, expected: usize) -> Self {
        assert_eq!(
            self.paragraph.children.len(),
            expected,
            "{}: inline count in {:?}",
            self.context,
            self.paragraph.children
        );
        self
    }

    pub fn inlines(self, expected: &[Inline]) -> Self {
        check_inlines(&self.context, &self.paragraph.children, expected);
        self
    }

    pub fn text_at(self, index: usize, content: &str) -> Self {
        check_text_at(&self.context, &self.paragraph.children, index, content);
        self
    }

    pub fn role_at(self, index: usize, role_kind: RoleKind, raw_content: &str) -> Self {
        check_role_at(
            &self.context,
            &self.paragraph.children,
            index,
            role_kind,
            raw_content,
        );
        self
    }

    pub fn role_count(self, expected: usize) -> Self {
        assert_eq!(
            self.paragraph.roles().count(),
            expected,
            "{}: role count",
            self.context
        );
        self
    }
}

// ============================================================================
// Header Assertions
// ============================================================================

pub struct HeaderAssertion<'a> {
    header: &'a Header,
    context: String,
}

impl<'a> HeaderAssertion<'a> {
    pub fn level(self, expected: usize) -> Self {
        assert_eq!(self.header.level, expected, "{}: header level", self.context);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.header.text(), expected, "{}: header text", self.context);
        self
    }
}

// ============================================================================
// Code Block Assertions
// ============================================================================

pub struct CodeBlockAssertion<'a> {
    code: &'a CodeBlock,
    context: String,
}

impl<'a> CodeBlockAssertion<'a> {
    pub fn language(self, expected: &str) -> Self {
        assert_eq!(self.code.language, expected, "{}: language", self.context);
        self
    }

    pub fn param(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.code.param(key),
            Some(expected),
            "{}: param {:?} in {:?}",
            self.context,
            key,
            self.code.params
        );
        self
    }

    pub fn param_count(self, expected: usize) -> Self {
        assert_eq!(
            self.code.params.len(),
            expected,
            "{}: params {:?}",
            self.context,
            self.code.params
        );
        self
    }

    pub fn body(self, expected: &str) -> Self {
        assert_eq!(self.code.body, expected, "{}: code body", self.context);
        self
    }
}

// ============================================================================
// Simple Block Assertions
// ============================================================================

pub struct SimpleBlockAssertion<'a> {
    block: &'a SimpleBlock,
    context: String,
}

impl<'a> SimpleBlockAssertion<'a> {
    pub fn block_kind(self, expected: &str) -> Self {
        assert_eq!(
            self.block.block_kind, expected,
            "{}: block kind",
            self.context
        );
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.block.title.original, expected,
            "{}: block title",
            self.context
        );
        self
    }

    pub fn param(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.block.param(key),
            Some(expected),
            "{}: param {:?} in {:?}",
            self.context,
            key,
            self.block.params
        );
        self
    }

    pub fn param_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.params.len(),
            expected,
            "{}: params {:?}",
            self.context,
            self.block.params
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.children.len(),
            expected,
            "{}: children [{}]",
            self.context,
            summarize(&self.block.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        child_at(&self.block.children, index, &self.context, assertion);
        self
    }
}

// ============================================================================
// Container Assertions
// ============================================================================

pub struct ContainerAssertion<'a> {
    container: &'a ContainerBlock,
    context: String,
}

impl<'a> ContainerAssertion<'a> {
    pub fn title(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.container.title_text(),
            expected,
            "{}: container title",
            self.context
        );
        self
    }

    pub fn directives(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.container.directives, expected,
            "{}: directives",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.container.children.len(),
            expected,
            "{}: children [{}]",
            self.context,
            summarize(&self.container.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        child_at(&self.container.children, index, &self.context, assertion);
        self
    }
}

// ============================================================================
// Definition List Assertions
// ============================================================================

pub struct DefinitionListAssertion<'a> {
    list: &'a DefinitionList,
    context: String,
}

impl<'a> DefinitionListAssertion<'a> {
    pub fn definition_count(self, expected: usize) -> Self {
        let terms: Vec<&str> = self.list.terms().collect();
        assert_eq!(
            terms.len(),
            expected,
            "{}: definitions {:?}",
            self.context,
            terms
        );
        self
    }

    fn definition(&self, index: usize) -> &'a crate::leandoc::ast::Definition {
        let list: &'a DefinitionList = self.list;
        list.definitions.get(index).unwrap_or_else(|| {
            panic!(
                "{}: definition index {} out of bounds ({} definitions)",
                self.context,
                index,
                list.definitions.len()
            )
        })
    }

    pub fn term_at(self, index: usize, expected: &str) -> Self {
        assert_eq!(
            self.definition(index).term,
            expected,
            "{}: term {}",
            self.context,
            index
        );
        self
    }

    /// Assert the description source of one definition, roles included
    pub fn description_text(self, index: usize, expected: &str) -> Self {
        assert_eq!(
            self.definition(index).description_text(),
            expected,
            "{}: description {}",
            self.context,
            index
        );
        self
    }

    pub fn description(self, index: usize, expected: &[Inline]) -> Self {
        let context = format!("{}.definitions[{}]", self.context, index);
        check_inlines(&context, &self.definition(index).description, expected);
        self
    }
}
