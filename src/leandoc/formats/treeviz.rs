//! Treeviz formatter
//!
//! One line per node, with box drawing connectors for nesting:
//!
//!     ├─ Header: h1 Title
//!     └─ SimpleBlock: note
//!       └─ Paragraph: Hello {name}`World`
//!         ├─ Text: Hello
//!         └─ InlineRole: {name}`World`
//!
//! Labels are cut to 30 characters and newlines show as `↵`. Paragraphs list their inline
//! runs and definition lists list their terms, each with its description runs.

use super::registry::{FormatError, Formatter};
use crate::leandoc::ast::elements::{truncate, LabelStyle};
use crate::leandoc::ast::{AstNode, Definition, Document, Inline, Node};

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    append_children(&mut result, &doc.children, "");
    result
}

fn append_line(result: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node_type,
        truncate(label, 30, LabelStyle::TREE)
    ));
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    append_line(
        result,
        prefix,
        is_last,
        node.node_type(),
        &node.display_label(),
    );
    let new_prefix = child_prefix(prefix, is_last);

    match node {
        Node::ContainerBlock(_) | Node::SimpleBlock(_) => {
            append_children(result, node.children(), &new_prefix);
        }
        Node::Paragraph(paragraph) => {
            append_inlines(result, &paragraph.children, &new_prefix);
        }
        Node::DefinitionList(list) => {
            append_definitions(result, &list.definitions, &new_prefix);
        }
        _ => {}
    }
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

fn append_inlines(result: &mut String, inlines: &[Inline], prefix: &str) {
    for (i, inline) in inlines.iter().enumerate() {
        let is_last = i == inlines.len() - 1;
        append_line(
            result,
            prefix,
            is_last,
            inline.node_type(),
            &inline.display_label(),
        );
    }
}

fn append_definitions(result: &mut String, definitions: &[Definition], prefix: &str) {
    for (i, definition) in definitions.iter().enumerate() {
        let is_last = i == definitions.len() - 1;
        append_line(result, prefix, is_last, "Definition", &definition.term);
        append_inlines(
            result,
            &definition.description,
            &child_prefix(prefix, is_last),
        );
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Visual tree, one line per node"
    }
}
