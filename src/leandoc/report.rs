//! Inspection report
//!
//!     A plain text summary of one parse, used when checking how a document was understood:
//!
//!         - size statistics (characters, tokens, top-level nodes)
//!         - token counts per kind, and every role token with its line
//!         - node counts per type, paragraph runs included
//!         - code blocks that carry params, definition lists, `::::` containers
//!
//!     Sections with nothing to show are left out.

use crate::leandoc::ast::{AstNode, CodeBlock, ContainerBlock, Document, Node, Visitor};
use crate::leandoc::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which optional sections to include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub list_inline_roles: bool,
    pub list_code_blocks: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            list_inline_roles: true,
            list_code_blocks: true,
        }
    }
}

#[derive(Default)]
struct Survey<'a> {
    node_counts: BTreeMap<&'static str, usize>,
    code_blocks: Vec<&'a CodeBlock>,
    definition_counts: Vec<usize>,
    containers: Vec<&'a ContainerBlock>,
}

impl<'a> Survey<'a> {
    fn of(document: &'a Document) -> Self {
        let mut survey = Survey::default();
        for node in document {
            survey.visit(node);
        }
        survey
    }

    fn visit(&mut self, node: &'a Node) {
        self.visit_node(node);
        match node {
            Node::CodeBlock(code) if !code.params.is_empty() => self.code_blocks.push(code),
            Node::DefinitionList(list) => self.definition_counts.push(list.definitions.len()),
            Node::ContainerBlock(container) => self.containers.push(container),
            _ => {}
        }
        for child in node.children() {
            self.visit(child);
        }
    }
}

impl Visitor for Survey<'_> {
    fn visit_node(&mut self, node: &Node) {
        *self.node_counts.entry(node.node_type()).or_default() += 1;
        if let Node::Paragraph(paragraph) = node {
            for inline in &paragraph.children {
                *self.node_counts.entry(inline.node_type()).or_default() += 1;
            }
        }
    }
}

/// Build the report for one source, its tokens and its document
pub fn generate(
    source: &str,
    tokens: &[Token],
    document: &Document,
    options: &ReportOptions,
) -> String {
    let mut out = String::from("=== LEAN PARSER TEST REPORT ===\n\n");

    out.push_str("Statistics:\n");
    out.push_str(&format!(
        "- Content length: {} characters\n",
        source.chars().count()
    ));
    out.push_str(&format!("- Total tokens: {}\n", tokens.len()));
    out.push_str(&format!("- AST nodes: {}\n\n", document.len()));

    let mut token_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for token in tokens {
        *token_counts.entry(token.kind.name()).or_default() += 1;
    }
    out.push_str("Token types:\n");
    for (name, count) in &token_counts {
        out.push_str(&format!("- {}: {}\n", name, count));
    }
    out.push('\n');

    if options.list_inline_roles {
        let roles: Vec<&Token> = tokens.iter().filter(|t| is_role_token(t.kind)).collect();
        if !roles.is_empty() {
            out.push_str("Inline roles detected:\n");
            for token in roles {
                out.push_str(&format!(
                    "- {}: {} (line {})\n",
                    token.kind,
                    quoted(&token.text),
                    token.line
                ));
            }
            out.push('\n');
        }
    }

    let survey = Survey::of(document);
    out.push_str("AST node types:\n");
    for (node_type, count) in &survey.node_counts {
        out.push_str(&format!("- {}: {}\n", node_type, count));
    }
    out.push('\n');

    if options.list_code_blocks && !survey.code_blocks.is_empty() {
        out.push_str("Code blocks with parameters:\n");
        for (i, code) in survey.code_blocks.iter().enumerate() {
            let params: Vec<String> = code
                .params
                .iter()
                .map(|(key, value)| format!("{}: {}", quoted(key), quoted(value)))
                .collect();
            out.push_str(&format!(
                "- Block {}: language={}, params={{{}}}\n",
                i + 1,
                code.language,
                params.join(", ")
            ));
        }
        out.push('\n');
    }

    if !survey.definition_counts.is_empty() {
        out.push_str("Definition lists:\n");
        for (i, count) in survey.definition_counts.iter().enumerate() {
            out.push_str(&format!("- List {}: {} definitions\n", i + 1, count));
        }
        out.push('\n');
    }

    if !survey.containers.is_empty() {
        out.push_str("Container blocks:\n");
        for (i, container) in survey.containers.iter().enumerate() {
            let directives: Vec<String> =
                container.directives.iter().map(|d| quoted(d)).collect();
            out.push_str(&format!(
                "- Container {}: title='{}', directives=[{}]\n",
                i + 1,
                container.title_text().unwrap_or("No title"),
                directives.join(", ")
            ));
        }
    }

    out
}

fn is_role_token(kind: TokenKind) -> bool {
    kind.role().is_some()
}

/// Quote a string for the report and `tokens.json`: single quotes unless the string holds
/// a single quote and no double quote, with backslash escapes for the quote and control
/// characters
pub(crate) fn quoted(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
