//! Recursive descent parser over the token stream
//!
//!     The parser is a cursor plus a block router. The top-level driver skips blank lines and
//!     hands each block to [Parser::parse_block], which dispatches on the current token's
//!     kind. Container parsers call back into the router for their children.
//!
//! Recovery
//!
//!     Parsing never fails. A closer with no opener routes to no node and the caller steps
//!     over it; a block whose closer never comes is closed at end of input with everything
//!     parsed so far.

use super::cursor::TokenCursor;
use super::parameters::is_show_assignment;
use crate::leandoc::ast::{DefinitionBlock, Document, Node};
use crate::leandoc::lexing::tokenize;
use crate::leandoc::token::{Token, TokenKind};

/// One parse over one token sequence
#[derive(Debug)]
pub struct Parser {
    pub(super) cursor: TokenCursor,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
        }
    }

    /// Parse the whole token sequence into a document
    pub fn parse(mut self) -> Document {
        let mut children = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() {
                break;
            }
            match self.parse_block() {
                Some(node) => children.push(node),
                None => self.skip_stray(),
            }
        }
        Document::new(children)
    }

    /// Route the block at the cursor to its parser.
    ///
    /// Closers (`::::`, `:::`, end of input) yield `None` so that the enclosing loop can
    /// decide what to do with them.
    pub fn parse_block(&mut self) -> Option<Node> {
        let kind = self.cursor.kind();
        log::trace!(
            "routing {} at line {}",
            kind,
            self.cursor.current().line
        );

        match kind {
            TokenKind::ContainerEnd | TokenKind::BlockEnd | TokenKind::EndOfInput => None,
            TokenKind::BlockStart => {
                if is_show_assignment(&self.cursor.current().text) {
                    Some(self.parse_show_assignment())
                } else {
                    Some(self.parse_simple_block())
                }
            }
            TokenKind::ContainerStart => Some(self.parse_container_block()),
            TokenKind::PercentFence => Some(self.parse_metadata_block()),
            TokenKind::Header => Some(self.parse_header()),
            TokenKind::CodeFence => Some(self.parse_code_block()),
            TokenKind::DocCommentStart => Some(self.parse_doc_comment()),
            TokenKind::DocDirective => Some(self.parse_doc_directive()),
            TokenKind::CodeKeyword => Some(self.parse_code_line()),
            TokenKind::DefTerm => Some(self.parse_definition_list()),
            TokenKind::IncludeDirective => Some(self.parse_include_directive()),
            TokenKind::DocstringPlaceholder => Some(self.parse_docstring_placeholder()),
            _ => match kind.role() {
                Some(role) => Some(self.parse_inline_role(role)),
                None => self.parse_paragraph(),
            },
        }
    }

    /// Children of a container, up to and including `closer`
    pub(super) fn parse_children(&mut self, closer: TokenKind) -> Vec<Node> {
        let mut children = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() {
                log::debug!(
                    "unterminated block closed at end of input (expected {})",
                    closer
                );
                break;
            }
            if self.cursor.consume(closer) {
                break;
            }
            match self.parse_block() {
                Some(node) => children.push(node),
                None => self.skip_stray(),
            }
        }
        children
    }

    /// A `:::` line holding a `show := ...` assignment: one raw leaf, no children
    fn parse_show_assignment(&mut self) -> Node {
        let raw = self.cursor.current().text.trim().to_string();
        self.cursor.advance();
        DefinitionBlock::new(raw).into()
    }

    fn skip_stray(&mut self) {
        let token = self.cursor.current();
        log::debug!(
            "skipping stray {} at line {}, column {}",
            token.kind,
            token.line,
            token.column
        );
        self.cursor.advance();
    }
}

/// Tokenize and parse a source string
pub fn parse_document(source: &str) -> Document {
    Parser::new(tokenize(source)).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leandoc::ast::AstNode;

    #[test]
    fn test_empty_source() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("\n\n\n").is_empty());
    }

    #[test]
    fn test_stray_closers_are_dropped() {
        let doc = parse_document("::::\n:::\nText\n");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.children[0].node_type(), "Paragraph");
    }

    #[test]
    fn test_router_closer_yields_no_node() {
        let mut parser = Parser::new(tokenize(":::"));
        assert_eq!(parser.parse_block(), None);
        assert_eq!(parser.cursor.position(), 0);
    }

    #[test]
    fn test_show_assignment_is_a_leaf() {
        let doc = parse_document("::: leanFirst show := foo\nafter\n:::\n");
        assert_eq!(
            doc.children[0],
            Node::DefinitionBlock(DefinitionBlock::new("::: leanFirst show := foo"))
        );
        assert!(!doc.children[0].is_translatable());
        // The body is not nested under it
        assert_eq!(doc.children[1].node_type(), "Paragraph");
        assert_eq!(doc.len(), 2);
    }
}
