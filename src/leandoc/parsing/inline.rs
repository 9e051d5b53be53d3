//! Running prose: paragraphs and definition lists
//!
//!     Both fold a token run into `Text`/`InlineRole` children with [InlineFolder]: adjacent
//!     non-role tokens merge into one text run, each role token becomes its own node. A
//!     paragraph folds the tokens it walks over; a definition description is first collected
//!     as raw text, trimmed, then tokenized again and folded the same way.

use super::parser::Parser;
use crate::leandoc::ast::{Definition, DefinitionList, Inline, Node, Paragraph};
use crate::leandoc::lexing::tokenize;
use crate::leandoc::token::{Token, TokenKind};

/// Accumulates tokens into inline children
#[derive(Debug, Default)]
pub struct InlineFolder {
    children: Vec<Inline>,
    pending: String,
}

impl InlineFolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: &Token) {
        match token.kind.role() {
            Some(role_kind) => {
                self.flush();
                self.children.push(Inline::role(role_kind, token.text.as_str()));
            }
            None => self.pending.push_str(&token.text),
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let content = std::mem::take(&mut self.pending);
            self.children.push(Inline::text(content));
        }
    }

    pub fn finish(mut self) -> Vec<Inline> {
        self.flush();
        self.children
    }
}

/// Fold a token sequence into inline children. The end token is ignored.
pub fn fold_inlines<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Vec<Inline> {
    let mut folder = InlineFolder::new();
    for token in tokens {
        if !token.is(TokenKind::EndOfInput) {
            folder.push(token);
        }
    }
    folder.finish()
}

/// Tokenize a piece of prose and fold it
pub fn parse_inline_text(text: &str) -> Vec<Inline> {
    if text.is_empty() {
        return Vec::new();
    }
    fold_inlines(&tokenize(text))
}

impl Parser {
    /// Paragraph: prose up to a blank line or a structural token.
    ///
    /// A single newline is a soft break and stays in the text, unless the next line opens a
    /// block (or the input ends), in which case the paragraph ends before it.
    pub(super) fn parse_paragraph(&mut self) -> Option<Node> {
        let mut folder = InlineFolder::new();

        while !self.cursor.is_at_end() {
            let kind = self.cursor.kind();
            if kind.is_block_boundary() {
                break;
            }
            if kind == TokenKind::Newline {
                let next = self.cursor.peek_kind(1);
                if next == TokenKind::Newline || next.is_block_boundary() {
                    break;
                }
            }
            folder.push(self.cursor.current());
            self.cursor.advance();
        }

        let children = folder.finish();
        if children.is_empty() {
            None
        } else {
            Some(Paragraph::new(children).into())
        }
    }

    /// Definition list: consecutive `: term` lines, each with its description.
    ///
    /// A description runs until the next term, a structural token or a blank line. A blank
    /// line also ends the list; the next `: term` after it starts a new one.
    pub(super) fn parse_definition_list(&mut self) -> Node {
        let mut definitions = Vec::new();

        while self.cursor.is(TokenKind::DefTerm) {
            let term = term_name(&self.cursor.current().text).to_string();
            self.cursor.advance();
            self.cursor.skip_newlines();

            let mut raw = String::new();
            while !self.cursor.is_at_end() {
                let token = self.cursor.current();
                if token.kind.is_block_boundary() {
                    break;
                }
                if token.is(TokenKind::Newline) && self.cursor.peek_kind(1) == TokenKind::Newline {
                    break;
                }
                raw.push_str(&token.text);
                self.cursor.advance();
            }

            definitions.push(Definition::new(term, parse_inline_text(raw.trim())));
        }

        log::trace!("definition list with {} definitions", definitions.len());
        DefinitionList::new(definitions).into()
    }
}

fn term_name(marker_line: &str) -> &str {
    let line = marker_line.trim();
    line.strip_prefix(':').unwrap_or(line).trim()
}
