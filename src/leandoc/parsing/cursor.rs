//! Read cursor over a token sequence

use crate::leandoc::token::{Token, TokenKind};

/// A forward-only cursor over a token sequence that always ends with an EOF token.
///
/// The EOF token is never stepped past: once the cursor reaches it, [advance](Self::advance)
/// is a no-op and [current](Self::current) keeps returning it.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::EndOfInput)) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::end_of_input(line));
        }
        Self { tokens, pos: 0 }
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token `offset` positions ahead; EOF past the end
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::EndOfInput, |t| t.kind)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len() - 1
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Advance past the current token if it has the given kind
    pub fn consume(&mut self, kind: TokenKind) -> bool {
        if self.is(kind) && !self.is_at_end() {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_newlines(&mut self) {
        while !self.is_at_end() && self.is(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Concatenate token text up to (not including) the first token of kind `stop`, or to the
    /// end of input.
    pub fn take_text_until(&mut self, stop: TokenKind) -> String {
        let mut text = String::new();
        while !self.is_at_end() && !self.is(stop) {
            text.push_str(&self.current().text);
            self.advance();
        }
        text
    }
}
