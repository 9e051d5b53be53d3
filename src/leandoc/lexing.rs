//! Lexer
//!
//!     Turns a text buffer into an ordered token stream in one pass. See
//!     [rules](rules) for the ranked rule table that defines the token grammar and
//!     [base_tokenization](base_tokenization) for the scanning loop.
//!
//!     The lexer is a pure function. The parser calls it again on extracted substrings
//!     (definition descriptions), so it must stay free of shared mutable state.
//!
//! Guarantees
//!
//!     - Total: never fails; unknown input becomes one character TEXT tokens.
//!     - Lossless: [detokenize] over the output gives back the input.
//!     - Terminated: the last token is always EOF, zero width, on the final line.

pub mod base_tokenization;
pub mod detokenizer;
pub mod rules;

pub use base_tokenization::tokenize;
pub use detokenizer::detokenize;
pub use rules::{CODE_KEYWORDS, TOKEN_RULES};

pub use crate::leandoc::token::{Token, TokenKind};
