//! Single pass tokenization over the ranked rule table

use super::rules::{matched_rule, TOKEN_REGEX};
use crate::leandoc::token::{Token, TokenKind};

/// Tokenize a source string.
///
/// Total over any input: every character ends up in exactly one token, and the result always
/// ends with a zero width [TokenKind::EndOfInput] token on the last line. Holds no state
/// between calls, so nested and concurrent calls are fine.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 0;

    for caps in TOKEN_REGEX.captures_iter(source) {
        let Some((kind, m)) = matched_rule(&caps) else {
            continue;
        };
        let text = m.as_str();
        tokens.push(Token::new(kind, text, line, column));

        if kind == TokenKind::Newline {
            line += 1;
            column = 0;
        } else {
            column += text.chars().count();
        }
    }

    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens.push(Token::end_of_input(line));
    tokens
}
