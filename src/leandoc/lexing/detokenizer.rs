//! Detokenizer
//!
//! Converts a token stream back into source text. Tokens keep their exact text, so this is
//! plain concatenation; it exists to state (and test) that the lexer never drops or invents
//! characters.

use crate::leandoc::token::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leandoc::lexing::tokenize;

    #[test]
    fn test_detokenize_round_trips_mixed_document() {
        let source = "# Title\n\n:::: example \"E\"\n: size\n  Has {lean}`Nat`.\n::::\n";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_detokenize_keeps_crlf() {
        let source = "line one\r\nline two\r\n";
        assert_eq!(detokenize(&tokenize(source)), source);
    }
}
