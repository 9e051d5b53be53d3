//! Ranked token rules
//!
//!     The grammar of the lexer is this table. At every scan position the rules are tried in
//!     declaration order and the first one that matches wins, even when a later rule would
//!     match more text. Reordering entries changes the language.
//!
//!     The rules are joined into one alternation and run with the regex crate's leftmost-first
//!     semantics, which is exactly "first rule in the list wins". Every rule body must use
//!     non-capturing groups only: capture group `i + 1` identifies rule `i`.
//!
//!     Line anchored rules only allow horizontal whitespace (`[^\S\n]`) so that no structural
//!     token ever swallows a line terminator; line bookkeeping depends on every `\n` being its
//!     own NEWLINE token.

use crate::leandoc::token::TokenKind;
use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};

/// Reserved words that make a whole line a code line
pub const CODE_KEYWORDS: &[&str] = &[
    "import",
    "open",
    "set_option",
    "variable",
    "example",
    "def",
    "theorem",
    "lemma",
    "namespace",
    "end",
    "section",
];

/// The ranked rule list: (kind, pattern)
pub const TOKEN_RULES: &[(TokenKind, &str)] = &[
    // Block level, line anchored. Closers come before openers of the same family.
    (TokenKind::ContainerEnd, r"^::::[^\S\n]*$"),
    (TokenKind::ContainerStart, r"^::::[^\S\n]*\w.*"),
    (TokenKind::BlockEnd, r"^:::[^\S\n]*$"),
    (TokenKind::BlockStart, r"^:::.*"),
    (TokenKind::PercentFence, r"^%%%[^\S\n]*$"),
    (TokenKind::DocDirective, r"^#doc[^\S\n]+.*"),
    (
        TokenKind::CodeKeyword,
        r"^(?:import|open|set_option|variable|example|def|theorem|lemma|namespace|end|section)\b.*",
    ),
    (TokenKind::DocCommentStart, r"^[^\S\n]*/-"),
    (TokenKind::DocCommentEnd, r"^[^\S\n]*-/"),
    (TokenKind::Header, r"^#+"),
    (TokenKind::CodeFence, r"^```.*"),
    // Definition terms, line anchored
    (TokenKind::DefTerm, r"^:[^\S\n]+\w.*"),
    // Backtick roles: {role ...}`body`
    (TokenKind::LeanRole, r#"\{lean(?:\s+type:="[^"]*")?\}`[^`]*`"#),
    (TokenKind::NameRole, r"\{name(?:\s+[^}]+)?\}`[^`]*`"),
    (TokenKind::KeywordRole, r"\{keyword(?:Of\s+\w+)?\}`[^`]*`"),
    (TokenKind::TacticRole, r"\{tactic\}`[^`]*`"),
    (TokenKind::OptionRole, r"\{option\}`[^`]*`"),
    // Bracket roles: {role ...}[body]
    (TokenKind::RefRole, r#"\{ref\s+"[^"]*"\}\[[^\]]*\]"#),
    (TokenKind::TodoRole, r"\{TODO\}\[[^\]]*\]"),
    // {tech}[body], {deftech}[body] or {deftech}_body_
    (TokenKind::TechRole, r"\{(?:def)?tech\}(?:\[[^\]]*\]|_[^_]*_)"),
    // Special braces
    (TokenKind::IncludeDirective, r"\{include\s+[^}]+\}"),
    (TokenKind::DocstringPlaceholder, r"\{docstring\s+[^}]+\}"),
    (TokenKind::Newline, r"\n"),
    // Fallback: one character at a time, so nothing is ever dropped
    (TokenKind::Text, r"."),
];

/// All rules compiled into one leftmost-first alternation
pub static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation = TOKEN_RULES
        .iter()
        .map(|(_, pattern)| format!("({})", pattern))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?m){}", alternation)).unwrap()
});

/// Find which rule produced a match
pub fn matched_rule<'h>(caps: &Captures<'h>) -> Option<(TokenKind, Match<'h>)> {
    TOKEN_RULES
        .iter()
        .enumerate()
        .find_map(|(index, (kind, _))| caps.get(index + 1).map(|m| (*kind, m)))
}
