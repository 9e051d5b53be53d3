//! Token types shared by the lexer and the parser
//!
//!     A token is the smallest classified unit of a document: its kind, the exact text it
//!     matched, and where it starts. Tokens never rewrite their text, so concatenating the
//!     text of every token in order gives back the source (see
//!     [detokenize](crate::leandoc::lexing::detokenize)).
//!
//! Token Families
//!
//!     - Structural, line anchored: container (`::::`) and block (`:::`) start/end markers,
//!       the `%%%` metadata fence, `#doc` directives, reserved keyword lines, doc comment
//!       open/close, headers, code fences and definition terms.
//!     - Inline roles: `{lean}`...``, `{ref "x"}[...]`, `{deftech}_..._` and friends. Each
//!       kind maps to a [RoleKind].
//!     - Special braces: `{include ...}` and `{docstring ...}`.
//!     - Newline and the one character text fallback.
//!     - The zero width end marker, always last.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All token kinds the lexer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    #[serde(rename = "EOF")]
    EndOfInput,
    Text,
    Newline,
    DocCommentStart,
    DocCommentEnd,
    Header,
    CodeFence,
    PercentFence,
    DocDirective,
    CodeKeyword,
    ContainerStart,
    ContainerEnd,
    #[serde(rename = "BLOCK_START_THREE_COLON")]
    BlockStart,
    #[serde(rename = "BLOCK_END_THREE_COLON")]
    BlockEnd,
    IncludeDirective,
    DocstringPlaceholder,
    LeanRole,
    NameRole,
    KeywordRole,
    TacticRole,
    OptionRole,
    RefRole,
    TodoRole,
    TechRole,
    DefTerm,
}

impl TokenKind {
    /// The serialized name of this kind, as it appears in token dumps
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Text => "TEXT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::DocCommentStart => "DOC_COMMENT_START",
            TokenKind::DocCommentEnd => "DOC_COMMENT_END",
            TokenKind::Header => "HEADER",
            TokenKind::CodeFence => "CODE_FENCE",
            TokenKind::PercentFence => "PERCENT_FENCE",
            TokenKind::DocDirective => "DOC_DIRECTIVE",
            TokenKind::CodeKeyword => "CODE_KEYWORD",
            TokenKind::ContainerStart => "CONTAINER_START",
            TokenKind::ContainerEnd => "CONTAINER_END",
            TokenKind::BlockStart => "BLOCK_START_THREE_COLON",
            TokenKind::BlockEnd => "BLOCK_END_THREE_COLON",
            TokenKind::IncludeDirective => "INCLUDE_DIRECTIVE",
            TokenKind::DocstringPlaceholder => "DOCSTRING_PLACEHOLDER",
            TokenKind::LeanRole => "LEAN_ROLE",
            TokenKind::NameRole => "NAME_ROLE",
            TokenKind::KeywordRole => "KEYWORD_ROLE",
            TokenKind::TacticRole => "TACTIC_ROLE",
            TokenKind::OptionRole => "OPTION_ROLE",
            TokenKind::RefRole => "REF_ROLE",
            TokenKind::TodoRole => "TODO_ROLE",
            TokenKind::TechRole => "TECH_ROLE",
            TokenKind::DefTerm => "DEF_TERM",
        }
    }

    /// The inline role carried by this kind, if any.
    ///
    /// `{include ...}` and `{docstring ...}` count as roles here: inside running prose they
    /// are folded the same way as the eight proper roles.
    pub fn role(&self) -> Option<RoleKind> {
        match self {
            TokenKind::LeanRole => Some(RoleKind::Lean),
            TokenKind::NameRole => Some(RoleKind::Name),
            TokenKind::KeywordRole => Some(RoleKind::Keyword),
            TokenKind::TacticRole => Some(RoleKind::Tactic),
            TokenKind::OptionRole => Some(RoleKind::Option),
            TokenKind::RefRole => Some(RoleKind::Ref),
            TokenKind::TodoRole => Some(RoleKind::Todo),
            TokenKind::TechRole => Some(RoleKind::Tech),
            TokenKind::IncludeDirective => Some(RoleKind::Include),
            TokenKind::DocstringPlaceholder => Some(RoleKind::Docstring),
            _ => None,
        }
    }

    /// Check if a token of this kind ends running prose (paragraphs and definition
    /// descriptions) because a new structural block starts, or an enclosing one closes.
    pub fn is_block_boundary(&self) -> bool {
        matches!(
            self,
            TokenKind::Header
                | TokenKind::CodeFence
                | TokenKind::ContainerStart
                | TokenKind::ContainerEnd
                | TokenKind::DocCommentStart
                | TokenKind::DocDirective
                | TokenKind::CodeKeyword
                | TokenKind::BlockStart
                | TokenKind::BlockEnd
                | TokenKind::PercentFence
                | TokenKind::DefTerm
                | TokenKind::EndOfInput
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name of an inline role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Lean,
    Name,
    Keyword,
    Tactic,
    Option,
    Ref,
    Todo,
    Tech,
    Include,
    Docstring,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Lean => "lean",
            RoleKind::Name => "name",
            RoleKind::Keyword => "keyword",
            RoleKind::Tactic => "tactic",
            RoleKind::Option => "option",
            RoleKind::Ref => "ref",
            RoleKind::Todo => "todo",
            RoleKind::Tech => "tech",
            RoleKind::Include => "include",
            RoleKind::Docstring => "docstring",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified piece of source text.
///
/// `line` is 1-based; `column` is the 0-based character offset from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(rename = "value")]
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// The zero width end marker
    pub fn end_of_input(line: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", line, 0)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.line, self.column, self.kind, self.text
        )
    }
}
