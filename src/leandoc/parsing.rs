//! Parser
//!
//!     Builds a [Document](crate::leandoc::ast::Document) from a token stream with a hand
//!     written recursive descent parser:
//!
//!         - [cursor]: the read position over the tokens.
//!         - [parser]: the top-level driver, the block router and the shared child loop.
//!         - [blocks]: single-block parsers (headers, code, doc comments, metadata, ...).
//!         - [containers]: `::::` containers and `:::` blocks.
//!         - [inline]: paragraphs and definition lists, and the inline folding they share.
//!         - [parameters]: opening-line parsing (params, titles, directive tags).
//!
//!     The parser is total: every input produces a document, malformed input produces an
//!     approximate one. Recovery decisions are logged at `debug` level.

mod blocks;
mod containers;
pub mod cursor;
pub mod inline;
pub mod parameters;
pub mod parser;

pub use cursor::TokenCursor;
pub use inline::{fold_inlines, parse_inline_text, InlineFolder};
pub use parser::{parse_document, Parser};
