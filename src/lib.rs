//! # leandoc
//!
//! A front end for Lean documentation markup: a tokenizer and a structural parser that turn a
//! document into a tree whose prose is marked for translation and whose code, roles and
//! directives are kept verbatim.
//!
//! ## Testing
//!
//! Parser tests should use the sample documents and AST assertions of the
//! [testing module](leandoc::testing).

pub mod leandoc;
