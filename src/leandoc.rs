//! Main module for leandoc library functionality
//!
//!     The pipeline is source text -> [lexing] -> tokens -> [parsing] -> [ast::Document].
//!     Everything past the document ([formats], [report], [processor]) only reads it.

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod report;
pub mod testing;
pub mod token;
