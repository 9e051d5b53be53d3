//! Document tree
//!
//!     The parser output is a [Document]: an ordered list of [Node]s, each of which owns its
//!     children outright. There are no cross links between nodes and nothing is mutated once
//!     it has been appended to its parent.
//!
//! Translatability
//!
//!     Every node records, at construction, whether it carries natural language prose to be
//!     translated downstream (headers, doc comments, `#doc` titles, paragraph text, definition
//!     descriptions) or markup that must be left byte for byte as it is (code, roles,
//!     directives, metadata). Pairs of prose and translation are [Translation] values whose
//!     `translated` half the parser never fills in.
//!
//! Serialization
//!
//!     Nodes serialize with an internal `"type"` tag carrying the variant name
//!     (`"SimpleBlock"`, `"InlineRole"`, ...), which is the interchange format consumed by the
//!     translation step.

pub mod elements;
pub mod traits;
pub mod translation;

pub use elements::{
    CodeBlock, CodeLine, ContainerBlock, Definition, DefinitionBlock, DefinitionList,
    DocComment, DocDirective, DocstringPlaceholder, Document, Header, IncludeDirective, Inline,
    InlineRole, MetadataBlock, Node, Paragraph, Params, SimpleBlock, Text,
};
pub use traits::{AstNode, Container, Visitor};
pub use translation::Translation;
