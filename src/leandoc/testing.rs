//! Testing utilities
//!
//! Two tools for parser tests:
//!
//! 1. [Samples](samples::Samples): the curated sample documents under `docs/samples/`,
//!    embedded at build time. Prefer them over ad hoc strings when a test is about a whole
//!    document rather than one construct.
//! 2. [assert_doc]: fluent assertions over a parsed [Document](crate::leandoc::ast::Document),
//!    so that a test can check the shape of a whole subtree in one expression:
//!
//!    ```rust-example
//!    let doc = parse_document(Samples::get("semantic_structure_test.md").unwrap());
//!    assert_doc(&doc).node(2, |n| {
//!        n.assert_definition_list()
//!            .definition_count(3)
//!            .term_at(0, "size");
//!    });
//!    ```
//!
//! Failure messages name the path to the failing node (`nodes[3].children[0]`).

pub mod assertions;
pub mod samples;

pub use assertions::assert_doc;
pub use samples::Samples;
