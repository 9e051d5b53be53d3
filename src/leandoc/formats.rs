//! Output formats for parsed documents
//!
//! Each format implements [Formatter] and is looked up by name in a [FormatRegistry]:
//! - `json`: the interchange format handed to the translation step
//! - `yaml`: the same tree as YAML
//! - `treeviz`: one line per node, for reading trees in a terminal

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
