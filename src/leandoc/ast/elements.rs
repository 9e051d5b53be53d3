//! AST element definitions

pub mod blocks;
pub mod containers;
pub mod definition;
pub mod document;
pub mod inline;
pub mod node;

pub use blocks::{
    CodeBlock, CodeLine, DefinitionBlock, DocComment, DocDirective, DocstringPlaceholder, Header,
    IncludeDirective, MetadataBlock,
};
pub use containers::{ContainerBlock, SimpleBlock};
pub use definition::{Definition, DefinitionList};
pub use document::Document;
pub use inline::{Inline, InlineRole, Paragraph, Text};
pub use node::Node;

/// Parameter map of a code fence or a `:::` block
pub type Params = std::collections::BTreeMap<String, String>;

/// How [truncate] marks a cut and renders line breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LabelStyle {
    pub ellipsis: &'static str,
    pub newline: &'static str,
}

impl LabelStyle {
    /// Node labels: line breaks kept
    pub const PLAIN: LabelStyle = LabelStyle {
        ellipsis: "…",
        newline: "\n",
    };
    /// One line per node in a tree
    pub const TREE: LabelStyle = LabelStyle {
        ellipsis: "...",
        newline: "↵",
    };
}

/// Shorten a label to `max_chars` characters
pub(crate) fn truncate(s: &str, max_chars: usize, style: LabelStyle) -> String {
    let flat = s.replace('\n', style.newline);
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut truncated: String = flat.chars().take(max_chars).collect();
    truncated.push_str(style.ellipsis);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_styles() {
        assert_eq!(truncate("a\nb", 30, LabelStyle::PLAIN), "a\nb");
        assert_eq!(truncate("a\nb", 30, LabelStyle::TREE), "a↵b");
        assert_eq!(truncate("abcdef", 3, LabelStyle::PLAIN), "abc…");
        assert_eq!(truncate("abcdef", 3, LabelStyle::TREE), "abc...");
        assert_eq!(truncate("héllo", 5, LabelStyle::TREE), "héllo");
    }
}
