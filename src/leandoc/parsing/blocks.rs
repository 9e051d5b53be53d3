//! Leaf block parsers

use super::parameters::{first_quoted, parse_fence_info};
use super::parser::Parser;
use crate::leandoc::ast::{
    CodeBlock, CodeLine, DocComment, DocDirective, DocstringPlaceholder, Header,
    IncludeDirective, InlineRole, MetadataBlock, Node,
};
use crate::leandoc::token::{RoleKind, TokenKind};

impl Parser {
    /// `#` markers, then the rest of the line
    pub(super) fn parse_header(&mut self) -> Node {
        let level = self.cursor.current().text.chars().count();
        self.cursor.advance();
        let content = self.cursor.take_text_until(TokenKind::Newline);
        Header::new(level, content.trim()).into()
    }

    /// A fenced code block. The body is every token up to the closing fence, trimmed at
    /// both ends.
    pub(super) fn parse_code_block(&mut self) -> Node {
        let fence = self.cursor.current().text.clone();
        let info = fence.strip_prefix("```").unwrap_or(&fence);
        let (language, params) = parse_fence_info(info);
        self.cursor.advance();

        let body = self.cursor.take_text_until(TokenKind::CodeFence);
        if !self.cursor.consume(TokenKind::CodeFence) {
            log::debug!("unterminated code fence closed at end of input");
        }
        CodeBlock::new(language, params, body.trim()).into()
    }

    pub(super) fn parse_doc_comment(&mut self) -> Node {
        self.cursor.advance();
        let content = self.cursor.take_text_until(TokenKind::DocCommentEnd);
        if !self.cursor.consume(TokenKind::DocCommentEnd) {
            log::debug!("unterminated doc comment closed at end of input");
        }
        DocComment::new(content.trim()).into()
    }

    /// `#doc` line. Only its first quoted segment is prose.
    pub(super) fn parse_doc_directive(&mut self) -> Node {
        let raw_line = self.cursor.current().text.clone();
        self.cursor.advance();
        let original = first_quoted(&raw_line).unwrap_or_default().to_string();
        DocDirective::new(original, raw_line).into()
    }

    /// `%%%` front matter. Opaque.
    pub(super) fn parse_metadata_block(&mut self) -> Node {
        self.cursor.advance();
        let body = self.cursor.take_text_until(TokenKind::PercentFence);
        if !self.cursor.consume(TokenKind::PercentFence) {
            log::debug!("unterminated metadata block closed at end of input");
        }
        MetadataBlock::new(body.trim()).into()
    }

    pub(super) fn parse_code_line(&mut self) -> Node {
        let raw = self.cursor.current().text.clone();
        self.cursor.advance();
        CodeLine::new(raw).into()
    }

    /// A role token found at block position
    pub(super) fn parse_inline_role(&mut self, role: RoleKind) -> Node {
        let node = InlineRole::new(role, self.cursor.current().text.as_str()).into();
        self.cursor.advance();
        node
    }

    pub(super) fn parse_include_directive(&mut self) -> Node {
        let raw = self.cursor.current().text.clone();
        self.cursor.advance();
        IncludeDirective::new(raw).into()
    }

    pub(super) fn parse_docstring_placeholder(&mut self) -> Node {
        let raw = self.cursor.current().text.clone();
        self.cursor.advance();
        DocstringPlaceholder::new(raw).into()
    }
}

#[cfg(test)]
mod tests {
    use crate::leandoc::ast::*;
    use crate::leandoc::parsing::parse_document;
    use crate::leandoc::token::RoleKind;

    fn single(source: &str) -> Node {
        let doc = parse_document(source);
        assert_eq!(doc.len(), 1, "expected one node, got {:?}", doc.children);
        doc.children.into_iter().next().unwrap()
    }

    #[test]
    fn test_header() {
        assert_eq!(single("## Getting  Started \n"), Header::new(2, "Getting  Started").into());
    }

    #[test]
    fn test_code_block_with_params() {
        let node = single("```lean (name := \"ex1\", keep := true)\nbody\n```");
        let code = node.as_code_block().unwrap();
        assert_eq!(code.language, "lean");
        assert_eq!(code.param("name"), Some("ex1"));
        assert_eq!(code.param("keep"), Some("true"));
        assert_eq!(code.body, "body");
    }

    #[test]
    fn test_code_block_body_is_verbatim() {
        let source = "```\n  ::: note\n# not a header\n{lean}`x`\n```\n";
        let node = single(source);
        let code = node.as_code_block().unwrap();
        assert_eq!(code.language, "");
        assert_eq!(code.body, "::: note\n# not a header\n{lean}`x`");
    }

    #[test]
    fn test_unterminated_code_fence_runs_to_end() {
        let node = single("```lean\ndef x := 1\n\nmore");
        assert_eq!(node.as_code_block().unwrap().body, "def x := 1\n\nmore");
    }

    #[test]
    fn test_doc_comment() {
        let node = single("/-\nSome prose.\n-/\n");
        assert_eq!(node, DocComment::new("Some prose.").into());
        assert!(node.is_translatable());
    }

    #[test]
    fn test_doc_directive() {
        let node = single("#doc (Manual) \"The Lean Language\" =>\n");
        assert_eq!(
            node,
            DocDirective::new("The Lean Language", "#doc (Manual) \"The Lean Language\" =>").into()
        );

        let node = single("#doc (Manual) Untitled =>");
        assert_eq!(
            node,
            DocDirective::new("", "#doc (Manual) Untitled =>").into()
        );
    }

    #[test]
    fn test_metadata_block() {
        let node = single("%%%\ntag := \"intro\"\nnumber := false\n%%%\n");
        assert_eq!(
            node,
            MetadataBlock::new("tag := \"intro\"\nnumber := false").into()
        );
    }

    #[test]
    fn test_code_line() {
        let doc = parse_document("import Manual\nopen Verso.Genre\n");
        assert_eq!(
            doc.children,
            vec![
                CodeLine::new("import Manual").into(),
                CodeLine::new("open Verso.Genre").into(),
            ]
        );
    }

    #[test]
    fn test_leaves_at_block_position() {
        let doc = parse_document("{include 1 Manual.Intro}\n\n{docstring Nat.add}\n\n{TODO}[write this]\n");
        assert_eq!(
            doc.children,
            vec![
                IncludeDirective::new("{include 1 Manual.Intro}").into(),
                DocstringPlaceholder::new("{docstring Nat.add}").into(),
                InlineRole::new(RoleKind::Todo, "{TODO}[write this]").into(),
            ]
        );
    }
}
