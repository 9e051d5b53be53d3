//! Container parsers: `::::` blocks and `:::` blocks

use super::parameters::{parse_block_header, parse_container_header};
use super::parser::Parser;
use crate::leandoc::ast::{ContainerBlock, Node, SimpleBlock};
use crate::leandoc::token::TokenKind;

impl Parser {
    /// `::::` opening line, children, `::::`
    pub(super) fn parse_container_block(&mut self) -> Node {
        let line = self.cursor.current().text.clone();
        self.cursor.advance();

        let content = line.trim_start().strip_prefix("::::").unwrap_or(&line);
        let header = parse_container_header(content);
        let children = self.parse_children(TokenKind::ContainerEnd);

        ContainerBlock::new(Some(header.title), header.directives, children).into()
    }

    /// `:::` opening line, children, `:::`
    pub(super) fn parse_simple_block(&mut self) -> Node {
        let line = self.cursor.current().text.clone();
        self.cursor.advance();

        let content = line.trim_start().strip_prefix(":::").unwrap_or(&line);
        let header = parse_block_header(content);
        let children = self.parse_children(TokenKind::BlockEnd);

        SimpleBlock::new(header.block_kind, header.title, header.params, children).into()
    }
}
