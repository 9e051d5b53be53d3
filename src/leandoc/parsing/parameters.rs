//! Opening-line parsing
//!
//!     The opening lines of code fences, `:::` blocks and `::::` containers carry small
//!     headers: a language or block kind, an optional `(key := value, ...)` clause, a title,
//!     directive tags. Everything here works on plain strings and never fails: malformed
//!     clauses degrade to a plain title.

use crate::leandoc::ast::Params;
use once_cell::sync::Lazy;
use regex::Regex;

/// Bare directive tags recognized on `::::` opening lines
pub const KNOWN_DIRECTIVES: &[&str] = &["keepEnv", "resetEnv", "autoImplicit", "hideProofs"];

static PARAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\w+)\s*:=\s*(?:"([^"]*)"|([^\s,)]+))"#).unwrap());

static FENCE_INFO_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*\(([^)]+)\)").unwrap());

static SHOW_ASSIGNMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bshow\s*:=").unwrap());

static QUOTED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Parse `key := value` pairs. Quoted values lose their quotes; bare values run to the next
/// whitespace, comma or closing parenthesis. Later keys overwrite earlier ones.
pub fn parse_params(clause: &str) -> Params {
    PARAM_REGEX
        .captures_iter(clause)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Split a code fence info string (the text after the backticks) into language and params
pub fn parse_fence_info(info: &str) -> (String, Params) {
    let info = info.trim();
    match FENCE_INFO_REGEX.captures(info) {
        Some(caps) => {
            let language = caps[1].to_string();
            let params = parse_params(&caps[2]);
            if params.is_empty() {
                log::debug!("code fence clause without key := value pairs: {:?}", info);
            }
            (language, params)
        }
        None => (info.to_string(), Params::new()),
    }
}

/// Header of a `:::` block: `kind (params) "title"`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockHeader {
    pub block_kind: String,
    pub title: String,
    pub params: Params,
}

/// Parse the content of a `:::` opening line (without the colons).
///
/// The first word is the block kind (`unknown` when there is none). If the remainder has a
/// parenthesized segment, it holds the params and the title comes from the text after it,
/// or else the text before it. Otherwise the whole remainder is the title.
pub fn parse_block_header(content: &str) -> BlockHeader {
    let content = content.trim();
    if content.is_empty() {
        return BlockHeader {
            block_kind: "unknown".to_string(),
            ..BlockHeader::default()
        };
    }

    let (block_kind, remainder) = match content.split_once(char::is_whitespace) {
        Some((kind, rest)) => (kind, rest.trim()),
        None => (content, ""),
    };

    let mut header = BlockHeader {
        block_kind: block_kind.to_string(),
        ..BlockHeader::default()
    };
    if remainder.is_empty() {
        return header;
    }

    if let (Some(open), Some(close)) = (remainder.find('('), remainder.rfind(')')) {
        if close > open {
            let params = parse_params(&remainder[open + 1..close]);
            if !params.is_empty() {
                let before = strip_quotes(&remainder[..open]);
                let after = strip_quotes(&remainder[close + 1..]);
                header.title = if after.is_empty() { before } else { after }.to_string();
                header.params = params;
                return header;
            }
            log::debug!("block clause without key := value pairs: {:?}", remainder);
        }
    }

    header.title = strip_quotes(remainder).to_string();
    header
}

/// Header of a `::::` container: directive tags and/or a title
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerHeader {
    pub title: String,
    pub directives: Vec<String>,
}

/// Classify the content of a `::::` opening line (without the colons).
///
/// Checked in order: a bare known directive; a line starting with `example` (any case),
/// whose rest is the title; otherwise whitespace separated words, where known directives
/// are tags and the first other word is the title.
pub fn parse_container_header(content: &str) -> ContainerHeader {
    let content = content.trim();
    let mut header = ContainerHeader::default();

    if KNOWN_DIRECTIVES.contains(&content) {
        header.directives.push(content.to_string());
        return header;
    }

    if let Some(prefix) = content.get(..7) {
        if prefix.eq_ignore_ascii_case("example") {
            header.title = strip_quotes(&content[7..]).to_string();
            return header;
        }
    }

    for part in content.split_whitespace() {
        if KNOWN_DIRECTIVES.contains(&part) {
            header.directives.push(part.to_string());
        } else if header.title.is_empty() {
            header.title = strip_quotes(part).to_string();
        }
    }
    header
}

/// Check if a `:::` opening line is a `show := ...` assignment
pub fn is_show_assignment(line: &str) -> bool {
    SHOW_ASSIGNMENT_REGEX.is_match(line)
}

/// The first double-quoted segment of a line, without its quotes
pub fn first_quoted(line: &str) -> Option<&str> {
    QUOTED_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn strip_quotes(s: &str) -> &str {
    s.trim().trim_matches('"')
}
