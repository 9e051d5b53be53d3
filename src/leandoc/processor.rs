//! File processing API
//!
//! Runs a source through the lexer and parser and renders one stage of the result:
//! tokens (`token-simple`, `token-json`), the document tree (`ast-json`, `ast-yaml`,
//! `ast-treeviz`) or the inspection report (`report`).
//!
//! [write_artifacts] writes every stage at once into a directory, the way a document is
//! inspected during development:
//!
//!     input.md      the source, unchanged
//!     tokens.json   tokens, with values quoted as in the report
//!     ast.json      the document tree
//!     report.txt    the inspection report

use crate::leandoc::ast::Document;
use crate::leandoc::formats::FormatRegistry;
use crate::leandoc::lexing::tokenize;
use crate::leandoc::parsing::Parser;
use crate::leandoc::report::{self, ReportOptions};
use crate::leandoc::token::Token;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// How tokens are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Simple,
    Json,
}

impl TokenFormat {
    fn name(self) -> &'static str {
        match self {
            TokenFormat::Simple => "simple",
            TokenFormat::Json => "json",
        }
    }
}

/// What to extract from a source and how to render it. AST formats are the names
/// registered in [FormatRegistry].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingSpec {
    Tokens(TokenFormat),
    Ast(String),
    Report,
}

impl ProcessingSpec {
    /// Parse a format string like "token-json", "ast-treeviz" or "report"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        if format_str == "report" {
            return Ok(ProcessingSpec::Report);
        }

        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        match stage {
            "token" => match format {
                "simple" => Ok(ProcessingSpec::Tokens(TokenFormat::Simple)),
                "json" => Ok(ProcessingSpec::Tokens(TokenFormat::Json)),
                _ => Err(ProcessingError::InvalidFormatType(format.to_string())),
            },
            "ast" if FormatRegistry::default().has(format) => {
                Ok(ProcessingSpec::Ast(format.to_string()))
            }
            "ast" => Err(ProcessingError::InvalidFormatType(format.to_string())),
            _ => Err(ProcessingError::InvalidStage(stage.to_string())),
        }
    }

    /// Every accepted specification: token renderings, then one per registered AST
    /// format, then the report
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let mut specs = vec![
            ProcessingSpec::Tokens(TokenFormat::Simple),
            ProcessingSpec::Tokens(TokenFormat::Json),
        ];
        specs.extend(
            FormatRegistry::default()
                .list_formats()
                .into_iter()
                .map(ProcessingSpec::Ast),
        );
        specs.push(ProcessingSpec::Report);
        specs
    }

    /// The string form accepted by [from_string](Self::from_string)
    pub fn name(&self) -> String {
        match self {
            ProcessingSpec::Tokens(format) => format!("token-{}", format.name()),
            ProcessingSpec::Ast(format) => format!("ast-{}", format),
            ProcessingSpec::Report => "report".to_string(),
        }
    }

    /// One line on what this output holds
    pub fn description(&self) -> String {
        match self {
            ProcessingSpec::Tokens(TokenFormat::Simple) => {
                "One token per line with its position".to_string()
            }
            ProcessingSpec::Tokens(TokenFormat::Json) => "Token array as JSON".to_string(),
            ProcessingSpec::Ast(format) => FormatRegistry::default()
                .get(format)
                .map(|f| f.description().to_string())
                .unwrap_or_default(),
            ProcessingSpec::Report => "Inspection report".to_string(),
        }
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    SerializationError(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Knobs that shape the rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub pretty: bool,
    pub report: ReportOptions,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            report: ReportOptions::default(),
        }
    }
}

/// Everything one run over a source produces
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub document: Document,
}

impl Analysis {
    pub fn of(source: &str) -> Self {
        let tokens = tokenize(source);
        let document = Parser::new(tokens.clone()).parse();
        Analysis { tokens, document }
    }
}

/// Process a source string according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_source_with_options(source, spec, &ProcessingOptions::default())
}

/// Process a source string according to the given specification and options
pub fn process_source_with_options(
    source: &str,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let analysis = Analysis::of(source);
    log::debug!(
        "{}: {} tokens, {} top-level nodes",
        spec,
        analysis.tokens.len(),
        analysis.document.len()
    );

    match spec {
        ProcessingSpec::Tokens(format) => format_tokens(&analysis.tokens, *format, options.pretty),
        ProcessingSpec::Ast(format) => FormatRegistry::with_defaults(options.pretty)
            .serialize(&analysis.document, format)
            .map_err(|e| ProcessingError::SerializationError(e.to_string())),
        ProcessingSpec::Report => Ok(report::generate(
            source,
            &analysis.tokens,
            &analysis.document,
            &options.report,
        )),
    }
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    process_file_with_options(file_path, spec, &ProcessingOptions::default())
}

/// Process a file according to the given specification and options
pub fn process_file_with_options<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let content = read_source(file_path.as_ref())?;
    process_source_with_options(&content, spec, options)
}

/// Read a source file
pub fn read_source(path: &Path) -> Result<String, ProcessingError> {
    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| ProcessingError::IoError(e.to_string()))
}

/// Format tokens as one line per token (`simple`) or as a JSON array (`json`)
pub fn format_tokens(
    tokens: &[Token],
    format: TokenFormat,
    pretty: bool,
) -> Result<String, ProcessingError> {
    match format {
        TokenFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        TokenFormat::Json => to_json(tokens, pretty),
    }
}

/// A token as written to `tokens.json`: the value quoted as in the report
#[derive(Debug, Serialize)]
struct QuotedToken {
    #[serde(rename = "type")]
    kind: &'static str,
    value: String,
    line: usize,
    column: usize,
}

impl From<&Token> for QuotedToken {
    fn from(token: &Token) -> Self {
        QuotedToken {
            kind: token.kind.name(),
            value: report::quoted(&token.text),
            line: token.line,
            column: token.column,
        }
    }
}

/// Write the inspection artifacts for one source into `out_dir` (created if missing).
/// Returns the paths written, in order.
pub fn write_artifacts(
    source: &str,
    out_dir: &Path,
    options: &ProcessingOptions,
) -> Result<Vec<PathBuf>, ProcessingError> {
    let analysis = Analysis::of(source);
    fs::create_dir_all(out_dir).map_err(|e| ProcessingError::IoError(e.to_string()))?;

    let quoted: Vec<QuotedToken> = analysis.tokens.iter().map(QuotedToken::from).collect();
    let artifacts = [
        ("input.md", source.to_string()),
        ("tokens.json", to_json(&quoted, true)?),
        ("ast.json", to_json(&analysis.document, true)?),
        (
            "report.txt",
            report::generate(source, &analysis.tokens, &analysis.document, &options.report),
        ),
    ];

    let mut written = Vec::with_capacity(artifacts.len());
    for (name, content) in artifacts {
        let path = out_dir.join(name);
        fs::write(&path, content).map_err(|e| ProcessingError::IoError(e.to_string()))?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ProcessingError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| ProcessingError::SerializationError(e.to_string()))
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_spec_parsing() {
        assert_eq!(
            ProcessingSpec::from_string("token-simple"),
            Ok(ProcessingSpec::Tokens(TokenFormat::Simple))
        );
        assert_eq!(
            ProcessingSpec::from_string("ast-treeviz"),
            Ok(ProcessingSpec::Ast("treeviz".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("report"),
            Ok(ProcessingSpec::Report)
        );

        assert_eq!(
            ProcessingSpec::from_string("invalid"),
            Err(ProcessingError::InvalidFormat("invalid".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("token-yaml"),
            Err(ProcessingError::InvalidFormatType("yaml".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("ast-simple"),
            Err(ProcessingError::InvalidFormatType("simple".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("tree-json"),
            Err(ProcessingError::InvalidStage("tree".to_string()))
        );
    }

    #[test]
    fn test_available_formats_follow_the_registry() {
        let formats = available_formats();
        assert_eq!(
            formats,
            vec![
                "token-simple",
                "token-json",
                "ast-json",
                "ast-treeviz",
                "ast-yaml",
                "report"
            ]
        );
        for format in formats {
            let spec = ProcessingSpec::from_string(&format).unwrap();
            assert_eq!(spec.name(), format);
        }
    }

    #[test]
    fn test_ast_descriptions_come_from_formatters() {
        let spec = ProcessingSpec::from_string("ast-yaml").unwrap();
        assert_eq!(spec.description(), "Document tree as YAML");
        assert_eq!(ProcessingSpec::Report.description(), "Inspection report");
    }

    #[test]
    fn test_token_simple_output() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process_source("# A\n", &spec).unwrap();
        assert_eq!(
            output,
            "1:0 HEADER \"#\"\n1:1 TEXT \" \"\n1:2 TEXT \"A\"\n1:3 NEWLINE \"\\n\"\n2:0 EOF \"\"\n"
        );
    }

    #[test]
    fn test_token_json_output() {
        let spec = ProcessingSpec::from_string("token-json").unwrap();
        let options = ProcessingOptions {
            pretty: false,
            ..ProcessingOptions::default()
        };
        let output = process_source_with_options("::::", &spec, &options).unwrap();
        assert_eq!(
            output,
            r#"[{"type":"CONTAINER_END","value":"::::","line":1,"column":0},{"type":"EOF","value":"","line":1,"column":0}]"#
        );
    }

    #[test]
    fn test_quoted_token_values() {
        let token = Token::new(crate::leandoc::token::TokenKind::Newline, "\n", 1, 3);
        let quoted = QuotedToken::from(&token);
        assert_eq!(quoted.value, "'\\n'");
        assert_eq!(quoted.kind, "NEWLINE");
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("ast-json").unwrap();
        let result = process_file("/nonexistent/input.md", &spec);
        assert!(matches!(result, Err(ProcessingError::FileNotFound(_))));
    }
}
