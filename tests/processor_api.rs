//! Tests for the processor API: processing specs, file processing and artifacts

use leandoc::leandoc::ast::Document;
use leandoc::leandoc::config::{AstFormat, Loader};
use leandoc::leandoc::parsing::parse_document;
use leandoc::leandoc::processor::{
    process_file, process_source, process_source_with_options, write_artifacts,
    ProcessingError, ProcessingOptions, ProcessingSpec,
};
use leandoc::leandoc::report::ReportOptions;
use std::fs;
use tempfile::TempDir;

const SOURCE: &str = "# Arrays\n\n::: note (x := \"1\")\nUse {name}`Array.push`.\n:::\n";

fn spec(name: &str) -> ProcessingSpec {
    ProcessingSpec::from_string(name).unwrap()
}

#[test]
fn test_invalid_specs() {
    assert_eq!(
        ProcessingSpec::from_string("ast-simple"),
        Err(ProcessingError::InvalidFormatType("simple".to_string()))
    );
    assert_eq!(
        ProcessingSpec::from_string("token-yaml"),
        Err(ProcessingError::InvalidFormatType("yaml".to_string()))
    );
    assert_eq!(
        ProcessingSpec::from_string("tree-json"),
        Err(ProcessingError::InvalidStage("tree".to_string()))
    );
    assert_eq!(
        ProcessingSpec::from_string("tokens"),
        Err(ProcessingError::InvalidFormat("tokens".to_string()))
    );
}

#[test]
fn test_process_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, SOURCE).unwrap();

    let treeviz = process_file(&path, &spec("ast-treeviz")).unwrap();
    assert!(treeviz.starts_with("├─ Header: h1 Arrays\n└─ SimpleBlock: note\n"));

    let missing = process_file(dir.path().join("missing.md"), &spec("ast-json"));
    assert!(matches!(missing, Err(ProcessingError::FileNotFound(_))));
}

#[test]
fn test_ast_json_and_yaml_read_back() {
    let expected = parse_document(SOURCE);

    let json = process_source(SOURCE, &spec("ast-json")).unwrap();
    let from_json: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, expected);

    let yaml = process_source(SOURCE, &spec("ast-yaml")).unwrap();
    let from_yaml: Document = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(from_yaml, expected);
}

#[test]
fn test_compact_output() {
    let options = ProcessingOptions {
        pretty: false,
        ..ProcessingOptions::default()
    };
    let json = process_source_with_options("# A\n", &spec("ast-json"), &options).unwrap();
    assert!(!json.contains('\n'));
    assert!(json.starts_with("[{\"type\":\"Header\""));
}

#[test]
fn test_report_respects_options() {
    let options = ProcessingOptions {
        pretty: true,
        report: ReportOptions {
            list_inline_roles: false,
            list_code_blocks: true,
        },
    };
    let report = process_source_with_options(SOURCE, &spec("report"), &options).unwrap();
    assert!(report.starts_with("=== LEAN PARSER TEST REPORT ==="));
    assert!(report.contains("- SimpleBlock: 1\n"));
    assert!(!report.contains("Inline roles detected"));
}

#[test]
fn test_write_artifacts() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("nested").join("out");

    let written = write_artifacts(SOURCE, &out_dir, &ProcessingOptions::default()).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["input.md", "tokens.json", "ast.json", "report.txt"]);

    assert_eq!(fs::read_to_string(out_dir.join("input.md")).unwrap(), SOURCE);

    let tokens: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("tokens.json")).unwrap()).unwrap();
    assert_eq!(tokens[0]["type"], "HEADER");
    assert_eq!(tokens[0]["value"], "'#'");

    let ast: Document =
        serde_json::from_str(&fs::read_to_string(out_dir.join("ast.json")).unwrap()).unwrap();
    assert_eq!(ast, parse_document(SOURCE));

    let report = fs::read_to_string(out_dir.join("report.txt")).unwrap();
    assert!(report.contains("- NAME_ROLE: '{name}`Array.push`' (line 4)\n"));
}

#[test]
fn test_config_drives_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leandoc.toml");
    fs::write(&path, "[output]\nformat = \"treeviz\"\npretty = false\n").unwrap();

    let config = Loader::new().with_file(&path).build().unwrap();
    assert_eq!(config.output.format, AstFormat::Treeviz);
    assert!(!config.output.pretty);
    assert!(config.report.list_code_blocks);

    let ast_spec = spec(&format!("ast-{}", config.output.format));
    let out = process_source("# A\n", &ast_spec).unwrap();
    assert_eq!(out, "└─ Header: h1 A\n");
}

#[test]
fn test_format_override_is_validated() {
    let result = Loader::new()
        .set_override("output.format", "xml")
        .unwrap()
        .build();
    assert!(result.is_err());
}
