//! Command-line interface for leandoc
//! This binary inspects Lean documentation markup: its tokens, its document tree and a summary report.
//!
//! Usage:
//!   leandoc tokens `<path>` [--format simple|json]        - Print the token stream
//!   leandoc ast `<path>` [--format json|yaml|treeviz]     - Print the document tree
//!   leandoc report `<path>`                               - Print the inspection report
//!   leandoc inspect `<path>` [--out-dir `<dir>`]            - Write all artifacts for one file
//!   leandoc samples [--out-dir `<dir>`] [--inspect]         - Write the bundled sample documents
//!   leandoc formats                                       - List all available formats
//!
//! `--config <file>` layers a TOML file over the built-in defaults.

use clap::{Parser, Subcommand};
use leandoc::leandoc::config::{LeandocConfig, Loader};
use leandoc::leandoc::processor::{
    available_formats, process_file_with_options, read_source, write_artifacts,
    ProcessingOptions, ProcessingSpec,
};
use leandoc::leandoc::report::ReportOptions;
use leandoc::leandoc::testing::Samples;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "leandoc", version)]
#[command(about = "A tool for inspecting Lean documentation markup")]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a file
    Tokens {
        path: PathBuf,
        /// simple or json
        #[arg(long, short = 'f', default_value = "simple")]
        format: String,
    },
    /// Print the document tree of a file
    Ast {
        path: PathBuf,
        /// json, yaml or treeviz (default from configuration)
        #[arg(long, short = 'f')]
        format: Option<String>,
    },
    /// Print the inspection report of a file
    Report { path: PathBuf },
    /// Write input.md, tokens.json, ast.json and report.txt for a file
    Inspect {
        path: PathBuf,
        #[arg(long, default_value = "inspection")]
        out_dir: PathBuf,
    },
    /// Write the bundled sample documents
    Samples {
        #[arg(long, default_value = "samples")]
        out_dir: PathBuf,
        /// Also write the inspection artifacts of each sample
        #[arg(long)]
        inspect: bool,
    },
    /// List all available output formats
    Formats,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { path, format } => {
            let config = load_config(cli.config.as_deref(), None);
            handle_process_command(&path, &format!("token-{}", format), &config);
        }
        Commands::Ast { path, format } => {
            let config = load_config(cli.config.as_deref(), format.as_deref());
            handle_process_command(&path, &format!("ast-{}", config.output.format), &config);
        }
        Commands::Report { path } => {
            let config = load_config(cli.config.as_deref(), None);
            handle_process_command(&path, "report", &config);
        }
        Commands::Inspect { path, out_dir } => {
            let config = load_config(cli.config.as_deref(), None);
            handle_inspect_command(&path, &out_dir, &config);
        }
        Commands::Samples { out_dir, inspect } => {
            let config = load_config(cli.config.as_deref(), None);
            handle_samples_command(&out_dir, inspect, &config);
        }
        Commands::Formats => handle_formats_command(),
    }
}

fn exit_with(context: &str, error: impl Display) -> ! {
    eprintln!("{}: {}", context, error);
    std::process::exit(1);
}

/// Load defaults, the optional user file, then the `--format` flag of `ast`
fn load_config(path: Option<&Path>, ast_format: Option<&str>) -> LeandocConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = ast_format {
        loader = loader
            .set_override("output.format", format)
            .unwrap_or_else(|e| exit_with("Configuration error", e));
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| exit_with("Configuration error", e));
    log::debug!("configuration: {:?}", config);
    config
}

fn options(config: &LeandocConfig) -> ProcessingOptions {
    ProcessingOptions {
        pretty: config.output.pretty,
        report: ReportOptions::from(&config.report),
    }
}

/// Handle the tokens, ast and report commands
fn handle_process_command(path: &Path, format_str: &str, config: &LeandocConfig) {
    let spec = ProcessingSpec::from_string(format_str).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in available_formats() {
            eprintln!("  {}", format);
        }
        std::process::exit(1);
    });

    match process_file_with_options(path, &spec, &options(config)) {
        Ok(output) => print!("{}", output),
        Err(e) => exit_with("Error", e),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &Path, out_dir: &Path, config: &LeandocConfig) {
    let source = read_source(path).unwrap_or_else(|e| exit_with("Error", e));
    let written = write_artifacts(&source, out_dir, &options(config))
        .unwrap_or_else(|e| exit_with("Error", e));
    for path in written {
        println!("{}", path.display());
    }
}

/// Handle the samples command
fn handle_samples_command(out_dir: &Path, inspect: bool, config: &LeandocConfig) {
    fs::create_dir_all(out_dir).unwrap_or_else(|e| exit_with("Error", e));

    for (name, source) in Samples::all() {
        let path = out_dir.join(name);
        fs::write(&path, source).unwrap_or_else(|e| exit_with("Error", e));
        println!("{}", path.display());

        if inspect {
            let stem = name.trim_end_matches(".md");
            let written = write_artifacts(source, &out_dir.join(stem), &options(config))
                .unwrap_or_else(|e| exit_with("Error", e));
            for path in written {
                println!("{}", path.display());
            }
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for spec in ProcessingSpec::available_specs() {
        println!("  {:<14}{}", spec.name(), spec.description());
    }
}
