use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};
use graphedes::formalism::ErrorReporter;
use graphedes::{sketch, ConvertConfig, InputFormat, RenderConfig, SketchConfig, SketchError};
use tracing_subscriber::EnvFilter;

// =============================================================================
// Arguments
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "graphedes", about = "Draw DELPH-IN semantic graphs with Graphviz")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a semantic representation to an EDS graph in DOT format.
    Sketch(SketchArgs),
    /// Print the version.
    Version,
}

#[derive(Args, Debug)]
struct SketchArgs {
    /// Input file. Reads stdin when neither this nor -i is given.
    path: Option<PathBuf>,

    /// The input text itself.
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Output file. Writes to stdout by default.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Input format.
    #[arg(
        short = 'f',
        long = "format",
        default_value = "eds",
        value_parser = PossibleValuesParser::new(InputFormat::ALL.map(InputFormat::name))
            .try_map(|s| s.parse::<InputFormat>())
    )]
    format: InputFormat,

    /// Color nodes by role (events red, variables black, the rest blue).
    #[arg(long)]
    color: bool,

    /// Font for node and edge text.
    #[arg(long, default_value = "Courier New")]
    font: String,
}

impl SketchArgs {
    fn config(&self) -> SketchConfig {
        SketchConfig {
            convert: ConvertConfig::default(),
            render: RenderConfig {
                use_node_role_colors: self.color,
                font: Some(self.font.clone()),
            },
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Command::Sketch(args) => run_sketch(&args),
        Command::Version => {
            println!("graphedes {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_sketch(args: &SketchArgs) -> Result<()> {
    let (source_name, text) = read_input(args)?;
    tracing::debug!(source = %source_name, format = %args.format, "read input");

    let doc = match sketch(&text, args.format, &args.config()) {
        Ok(doc) => doc,
        Err(SketchError::Decode(err)) if !err.syntax_errors().is_empty() => {
            let reporter = ErrorReporter::new(source_name.as_str(), &text);
            for info in err.syntax_errors() {
                reporter.report_parse_error(info)?;
            }
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    write_output(args.output.as_deref(), &doc.to_string())
}

// =============================================================================
// I/O
// =============================================================================

/// The input text and a name for it in error reports.
fn read_input(args: &SketchArgs) -> Result<(String, String)> {
    if let Some(input) = &args.input {
        return Ok(("<input>".to_string(), input.clone()));
    }
    if let Some(path) = &args.path {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok((path.display().to_string(), text));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(("<stdin>".to_string(), text))
}

fn write_output(path: Option<&Path>, dot: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, dot)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(dot.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
