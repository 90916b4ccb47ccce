use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{Level, info, warn};

use rslice::{BlockOptions, DecodeWarning, LayoutError};

/// Justify lines of text by spreading their whitespace between words.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Input files. Omit to read from stdin.
    #[arg()]
    files: Vec<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Pad or cut every line to this many characters. Omit to justify each
    /// line at its own width.
    #[arg(short, long, value_name = "COLS")]
    width: Option<usize>,

    /// Emit exactly this many rows.
    #[arg(short = 'H', long, value_name = "ROWS", requires = "width")]
    height: Option<usize>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Keep lines longer than --width instead of cutting them.
    #[arg(long, requires = "width")]
    no_truncate: bool,

    /// Character marking the end of a cut line.
    #[arg(long, value_name = "CHAR", requires = "width")]
    truncate_char: Option<char>,

    /// Accepted for compatibility; has no effect.
    #[arg(long)]
    word_wrap: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

fn log_warning(source: &str, warning: &DecodeWarning) {
    warn!(source = %source, code = ?warning.code, "{}", warning.message);
}

/// Decode raw input and justify it into rows according to the CLI options.
fn justify(data: &[u8], source: &str, cli: &Cli) -> Result<Vec<String>, LayoutError> {
    let Some(width) = cli.width else {
        let (text, warning) = rslice::decode_text(data);
        if let Some(w) = warning {
            log_warning(source, &w);
        }
        return Ok(text.lines().map(rslice::justify_line).collect());
    };

    let options = BlockOptions {
        width,
        height: cli.height,
        word_wrap: cli.word_wrap,
        truncate: !cli.no_truncate,
        truncate_char: cli.truncate_char,
    };
    let (block, warning) = rslice::render_bytes(data, &options)?;
    if let Some(w) = warning {
        log_warning(source, &w);
    }
    Ok(block.lines())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, LayoutError> {
    let Some(path) = path else {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        return Ok(data);
    };
    Ok(std::fs::read(path)?)
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), LayoutError> {
    match path {
        Some(path) => std::fs::write(path, output)?,
        None => io::stdout().write_all(output.as_bytes())?,
    }
    Ok(())
}

fn format_rows(rows: &[String], format: Format) -> Result<String, LayoutError> {
    let mut out = match format {
        Format::Text => rows.join("\n"),
        Format::Json => serde_json::to_string(rows)?,
    };
    if !out.is_empty() || matches!(format, Format::Json) {
        out.push('\n');
    }
    Ok(out)
}

fn fail(source: &str, err: &LayoutError) -> ExitCode {
    eprintln!("error: {source}: {err}");
    match err {
        LayoutError::InvalidDimensions { .. } => ExitCode::from(2),
        _ => ExitCode::from(1),
    }
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    info!(?cli, "parsed arguments");

    let mut rows = Vec::new();
    let mut had_error = false;

    if cli.files.is_empty() {
        let data = read_input(None).map_err(|e| fail("stdin", &e))?;
        rows.extend(justify(&data, "stdin", &cli).map_err(|e| fail("stdin", &e))?);
    } else {
        for path in &cli.files {
            let source = path.display().to_string();
            let data = match read_input(Some(path.as_path())) {
                Ok(d) => d,
                Err(e) => {
                    fail(&source, &e);
                    had_error = true;
                    continue;
                }
            };

            let file_rows = justify(&data, &source, &cli).map_err(|e| fail(&source, &e))?;
            info!(source = %source, rows = file_rows.len(), "justified input");
            rows.extend(file_rows);
        }
    }

    let output = format_rows(&rows, cli.format).map_err(|e| fail("output", &e))?;

    let destination = cli
        .output
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    write_output(cli.output.as_deref(), &output).map_err(|e| fail(&destination, &e))?;

    if had_error {
        Err(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
