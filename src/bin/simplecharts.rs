use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use simplecharts::{ChartData, ChartError, ChartKind, ChartRenderer, ChartRendererConfig};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum KindArg {
    #[default]
    Column,
    StackedColumn,
    Line,
    StackedArea,
}

impl From<KindArg> for ChartKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Column => Self::Column,
            KindArg::StackedColumn => Self::StackedColumn,
            KindArg::Line => Self::Line,
            KindArg::StackedArea => Self::StackedArea,
        }
    }
}

/// Render delimited tabular data as an SVG chart on stdout.
#[derive(Debug, Parser)]
#[command(name = "simplecharts", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Chart type to draw.
    #[arg(short, long, value_enum, default_value_t = KindArg::Column)]
    kind: KindArg,

    /// Cell delimiter.
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Treat the first line as data instead of a legend header.
    #[arg(long)]
    no_header: bool,

    /// JSON renderer config; missing fields take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width, overriding the config.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height, overriding the config.
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> ExitCode {
    let _ = simplecharts::telemetry::init_default_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(svg) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(svg.as_bytes()) {
                eprintln!("Error: failed to write output: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, ChartError> {
    let mut config = match &cli.config {
        Some(path) => ChartRendererConfig::from_json_str(&read_to_string(path)?)?,
        None => ChartRendererConfig::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }

    let input = match &cli.input {
        Some(path) => read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ChartError::InvalidData(format!("failed to read stdin: {e}")))?;
            buffer
        }
    };

    let data = ChartData::from_delimited_str(&input, cli.delimiter, !cli.no_header)?;
    ChartRenderer::new(cli.kind.into(), config)?.render(&data)
}

fn read_to_string(path: &Path) -> Result<String, ChartError> {
    fs::read_to_string(path)
        .map_err(|e| ChartError::InvalidData(format!("failed to read {}: {e}", path.display())))
}
