//! dfn - fracture network trace extraction
//!
//! Reads DFN fracture files, intersects every pair of fractures and writes
//! the trace list and per-fracture report next to each input.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dfn_kernel::{sort_traces, IntersectionConfig, IntersectionEngine, RunState};

#[derive(Parser, Debug)]
#[command(name = "dfn")]
#[command(about = "Compute intersection traces of a discrete fracture network", long_about = None)]
struct Cli {
    /// Fracture files to process
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for the reports (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Geometric tolerance used by every comparison
    #[arg(long, value_parser = parse_tolerance)]
    tolerance: Option<f64>,

    /// Also write a JSON summary
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> IntersectionConfig {
        match self.tolerance {
            Some(eps) => IntersectionConfig::with_tolerance(eps),
            None => IntersectionConfig::default(),
        }
    }
}

/// Tolerances must be finite and strictly positive.
fn parse_tolerance(value: &str) -> Result<f64, String> {
    let eps: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if eps.is_finite() && eps > 0.0 {
        Ok(eps)
    } else {
        Err(format!("tolerance must be a positive finite number, got {value}"))
    }
}

/// Paths written for one input file.
#[derive(Debug)]
struct Outputs {
    traces: PathBuf,
    fractures: PathBuf,
    json: Option<PathBuf>,
}

fn output_paths(input: &Path, output_dir: Option<&Path>, json: bool) -> Outputs {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "network".to_string());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    Outputs {
        traces: dir.join(format!("{stem}_traces.txt")),
        fractures: dir.join(format!("{stem}_fractures.txt")),
        json: json.then(|| dir.join(format!("{stem}_report.json"))),
    }
}

fn process_file(input: &Path, cli: &Cli) -> Result<Outputs> {
    let mut set = dfn_format::load_fractures(input)
        .with_context(|| format!("Failed to import fractures from {}", input.display()))?;

    let engine = IntersectionEngine::new(cli.config());
    let intersections = engine.compute(&mut set, &mut RunState::new());
    sort_traces(set.traces_mut());

    let outputs = output_paths(input, cli.output_dir.as_deref(), cli.json);
    dfn_format::write_trace_list(&outputs.traces, set.traces())
        .with_context(|| format!("Failed to write {}", outputs.traces.display()))?;
    dfn_format::write_fracture_report(&outputs.fractures, set.traces())
        .with_context(|| format!("Failed to write {}", outputs.fractures.display()))?;
    if let Some(path) = &outputs.json {
        let json = dfn_format::report_to_json(&set, &intersections)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!(
        input = %input.display(),
        fractures = set.len(),
        traces = set.traces().len(),
        degenerate = intersections.degenerate.len(),
        "processed"
    );
    Ok(outputs)
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    for input in &cli.inputs {
        let outputs = process_file(input, &cli)?;
        println!("{} -> {}", input.display(), outputs.traces.display());
    }
    Ok(())
}
