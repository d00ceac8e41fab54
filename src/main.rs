// src/main.rs

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use projsim::config::EvaluationSettings;
use projsim::simulation::evaluator::evaluate_file;
use projsim::simulation::load_launches::load_settings;
use projsim::simulation::report::write_report;

#[derive(Debug, Parser)]
#[command(name = "projsim")]
#[command(about = "Range, apex height and flight time for a batch of launches", long_about = None)]
struct CliArgs {
    /// Launch records (JSON array, or YAML for .yaml/.yml)
    #[arg(default_value = "file.json")]
    input: PathBuf,

    /// Report launches whose flight time exceeds this many seconds
    #[arg(long)]
    min_flight_time: Option<f64>,

    /// YAML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject negative velocities and angles outside [0, 90]
    #[arg(long)]
    strict: bool,

    /// Log each evaluated launch to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // 設定の読み込み (コマンドラインの値を優先)
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => EvaluationSettings::default(),
    }
    .with_overrides(args.min_flight_time, args.strict);

    // 全件の評価が成功してから出力する
    let results = evaluate_file(&args.input, &settings)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &results)?;
    handle.flush()?;

    Ok(())
}
