use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use wordstat::prelude::*;

/// Word statistics for a plain-text document.
#[derive(Parser, Debug)]
#[command(name = "wordstat", version, about)]
struct Args {
  /// Path to the text file to analyze
  path: PathBuf,

  /// JSON configuration file; command-line flags override its values
  #[arg(long)]
  config: Option<PathBuf>,

  /// Discard tokens shorter than this many characters
  #[arg(long = "min-length")]
  min_length: Option<usize>,

  /// Number of most and least common words to list
  #[arg(short = 'k', long = "top")]
  top_k: Option<usize>,

  /// Give up on summarizing after this many milliseconds
  #[arg(long = "timeout-ms")]
  timeout_ms: Option<u64>,

  /// Print the report as JSON
  #[arg(long)]
  json: bool,
}

fn load_config(args: &Args) -> Result<AnalyzerConfig> {
  let mut config = match &args.config {
    Some(path) => AnalyzerConfig::from_file(path)
      .with_context(|| format!("Failed to load config from {}", path.display()))?,
    None => AnalyzerConfig::default(),
  };

  if let Some(min_length) = args.min_length {
    config = config.min_token_length(min_length);
  }
  if let Some(top_k) = args.top_k {
    config = config.top_k(top_k);
  }
  if let Some(timeout_ms) = args.timeout_ms {
    config = config.timeout_ms(timeout_ms);
  }
  Ok(config)
}

fn run(args: &Args) -> Result<()> {
  let watch = Instant::now();
  let config = load_config(args)?;

  let text = wordstat::ingest::load_document(&args.path)?;
  let table = Tokenizer::new(&config)?.frequency_table(&text);
  info!("{} distinct tokens in {}", table.len(), args.path.display());

  let engine = StatisticsEngine::builder().config(&config).build();
  let report = engine.summarize(&table, config.top_k)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  if args.json {
    JsonReporter.render(&report, config.top_k, &mut out)?;
  } else {
    TextReporter.render(&report, config.top_k, &mut out)?;
    writeln!(out, "Info extraction complete in {}ms.", watch.elapsed().as_millis())?;
  }
  Ok(())
}

/// Reports a failed run and returns the process exit code.
///
/// A missing input file is an expected outcome: the notice goes to `out` and
/// the exit code is 0. Anything else is written to `err` and exits with 1.
fn report_failure(e: &anyhow::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
  if let Some(Error::FileNotFound(path)) = e.downcast_ref::<Error>() {
    info!("{} does not exist", path.display());
    let _ = writeln!(out, "The specified file does not exist.");
    return 0;
  }

  error!("{:?}", e);
  let _ = writeln!(err, "An error occurred while processing the file:");
  let _ = writeln!(err, "{:#}", e);
  1
}

fn main() {
  env_logger::init();

  let args = Args::parse();
  if let Err(e) = run(&args) {
    let code = report_failure(&e, &mut io::stdout(), &mut io::stderr());
    if code != 0 {
      std::process::exit(code);
    }
  }
}
