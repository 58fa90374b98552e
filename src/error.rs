//! Error types shared by ingestion, table building, and the statistics engine.

use crate::types::StatisticKind;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Errors produced by `wordstat`.
///
/// Ingestion failures (`FileNotFound`, `Io`) are raised before the engine is
/// ever invoked. Once a table has been built, `summarize` only fails when the
/// whole fan-out cannot be joined, so a report is never partially filled.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("The specified file does not exist: {}", .0.display())]
  FileNotFound(PathBuf),

  #[error("Failed to read '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Token '{0}' has a count of zero; frequency counts must be positive")]
  InvalidCount(String),

  #[error("Count for token '{0}' exceeds the 64-bit range")]
  CountOverflow(String),

  #[error("Total for '{0:?}' exceeds the 64-bit range")]
  TotalOverflow(StatisticKind),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("Invalid cleaning pattern: {0}")]
  Pattern(#[from] regex::Error),

  #[error("Config JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Statistics pass '{0:?}' did not produce a usable result")]
  IncompletePass(StatisticKind),

  #[error("Summarize did not finish within {0:?}")]
  Timeout(Duration),

  #[error("Failed to start summarize worker: {0}")]
  Worker(#[source] io::Error),

  #[error("Summarize worker stopped before reporting")]
  WorkerLost,
}

pub type Result<T> = std::result::Result<T, Error>;
