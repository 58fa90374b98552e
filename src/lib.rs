//! wordstat - word frequency statistics for plain-text documents.
//!
//! A document is tokenized into a [`FrequencyTable`](table::FrequencyTable),
//! and the [`StatisticsEngine`](engine::StatisticsEngine) derives seven
//! statistics from it in parallel: total and unique word counts, the shortest
//! and longest word, the total letter count (and from it the average word
//! length), and the K most and least common words.
//!
//! ```rust
//! use wordstat::prelude::*;
//!
//! let config = AnalyzerConfig::default().top_k(2);
//! let report = wordstat::analyze_text("The fox saw the other fox. The end.", &config).unwrap();
//!
//! assert_eq!(report.total_word_count, 8);
//! assert_eq!(report.top[0], RankedEntry::new("the", 3));
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod pass;
pub mod passes;
pub mod report;
pub mod table;
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result};

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::config::*;
  pub use crate::context::*;
  pub use crate::engine::*;
  pub use crate::error::{Error, Result};
  pub use crate::pass::*;
  pub use crate::report::*;
  pub use crate::table::*;
  pub use crate::tokenizer::Tokenizer;
  pub use crate::types::*;
}

use crate::config::AnalyzerConfig;
use crate::engine::StatisticsEngine;
use crate::table::FrequencyTable;
use crate::tokenizer::Tokenizer;
use crate::types::SummaryReport;
use std::path::Path;

/// Summarize `table` with a default engine.
pub fn summarize(table: &FrequencyTable, k: usize) -> Result<SummaryReport> {
  StatisticsEngine::new().summarize(table, k)
}

/// Tokenize `text` and summarize it using the settings in `config`.
pub fn analyze_text(text: &str, config: &AnalyzerConfig) -> Result<SummaryReport> {
  let table = Tokenizer::new(config)?.frequency_table(text);
  StatisticsEngine::builder()
    .config(config)
    .build()
    .summarize(&table, config.top_k)
}

/// Load the document at `path` and summarize it.
///
/// Ingestion errors are returned before any statistics are computed.
pub fn analyze_file(path: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<SummaryReport> {
  let text = ingest::load_document(path)?;
  analyze_text(&text, config)
}
