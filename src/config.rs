//! Analyzer configuration.
//!
//! Every setting has a default that matches the built-in constants, so an
//! empty JSON object (`{}`) is a valid configuration file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default minimum token length, in characters.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Default number of entries in the top and bottom rankings.
pub const DEFAULT_TOP_K: usize = 5;

/// An inclusive range of Unicode scalar values that survive text cleaning in
/// addition to ASCII letters, digits, and whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
  pub start: char,
  pub end: char,
}

impl ScriptRange {
  /// Creates a new range. Use [`ScriptRange::validate`] before compiling it.
  pub const fn new(start: char, end: char) -> Self {
    Self { start, end }
  }

  /// The Cyrillic block, `U+0400..=U+04FF`.
  pub const fn cyrillic() -> Self {
    Self::new('\u{0400}', '\u{04FF}')
  }

  /// Returns `true` if `c` falls inside the range.
  pub fn contains(&self, c: char) -> bool {
    self.start <= c && c <= self.end
  }

  /// Rejects ranges whose start is past their end.
  pub fn validate(&self) -> Result<()> {
    if self.start > self.end {
      return Err(Error::InvalidConfig(format!(
        "script range U+{:04X}..U+{:04X} is reversed",
        self.start as u32, self.end as u32
      )));
    }
    Ok(())
  }
}

/// Settings for tokenization and summarizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
  /// Tokens shorter than this many characters are discarded.
  #[serde(default = "default_min_token_length")]
  pub min_token_length: usize,
  /// Extra scripts kept by the cleaning pattern.
  #[serde(default = "default_scripts")]
  pub scripts: Vec<ScriptRange>,
  /// Number of entries in the most/least common rankings.
  #[serde(default = "default_top_k")]
  pub top_k: usize,
  /// Optional upper bound for one `summarize` call, in milliseconds.
  #[serde(default)]
  pub timeout_ms: Option<u64>,
}

fn default_min_token_length() -> usize {
  DEFAULT_MIN_TOKEN_LENGTH
}

fn default_scripts() -> Vec<ScriptRange> {
  vec![ScriptRange::cyrillic()]
}

fn default_top_k() -> usize {
  DEFAULT_TOP_K
}

impl Default for AnalyzerConfig {
  fn default() -> Self {
    Self {
      min_token_length: default_min_token_length(),
      scripts: default_scripts(),
      top_k: default_top_k(),
      timeout_ms: None,
    }
  }
}

impl AnalyzerConfig {
  /// Parse a configuration from JSON text.
  pub fn from_json(json: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Load a configuration from a JSON file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json(&json)
  }

  /// Sets the minimum token length.
  pub fn min_token_length(mut self, min_token_length: usize) -> Self {
    self.min_token_length = min_token_length;
    self
  }

  /// Replaces the extra script ranges.
  pub fn scripts(mut self, scripts: Vec<ScriptRange>) -> Self {
    self.scripts = scripts;
    self
  }

  /// Sets K for the rankings.
  pub fn top_k(mut self, top_k: usize) -> Self {
    self.top_k = top_k;
    self
  }

  /// Sets the summarize timeout in milliseconds.
  pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
    self.timeout_ms = Some(timeout_ms);
    self
  }

  /// The summarize timeout, if one is configured.
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout_ms.map(Duration::from_millis)
  }

  /// Checks every script range.
  pub fn validate(&self) -> Result<()> {
    self.scripts.iter().try_for_each(ScriptRange::validate)
  }
}
