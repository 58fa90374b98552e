//! Text cleaning and tokenization.
//!
//! Cleaning replaces every character that is not an ASCII letter, an ASCII
//! digit, whitespace, or inside one of the configured script ranges with a
//! space. The cleaned text is lowercased, split on whitespace, and tokens
//! shorter than the minimum length are dropped.

use crate::config::{AnalyzerConfig, ScriptRange, DEFAULT_MIN_TOKEN_LENGTH};
use crate::error::Result;
use crate::table::{FrequencyTable, FrequencyTableBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Default cleaning pattern: ASCII alphanumerics, whitespace, and Cyrillic.
static DEFAULT_PATTERN: Lazy<Regex> =
  Lazy::new(|| Regex::new(&cleaning_pattern(&[ScriptRange::cyrillic()])).unwrap());

/// Build the negated character class matching everything cleaning removes.
fn cleaning_pattern(scripts: &[ScriptRange]) -> String {
  let mut pattern = String::from(r"[^a-zA-Z0-9\s");
  for range in scripts {
    pattern.push_str(&format!(
      r"\x{{{:04X}}}-\x{{{:04X}}}",
      range.start as u32, range.end as u32
    ));
  }
  pattern.push(']');
  pattern
}

/// Splits documents into normalized tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
  min_length: usize,
  pattern: Regex,
}

impl Default for Tokenizer {
  fn default() -> Self {
    Self {
      min_length: DEFAULT_MIN_TOKEN_LENGTH,
      pattern: DEFAULT_PATTERN.clone(),
    }
  }
}

impl Tokenizer {
  /// Create a tokenizer from the tokenization settings of `config`.
  pub fn new(config: &AnalyzerConfig) -> Result<Self> {
    config.validate()?;
    let pattern = if config.scripts == [ScriptRange::cyrillic()] {
      DEFAULT_PATTERN.clone()
    } else {
      Regex::new(&cleaning_pattern(&config.scripts))?
    };

    Ok(Self {
      min_length: config.min_token_length,
      pattern,
    })
  }

  /// A default tokenizer with a different minimum length.
  pub fn with_min_length(min_length: usize) -> Self {
    Self {
      min_length,
      ..Self::default()
    }
  }

  /// Minimum token length, in characters.
  pub fn min_length(&self) -> usize {
    self.min_length
  }

  /// Replace every disallowed character with a space.
  pub fn clean<'t>(&self, text: &'t str) -> Cow<'t, str> {
    self.pattern.replace_all(text, " ")
  }

  /// Cleaned and lowercased text, ready to be split into tokens.
  fn normalize(&self, text: &str) -> String {
    self.clean(text).to_lowercase()
  }

  /// Whitespace-separated words of `normalized` that meet the minimum length.
  fn words<'t>(&self, normalized: &'t str) -> impl Iterator<Item = &'t str> + 't {
    let min_length = self.min_length;
    normalized
      .split_whitespace()
      .filter(move |word| word.chars().count() >= min_length)
  }

  /// Tokenize text into normalized words, in document order.
  pub fn tokenize(&self, text: &str) -> Vec<String> {
    self.words(&self.normalize(text)).map(str::to_string).collect()
  }

  /// Count token frequencies for a document.
  ///
  /// Runs on the calling thread; the returned table is frozen and ready to be
  /// shared with the statistics engine.
  pub fn frequency_table(&self, text: &str) -> FrequencyTable {
    let normalized = self.normalize(text);
    let mut builder = FrequencyTableBuilder::new();
    for word in self.words(&normalized) {
      builder.add(word);
    }

    let table = builder.freeze();
    log::debug!(
      "built frequency table with {} distinct tokens (min length {})",
      table.len(),
      self.min_length
    );
    table
  }
}

/// Build a frequency table using the default script ranges.
pub fn build(text: &str, min_length: usize) -> FrequencyTable {
  Tokenizer::with_min_length(min_length).frequency_table(text)
}
