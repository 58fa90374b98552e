//! Core data types for `wordstat`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized word.
///
/// Tokens are lowercase and contain only ASCII alphanumerics or characters
/// from the configured script ranges. Equality is plain string equality.
pub type Token = String;

/// A token together with its occurrence count, as produced by top/bottom-K
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
  /// The ranked token.
  pub token: Token,
  /// How many times the token occurred in the document.
  pub count: u64,
}

impl RankedEntry {
  /// Creates a new ranked entry.
  pub fn new(token: impl Into<Token>, count: u64) -> Self {
    Self {
      token: token.into(),
      count,
    }
  }
}

impl fmt::Display for RankedEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - {}", self.token, self.count)
  }
}

/// The aggregate statistics derived from one frequency table.
///
/// A report is created once per `summarize` call from a completed table and
/// is never mutated afterwards. Fields that have no meaning for an empty
/// table are `None` rather than a sentinel value:
///
/// * `shortest_word` / `longest_word` are `None` when no token survived
///   cleaning ("no result").
/// * `average_word_length` is `None` when `total_word_count` is zero
///   ("undefined").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
  /// Sum of all occurrence counts.
  pub total_word_count: u64,
  /// Number of distinct tokens.
  pub unique_word_count: u64,
  /// First-seen token of minimal length.
  pub shortest_word: Option<Token>,
  /// First-seen token of maximal length.
  pub longest_word: Option<Token>,
  /// Sum of `length(token) * count(token)` over the table.
  pub total_letter_count: u64,
  /// `total_letter_count / total_word_count`, rounded to two decimals.
  pub average_word_length: Option<f64>,
  /// The K most frequent tokens, descending by count.
  pub top: Vec<RankedEntry>,
  /// The K least frequent tokens, ascending by count.
  pub bottom: Vec<RankedEntry>,
}

impl SummaryReport {
  /// Returns `true` when the report was derived from an empty table.
  pub fn is_empty(&self) -> bool {
    self.unique_word_count == 0
  }
}

/// The seven reduction passes the engine runs over a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatisticKind {
  /// Sum of all counts.
  TotalWordCount,
  /// Number of distinct tokens.
  UniqueWordCount,
  /// Token with the minimum length.
  ShortestWord,
  /// Token with the maximum length.
  LongestWord,
  /// The K highest-count tokens.
  TopK,
  /// The K lowest-count tokens.
  BottomK,
  /// Sum of letters over every occurrence.
  TotalLetterCount,
}

impl StatisticKind {
  /// Every kind, in report order.
  pub const ALL: [StatisticKind; 7] = [
    StatisticKind::TotalWordCount,
    StatisticKind::UniqueWordCount,
    StatisticKind::ShortestWord,
    StatisticKind::LongestWord,
    StatisticKind::TopK,
    StatisticKind::BottomK,
    StatisticKind::TotalLetterCount,
  ];
}

/// The value a single pass hands back to the join.
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutput {
  /// A summed or counted quantity. Sums are carried wide and narrowed to
  /// `u64` when the report is assembled.
  Count(u128),
  /// A selected word, or `None` for an empty table.
  Word(Option<Token>),
  /// A ranked selection of entries.
  Ranked(Vec<RankedEntry>),
}
