//! Shortest and longest word passes.

use crate::context::SummaryContext;
use crate::pass::StatisticPass;
use crate::table::TableEntry;
use crate::types::{PassOutput, StatisticKind};

/// Scans entries in iteration order, replacing the pick only when `better`
/// holds for the new length against the current one.
///
/// Ties never replace the current pick, so the earliest token wins.
fn first_by<F>(entries: &[TableEntry], better: F) -> Option<String>
where
  F: Fn(usize, usize) -> bool,
{
  let mut iter = entries.iter();
  let mut pick = iter.next()?;
  let mut pick_len = pick.len();

  for entry in iter {
    let len = entry.len();
    if better(len, pick_len) {
      pick = entry;
      pick_len = len;
    }
  }

  Some(pick.token.clone())
}

/// The first-seen token of minimal length.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestWord;

impl StatisticPass for ShortestWord {
  fn kind(&self) -> StatisticKind {
    StatisticKind::ShortestWord
  }

  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
    PassOutput::Word(first_by(context.entries(), |len, best| len < best))
  }
}

/// The first-seen token of maximal length.
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestWord;

impl StatisticPass for LongestWord {
  fn kind(&self) -> StatisticKind {
    StatisticKind::LongestWord
  }

  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
    PassOutput::Word(first_by(context.entries(), |len, best| len > best))
  }
}
