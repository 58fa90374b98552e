//! Additive passes: total words, unique words, and total letters.
//!
//! Sums are commutative and associative, so with the `parallel` feature the
//! entries are split into partial sums that rayon joins by addition.
//! Partial sums are `u128`, which cannot overflow for any table whose counts
//! fit in `u64`; the engine narrows the final totals.

use crate::context::SummaryContext;
use crate::pass::StatisticPass;
use crate::table::TableEntry;
use crate::types::{PassOutput, StatisticKind};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sums `f` over every entry.
fn sum_entries<F>(entries: &[TableEntry], f: F) -> u128
where
  F: Fn(&TableEntry) -> u128 + Send + Sync,
{
  #[cfg(feature = "parallel")]
  let total: u128 = entries.par_iter().map(f).sum();
  #[cfg(not(feature = "parallel"))]
  let total: u128 = entries.iter().map(f).sum();

  total
}

/// Sum of all occurrence counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TotalWordCount;

impl StatisticPass for TotalWordCount {
  fn kind(&self) -> StatisticKind {
    StatisticKind::TotalWordCount
  }

  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
    PassOutput::Count(sum_entries(context.entries(), |e| u128::from(e.count)))
  }
}

/// Number of distinct tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueWordCount;

impl StatisticPass for UniqueWordCount {
  fn kind(&self) -> StatisticKind {
    StatisticKind::UniqueWordCount
  }

  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
    // The table tracks its size.
    PassOutput::Count(context.table.len() as u128)
  }
}

/// Sum of `length(token) * count(token)`, with length in characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct TotalLetterCount;

impl StatisticPass for TotalLetterCount {
  fn kind(&self) -> StatisticKind {
    StatisticKind::TotalLetterCount
  }

  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
    PassOutput::Count(sum_entries(context.entries(), |e| e.len() as u128 * u128::from(e.count)))
  }
}
