//! Bounded top-K and bottom-K selection.
//!
//! Both passes keep a sorted buffer of at most K entries. A candidate is
//! inserted in front of the first buffered entry it strictly beats; the last
//! entry falls off when the buffer is full. Because the comparison is strict,
//! a candidate never displaces an entry with an equal count that was seen
//! earlier, which keeps ties in first-seen order.

use crate::context::SummaryContext;
use crate::pass::StatisticPass;
use crate::table::TableEntry;
use crate::types::{PassOutput, RankedEntry, StatisticKind};

/// Direction of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
  /// Highest counts first.
  Descending,
  /// Lowest counts first.
  Ascending,
}

impl RankOrder {
  /// Returns `true` if `candidate` strictly outranks `held`.
  fn beats(self, candidate: u64, held: u64) -> bool {
    match self {
      RankOrder::Descending => candidate > held,
      RankOrder::Ascending => candidate < held,
    }
  }
}

/// A sorted buffer holding at most `capacity` entries.
///
/// Empty slots behave like sentinels that every candidate beats (a count of
/// negative infinity for descending order, positive infinity for ascending),
/// so the buffer fills up before any entry is displaced.
#[derive(Debug, Clone)]
pub struct RankedBuffer {
  order: RankOrder,
  capacity: usize,
  entries: Vec<RankedEntry>,
}

impl RankedBuffer {
  /// Create a buffer for `capacity` entries.
  pub fn new(order: RankOrder, capacity: usize) -> Self {
    Self {
      order,
      capacity,
      entries: Vec::with_capacity(capacity),
    }
  }

  /// Offer one table entry to the buffer.
  pub fn offer(&mut self, entry: &TableEntry) {
    if self.capacity == 0 {
      return;
    }

    let position = self
      .entries
      .iter()
      .position(|held| self.order.beats(entry.count, held.count))
      .unwrap_or(self.entries.len());

    if position < self.capacity {
      self.entries.insert(position, RankedEntry::new(entry.token.as_str(), entry.count));
      self.entries.truncate(self.capacity);
    }
  }

  /// The ranked entries, without any unfilled slots.
  pub fn into_entries(self) -> Vec<RankedEntry> {
    self.entries
  }
}

/// Rank every entry of `entries` in iteration order.
pub fn rank(entries: &[TableEntry], order: RankOrder, k: usize) -> Vec<RankedEntry> {
  let mut buffer = RankedBuffer::new(order, k);
  for entry in entries {
    buffer.offer(entry);
  }
  buffer.into_entries()
}

/// The K most frequent tokens, descending by count.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopK;

impl StatisticPass for TopK {
  fn kind(&self) -> StatisticKind {
    StatisticKind::TopK
  }

  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
    PassOutput::Ranked(rank(context.entries(), RankOrder::Descending, context.k))
  }
}

/// The K least frequent tokens, ascending by count.
#[derive(Debug, Default, Clone, Copy)]
pub struct BottomK;

impl StatisticPass for BottomK {
  fn kind(&self) -> StatisticKind {
    StatisticKind::BottomK
  }

  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
    PassOutput::Ranked(rank(context.entries(), RankOrder::Ascending, context.k))
  }
}
