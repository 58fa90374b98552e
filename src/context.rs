//! Context provided to statistic passes during a summarize call.

use crate::table::{FrequencyTable, TableEntry};

/// Read-only view handed to every `StatisticPass`.
///
/// All passes of one `summarize` call receive the same context. It borrows
/// the frozen table, so no pass can mutate it and no locking is needed while
/// the passes run side by side.
#[derive(Debug, Clone, Copy)]
pub struct SummaryContext<'a> {
  /// The table being summarized.
  pub table: &'a FrequencyTable,
  /// Number of entries the ranking passes keep.
  pub k: usize,
}

impl<'a> SummaryContext<'a> {
  /// Creates a new context over `table`.
  pub fn new(table: &'a FrequencyTable, k: usize) -> Self {
    Self { table, k }
  }

  /// Table entries in iteration order.
  pub fn entries(&self) -> &'a [TableEntry] {
    self.table.entries()
  }
}
