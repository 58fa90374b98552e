//! The `StatisticPass` trait, which defines the interface for reduction passes.

use crate::context::SummaryContext;
use crate::types::{PassOutput, StatisticKind};

/// A single read-only reduction over a frequency table.
///
/// The `StatisticsEngine` runs every registered pass against the same
/// `SummaryContext` and joins their outputs into a `SummaryReport`. A pass
/// owns its accumulator and returns a value; it never observes the output of
/// another pass.
///
/// The `Send` and `Sync` bounds are required to allow passes to be run
/// concurrently by the engine.
pub trait StatisticPass: Send + Sync {
  /// Returns the `StatisticKind` this pass computes.
  ///
  /// The engine uses the kind to place the output in the report.
  fn kind(&self) -> StatisticKind;

  /// Reduces the table in `context` to a single output.
  ///
  /// # Arguments
  ///
  /// * `context` - The `SummaryContext` providing the frozen table and K.
  ///
  /// # Returns
  ///
  /// A `PassOutput` whose variant matches the pass kind: `Count` for the
  /// totals, `Word` for the shortest/longest word, `Ranked` for top/bottom-K.
  fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput;
}
