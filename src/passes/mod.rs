//! The built-in `StatisticPass` implementations.
//!
//! # Available Passes
//!
//! - [`TotalWordCount`], [`UniqueWordCount`], [`TotalLetterCount`]: additive totals.
//! - [`ShortestWord`], [`LongestWord`]: first-seen extremes by character length.
//! - [`TopK`], [`BottomK`]: bounded rankings with first-seen tie-breaks.

/// Additive totals over the table.
pub mod counts;
/// Shortest and longest word selection.
pub mod extremes;
/// Bounded top-K and bottom-K rankings.
pub mod ranked;

pub use counts::{TotalLetterCount, TotalWordCount, UniqueWordCount};
pub use extremes::{LongestWord, ShortestWord};
pub use ranked::{rank, BottomK, RankOrder, RankedBuffer, TopK};

use crate::pass::StatisticPass;

/// One instance of every built-in pass, in report order.
pub fn standard_passes() -> Vec<Box<dyn StatisticPass>> {
  vec![
    Box::new(TotalWordCount),
    Box::new(UniqueWordCount),
    Box::new(ShortestWord),
    Box::new(LongestWord),
    Box::new(TopK),
    Box::new(BottomK),
    Box::new(TotalLetterCount),
  ]
}
