//! The statistics engine that fans reduction passes out over a frozen table.

use crate::config::AnalyzerConfig;
use crate::context::SummaryContext;
use crate::error::{Error, Result};
use crate::pass::StatisticPass;
use crate::passes::standard_passes;
use crate::table::FrequencyTable;
use crate::types::{PassOutput, RankedEntry, StatisticKind, SummaryReport};
use log::{debug, trace};
use std::cmp::Ordering;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Derives a `SummaryReport` from a `FrequencyTable`.
///
/// `StatisticsEngine` holds one `StatisticPass` per `StatisticKind`. Each call
/// to [`StatisticsEngine::summarize`] dispatches every pass against the same
/// read-only table, waits for all of them, and folds their outputs into a
/// report. The engine keeps no state between calls, so a single engine can
/// be shared freely and summarizing the same table twice yields the same
/// report.
///
/// With the `parallel` feature (enabled by default) the passes run on the
/// rayon thread pool; without it they run one after another on the calling
/// thread. Either way the report depends only on the table's iteration
/// order, never on the order in which passes finish.
///
/// Create a `StatisticsEngine` with [`StatisticsEngine::new`] or the
/// [`StatisticsEngineBuilder`].
///
/// # Examples
///
/// ```rust
/// use wordstat::prelude::*;
///
/// let table = FrequencyTable::from_counts([("the", 5), ("quick", 2), ("fox", 2)]).unwrap();
/// let report = StatisticsEngine::new().summarize(&table, 2).unwrap();
///
/// assert_eq!(report.total_word_count, 9);
/// assert_eq!(report.top, vec![RankedEntry::new("the", 5), RankedEntry::new("quick", 2)]);
/// ```
pub struct StatisticsEngine {
  /// The registered passes, one per kind.
  passes: Arc<Vec<Box<dyn StatisticPass>>>,
  /// Upper bound for one `summarize` call.
  timeout: Option<Duration>,
}

impl Default for StatisticsEngine {
  fn default() -> Self {
    Self::new()
  }
}

/// Progress of a single `summarize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  Idle,
  Dispatched,
  Joined,
  Reported,
}

impl StatisticsEngine {
  /// Creates an engine with the seven built-in passes and no timeout.
  pub fn new() -> Self {
    StatisticsEngineBuilder::new().build()
  }

  /// Creates a new `StatisticsEngineBuilder` to construct an engine.
  pub fn builder() -> StatisticsEngineBuilder {
    StatisticsEngineBuilder::new()
  }

  /// The configured timeout, if any.
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }

  /// Computes every statistic for `table`, keeping `k` entries in the
  /// top and bottom rankings.
  ///
  /// ## Summarize Lifecycle
  ///
  /// 1.  **Idle**: A `SummaryContext` borrowing the table is created.
  /// 2.  **Dispatched**: Every pass is started against the context.
  /// 3.  **Joined**: The call blocks until all passes have returned. A pass
  ///     finishing early does not short-circuit the others.
  /// 4.  **Reported**: The outputs are folded into a `SummaryReport` and the
  ///     average word length is derived from the two totals.
  ///
  /// # Errors
  ///
  /// * [`Error::Timeout`] if a timeout is configured and the passes have not
  ///   all joined in time. No partial report is returned.
  /// * [`Error::IncompletePass`] if a registered pass returned an output of
  ///   the wrong shape for its kind.
  /// * [`Error::TotalOverflow`] if the word or letter total does not fit in
  ///   a `u64`.
  ///
  /// A timed-out run is not cancelled: its passes keep running in the
  /// background on the worker thread and the rayon pool until they finish,
  /// and their result is then dropped.
  ///
  /// An empty table is not an error: the report has zero totals, no
  /// shortest/longest word, an undefined average, and empty rankings.
  pub fn summarize(&self, table: &FrequencyTable, k: usize) -> Result<SummaryReport> {
    match self.timeout {
      None => run_passes(&self.passes, table, k),
      Some(limit) => self.summarize_within(table.clone(), k, limit),
    }
  }

  /// Runs the passes on a worker thread and waits at most `limit` for them.
  fn summarize_within(&self, table: FrequencyTable, k: usize, limit: Duration) -> Result<SummaryReport> {
    let passes = Arc::clone(&self.passes);
    let (sender, receiver) = mpsc::channel();

    thread::Builder::new()
      .name("wordstat-summarize".to_string())
      .spawn(move || {
        // The receiver is gone once the caller timed out.
        let _ = sender.send(run_passes(&passes, &table, k));
      })
      .map_err(Error::Worker)?;

    match receiver.recv_timeout(limit) {
      Ok(result) => result,
      Err(mpsc::RecvTimeoutError::Timeout) => {
        debug!("summarize exceeded {:?}; discarding the run", limit);
        Err(Error::Timeout(limit))
      }
      Err(mpsc::RecvTimeoutError::Disconnected) => Err(Error::WorkerLost),
    }
  }
}

/// Dispatch every pass, wait for all of them, and fold the outputs.
fn run_passes(passes: &[Box<dyn StatisticPass>], table: &FrequencyTable, k: usize) -> Result<SummaryReport> {
  let started = Instant::now();
  let context = SummaryContext::new(table, k);
  trace!("{:?}: {} tokens, k = {}", Phase::Idle, table.len(), k);

  debug!("{:?}: {} passes", Phase::Dispatched, passes.len());

  #[cfg(feature = "parallel")]
  let outputs: Vec<(StatisticKind, PassOutput)> = passes
    .par_iter()
    .map(|pass| (pass.kind(), pass.reduce(&context)))
    .collect();

  #[cfg(not(feature = "parallel"))]
  let outputs: Vec<(StatisticKind, PassOutput)> = passes
    .iter()
    .map(|pass| (pass.kind(), pass.reduce(&context)))
    .collect();

  debug!("{:?}: {} outputs after {:?}", Phase::Joined, outputs.len(), started.elapsed());

  let mut partial = PartialReport::default();
  for (kind, output) in outputs {
    trace!("{:?} -> {:?}", kind, output);
    partial.accept(kind, output)?;
  }
  let report = partial.finish()?;

  debug!("{:?}: summarized in {:?}", Phase::Reported, started.elapsed());
  Ok(report)
}

/// Pass outputs collected during the join.
#[derive(Debug, Default)]
struct PartialReport {
  total_word_count: Option<u64>,
  unique_word_count: Option<u64>,
  shortest_word: Option<Option<String>>,
  longest_word: Option<Option<String>>,
  top: Option<Vec<RankedEntry>>,
  bottom: Option<Vec<RankedEntry>>,
  total_letter_count: Option<u64>,
}

impl PartialReport {
  /// Store one pass output, rejecting outputs whose shape does not match the kind.
  fn accept(&mut self, kind: StatisticKind, output: PassOutput) -> Result<()> {
    match (kind, output) {
      (StatisticKind::TotalWordCount, PassOutput::Count(n)) => self.total_word_count = Some(narrow(kind, n)?),
      (StatisticKind::UniqueWordCount, PassOutput::Count(n)) => self.unique_word_count = Some(narrow(kind, n)?),
      (StatisticKind::TotalLetterCount, PassOutput::Count(n)) => self.total_letter_count = Some(narrow(kind, n)?),
      (StatisticKind::ShortestWord, PassOutput::Word(word)) => self.shortest_word = Some(word),
      (StatisticKind::LongestWord, PassOutput::Word(word)) => self.longest_word = Some(word),
      (StatisticKind::TopK, PassOutput::Ranked(entries)) => self.top = Some(entries),
      (StatisticKind::BottomK, PassOutput::Ranked(entries)) => self.bottom = Some(entries),
      (kind, _) => return Err(Error::IncompletePass(kind)),
    }
    Ok(())
  }

  /// Build the report once every kind has reported.
  fn finish(self) -> Result<SummaryReport> {
    fn require<T>(value: Option<T>, kind: StatisticKind) -> Result<T> {
      value.ok_or(Error::IncompletePass(kind))
    }

    let total_word_count = require(self.total_word_count, StatisticKind::TotalWordCount)?;
    let total_letter_count = require(self.total_letter_count, StatisticKind::TotalLetterCount)?;

    Ok(SummaryReport {
      total_word_count,
      unique_word_count: require(self.unique_word_count, StatisticKind::UniqueWordCount)?,
      shortest_word: require(self.shortest_word, StatisticKind::ShortestWord)?,
      longest_word: require(self.longest_word, StatisticKind::LongestWord)?,
      total_letter_count,
      average_word_length: average_word_length(total_letter_count, total_word_count),
      top: require(self.top, StatisticKind::TopK)?,
      bottom: require(self.bottom, StatisticKind::BottomK)?,
    })
  }
}

/// Fit a pass total into the report's `u64` field.
fn narrow(kind: StatisticKind, total: u128) -> Result<u64> {
  u64::try_from(total).map_err(|_| Error::TotalOverflow(kind))
}

/// `total_letters / total_words` rounded to two decimal places.
///
/// Rounding is done on the exact quotient, with ties going to the even
/// hundredth. Returns `None` when `total_words` is zero.
pub fn average_word_length(total_letters: u64, total_words: u64) -> Option<f64> {
  if total_words == 0 {
    return None;
  }

  let scaled = total_letters as u128 * 100;
  let words = total_words as u128;
  let mut hundredths = scaled / words;

  match (scaled % words * 2).cmp(&words) {
    Ordering::Greater => hundredths += 1,
    Ordering::Equal if hundredths % 2 == 1 => hundredths += 1,
    _ => {}
  }

  Some(hundredths as f64 / 100.0)
}

/// A builder for creating `StatisticsEngine` instances.
///
/// The builder starts with the seven built-in passes. [`with`](Self::with)
/// replaces the pass registered for the same `StatisticKind`, so an engine
/// always has exactly one pass per kind.
pub struct StatisticsEngineBuilder {
  passes: Vec<Box<dyn StatisticPass>>,
  timeout: Option<Duration>,
}

impl Default for StatisticsEngineBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl StatisticsEngineBuilder {
  /// Creates a builder with the built-in passes and no timeout.
  pub fn new() -> Self {
    Self {
      passes: standard_passes(),
      timeout: None,
    }
  }

  /// Registers a pass, replacing the pass of the same kind.
  pub fn with(mut self, pass: Box<dyn StatisticPass>) -> Self {
    let kind = pass.kind();
    match self.passes.iter().position(|p| p.kind() == kind) {
      Some(position) => self.passes[position] = pass,
      None => self.passes.push(pass),
    }
    self
  }

  /// Bounds each `summarize` call by `timeout`.
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Applies the engine settings from `config`.
  pub fn config(mut self, config: &AnalyzerConfig) -> Self {
    self.timeout = config.timeout();
    self
  }

  /// Builds the `StatisticsEngine`.
  pub fn build(self) -> StatisticsEngine {
    StatisticsEngine {
      passes: Arc::new(self.passes),
      timeout: self.timeout,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixture() -> FrequencyTable {
    FrequencyTable::from_counts([
      ("the", 5),
      ("quick", 2),
      ("fox", 2),
      ("jumps", 1),
      ("lazy", 1),
      ("dog", 1),
    ])
    .unwrap()
  }

  struct SlowTotal(Duration);

  impl StatisticPass for SlowTotal {
    fn kind(&self) -> StatisticKind {
      StatisticKind::TotalWordCount
    }

    fn reduce(&self, context: &SummaryContext<'_>) -> PassOutput {
      thread::sleep(self.0);
      PassOutput::Count(context.entries().iter().map(|e| u128::from(e.count)).sum())
    }
  }

  struct WrongShape;

  impl StatisticPass for WrongShape {
    fn kind(&self) -> StatisticKind {
      StatisticKind::TopK
    }

    fn reduce(&self, _context: &SummaryContext<'_>) -> PassOutput {
      PassOutput::Count(0)
    }
  }

  #[test]
  fn test_summarize_scenario() {
    let report = StatisticsEngine::new().summarize(&fixture(), 3).unwrap();

    assert_eq!(report.total_word_count, 12);
    assert_eq!(report.unique_word_count, 6);
    assert_eq!(report.shortest_word.as_deref(), Some("the"));
    assert_eq!(report.longest_word.as_deref(), Some("quick"));
    assert_eq!(report.total_letter_count, 43);
    assert_eq!(report.average_word_length, Some(3.58));
    assert_eq!(
      report.top,
      vec![RankedEntry::new("the", 5), RankedEntry::new("quick", 2), RankedEntry::new("fox", 2)]
    );
    assert_eq!(
      report.bottom,
      vec![RankedEntry::new("jumps", 1), RankedEntry::new("lazy", 1), RankedEntry::new("dog", 1)]
    );
  }

  #[test]
  fn test_summarize_empty_table() {
    let report = StatisticsEngine::new().summarize(&FrequencyTable::default(), 5).unwrap();

    assert_eq!(report.total_word_count, 0);
    assert_eq!(report.unique_word_count, 0);
    assert_eq!(report.shortest_word, None);
    assert_eq!(report.longest_word, None);
    assert_eq!(report.average_word_length, None);
    assert!(report.top.is_empty());
    assert!(report.bottom.is_empty());
  }

  #[test]
  fn test_summarize_is_repeatable() {
    let engine = StatisticsEngine::new();
    let table = fixture();
    let first = engine.summarize(&table, 4).unwrap();
    let second = engine.summarize(&table, 4).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_timeout_fails_whole_call() {
    let engine = StatisticsEngine::builder()
      .with(Box::new(SlowTotal(Duration::from_millis(500))))
      .timeout(Duration::from_millis(20))
      .build();

    let err = engine.summarize(&fixture(), 3).unwrap_err();
    assert!(matches!(err, Error::Timeout(limit) if limit == Duration::from_millis(20)));
  }

  #[test]
  fn test_timeout_not_reached() {
    let engine = StatisticsEngine::builder()
      .with(Box::new(SlowTotal(Duration::from_millis(5))))
      .timeout(Duration::from_secs(10))
      .build();

    let report = engine.summarize(&fixture(), 3).unwrap();
    assert_eq!(report.total_word_count, 12);
  }

  #[test]
  fn test_mismatched_output_is_rejected() {
    let engine = StatisticsEngine::builder().with(Box::new(WrongShape)).build();
    let err = engine.summarize(&fixture(), 3).unwrap_err();
    assert!(matches!(err, Error::IncompletePass(StatisticKind::TopK)));
  }

  #[test]
  fn test_total_past_64_bits_is_an_error() {
    let table = FrequencyTable::from_counts([("alpha", u64::MAX), ("beta", 1)]).unwrap();
    let err = StatisticsEngine::new().summarize(&table, 2).unwrap_err();
    assert!(matches!(
      err,
      Error::TotalOverflow(StatisticKind::TotalWordCount) | Error::TotalOverflow(StatisticKind::TotalLetterCount)
    ));
  }

  #[test]
  fn test_largest_representable_total_is_reported() {
    let table = FrequencyTable::from_counts([("a", u64::MAX - 1), ("b", 1)]).unwrap();
    let report = StatisticsEngine::new().summarize(&table, 2).unwrap();
    assert_eq!(report.total_word_count, u64::MAX);
    assert_eq!(report.total_letter_count, u64::MAX);
  }

  #[test]
  fn test_builder_replaces_same_kind() {
    let engine = StatisticsEngine::builder()
      .with(Box::new(SlowTotal(Duration::from_millis(1))))
      .build();
    assert_eq!(engine.passes.len(), StatisticKind::ALL.len());
  }

  #[test]
  fn test_average_word_length_rounding() {
    assert_eq!(average_word_length(43, 12), Some(3.58));
    assert_eq!(average_word_length(8, 2), Some(4.0));
    // Exact midpoints go to the even hundredth.
    assert_eq!(average_word_length(1, 8), Some(0.12));
    assert_eq!(average_word_length(3, 8), Some(0.38));
    assert_eq!(average_word_length(2, 3), Some(0.67));
    assert_eq!(average_word_length(10, 0), None);
  }
}
