//! Rendering of summary reports.

use crate::types::{RankedEntry, SummaryReport};
use std::io::{self, Write};

/// Formats a `SummaryReport` to a writer.
pub trait Reporter {
  /// Writes `report` to `out`. `k` is the ranking size that was requested.
  fn render(&self, report: &SummaryReport, k: usize, out: &mut dyn Write) -> io::Result<()>;
}

/// Capitalized English name for small ranking sizes.
fn count_word(k: usize) -> String {
  const WORDS: [&str; 13] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve",
  ];
  WORDS.get(k).map_or_else(|| k.to_string(), |word| word.to_string())
}

/// Plain labeled lines, one statistic per line.
///
/// ```text
/// Total word count - 12
/// Unique word count - 6
/// Shortest word - the
/// Longest word - quick
/// Average word length - 3.58
/// Five most common words:
/// the - 5
/// ...
/// Five least common words:
/// jumps - 1
/// ...
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReporter;

impl TextReporter {
  fn render_ranking(out: &mut dyn Write, label: &str, entries: &[RankedEntry]) -> io::Result<()> {
    writeln!(out, "{}", label)?;
    for entry in entries {
      writeln!(out, "{}", entry)?;
    }
    Ok(())
  }
}

impl Reporter for TextReporter {
  fn render(&self, report: &SummaryReport, k: usize, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Total word count - {}", report.total_word_count)?;
    writeln!(out, "Unique word count - {}", report.unique_word_count)?;
    writeln!(out, "Shortest word - {}", report.shortest_word.as_deref().unwrap_or("no result"))?;
    writeln!(out, "Longest word - {}", report.longest_word.as_deref().unwrap_or("no result"))?;
    match report.average_word_length {
      Some(average) => writeln!(out, "Average word length - {:.2}", average)?,
      None => writeln!(out, "Average word length - undefined")?,
    }

    let count = count_word(k);
    Self::render_ranking(out, &format!("{} most common words:", count), &report.top)?;
    Self::render_ranking(out, &format!("{} least common words:", count), &report.bottom)
  }
}

/// Pretty-printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
  fn render(&self, report: &SummaryReport, _k: usize, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
  }
}
