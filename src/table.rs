//! The token frequency table and its builder.

use crate::error::{Error, Result};
use crate::types::Token;
use std::collections::HashMap;
use std::sync::Arc;

/// A single row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
  pub token: Token,
  pub count: u64,
}

impl TableEntry {
  /// Length of the token in characters.
  pub fn len(&self) -> usize {
    self.token.chars().count()
  }

  /// Returns `true` for an empty token. Built tables never contain one.
  pub fn is_empty(&self) -> bool {
    self.token.is_empty()
  }
}

/// Mutable accumulator used while a document is being tokenized.
///
/// Tokens keep the position of their first insertion, which becomes the
/// iteration order of the frozen [`FrequencyTable`].
#[derive(Debug, Default)]
pub struct FrequencyTableBuilder {
  index: HashMap<Token, usize>,
  entries: Vec<TableEntry>,
}

impl FrequencyTableBuilder {
  /// Create a new empty builder.
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one occurrence of `token`.
  ///
  /// A single count saturates at `u64::MAX` instead of wrapping.
  pub fn add(&mut self, token: &str) {
    let slot = self.slot(token);
    slot.count = slot.count.saturating_add(1);
  }

  /// The entry for `token`, inserted with a count of zero if it is new.
  fn slot(&mut self, token: &str) -> &mut TableEntry {
    let position = match self.index.get(token) {
      Some(&position) => position,
      None => {
        let position = self.entries.len();
        self.index.insert(token.to_string(), position);
        self.entries.push(TableEntry {
          token: token.to_string(),
          count: 0,
        });
        position
      }
    };
    &mut self.entries[position]
  }

  /// Record `count` occurrences of `token`.
  ///
  /// A zero count is rejected so that no key of the finished table ever maps
  /// to a non-positive count. Returns [`Error::CountOverflow`] if the
  /// accumulated count would not fit in a `u64`; the builder is left unchanged.
  pub fn add_occurrences(&mut self, token: &str, count: u64) -> Result<()> {
    if count == 0 {
      return Err(Error::InvalidCount(token.to_string()));
    }
    if let Some(&position) = self.index.get(token) {
      let entry = &mut self.entries[position];
      entry.count = entry
        .count
        .checked_add(count)
        .ok_or_else(|| Error::CountOverflow(token.to_string()))?;
      return Ok(());
    }
    self.slot(token).count = count;
    Ok(())
  }

  /// Freeze the accumulated counts into a read-only table.
  pub fn freeze(self) -> FrequencyTable {
    FrequencyTable {
      entries: self.entries.into(),
      index: Arc::new(self.index),
    }
  }
}

/// An immutable mapping from token to occurrence count.
///
/// Iteration yields entries in first-insertion order. That order is the only
/// input to the first-wins tie-breaks of the statistics engine, so two tables
/// built from the same token stream always summarize identically.
///
/// Cloning is cheap: the entries are shared behind an `Arc` and never change
/// after [`FrequencyTableBuilder::freeze`].
#[derive(Debug, Clone)]
pub struct FrequencyTable {
  entries: Arc<[TableEntry]>,
  index: Arc<HashMap<Token, usize>>,
}

impl Default for FrequencyTable {
  fn default() -> Self {
    FrequencyTableBuilder::new().freeze()
  }
}

impl FrequencyTable {
  /// Create a new table builder.
  pub fn builder() -> FrequencyTableBuilder {
    FrequencyTableBuilder::new()
  }

  /// Build a table from `(token, count)` pairs that were counted elsewhere.
  ///
  /// Repeated tokens accumulate. Returns [`Error::InvalidCount`] for a zero
  /// count and [`Error::CountOverflow`] when a token's total exceeds `u64::MAX`.
  pub fn from_counts<I, S>(counts: I) -> Result<Self>
  where
    I: IntoIterator<Item = (S, u64)>,
    S: AsRef<str>,
  {
    let mut builder = FrequencyTableBuilder::new();
    for (token, count) in counts {
      builder.add_occurrences(token.as_ref(), count)?;
    }
    Ok(builder.freeze())
  }

  /// Number of distinct tokens.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no token survived tokenization.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Occurrence count for `token`, if present.
  pub fn get(&self, token: &str) -> Option<u64> {
    self.index.get(token).map(|&position| self.entries[position].count)
  }

  /// Entries in first-insertion order.
  pub fn entries(&self) -> &[TableEntry] {
    &self.entries
  }

  /// Iterate `(token, count)` pairs in first-insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.entries.iter().map(|e| (e.token.as_str(), e.count))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builder_keeps_first_insertion_order() {
    let mut builder = FrequencyTable::builder();
    for token in ["fox", "the", "fox", "dog", "the", "fox"] {
      builder.add(token);
    }
    let table = builder.freeze();

    let rows: Vec<_> = table.iter().collect();
    assert_eq!(rows, vec![("fox", 3), ("the", 2), ("dog", 1)]);
    assert_eq!(table.get("the"), Some(2));
    assert_eq!(table.get("cat"), None);
  }

  #[test]
  fn test_from_counts_accumulates_and_rejects_zero() {
    let table = FrequencyTable::from_counts([("the", 2), ("fox", 1), ("the", 3)]).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("the"), Some(5));

    let err = FrequencyTable::from_counts([("the", 0)]).unwrap_err();
    assert!(matches!(err, Error::InvalidCount(token) if token == "the"));
  }

  #[test]
  fn test_from_counts_rejects_overflowing_token() {
    let err = FrequencyTable::from_counts([("alpha", u64::MAX), ("alpha", 1)]).unwrap_err();
    assert!(matches!(err, Error::CountOverflow(token) if token == "alpha"));

    let table = FrequencyTable::from_counts([("alpha", u64::MAX - 1), ("alpha", 1)]).unwrap();
    assert_eq!(table.get("alpha"), Some(u64::MAX));
  }

  #[test]
  fn test_add_saturates() {
    let mut builder = FrequencyTable::builder();
    builder.add_occurrences("alpha", u64::MAX).unwrap();
    builder.add("alpha");
    assert_eq!(builder.freeze().get("alpha"), Some(u64::MAX));
  }

  #[test]
  fn test_entry_length_counts_characters() {
    let table = FrequencyTable::from_counts([("книга", 1)]).unwrap();
    assert_eq!(table.entries()[0].len(), 5);
  }

  #[test]
  fn test_clone_shares_entries() {
    let table = FrequencyTable::from_counts([("alpha", 1)]).unwrap();
    let copy = table.clone();
    assert!(Arc::ptr_eq(&table.entries, &copy.entries));
  }
}
