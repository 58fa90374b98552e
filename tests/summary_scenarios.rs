use wordstat::prelude::*;

fn fox_table() -> FrequencyTable {
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

#[test]
fn test_fox_scenario() {
  let report = wordstat::summarize(&fox_table(), 3).unwrap();

  assert_eq!(report.total_word_count, 12);
  assert_eq!(report.unique_word_count, 6);
  assert_eq!(report.total_letter_count, 43);
  assert_eq!(report.average_word_length, Some(3.58));
  assert_eq!(report.shortest_word.as_deref(), Some("the"));
  assert_eq!(report.longest_word.as_deref(), Some("quick"));

  let top: Vec<_> = report.top.iter().map(|e| (e.token.as_str(), e.count)).collect();
  assert_eq!(top, vec![("the", 5), ("quick", 2), ("fox", 2)]);

  let bottom: Vec<_> = report.bottom.iter().map(|e| (e.token.as_str(), e.count)).collect();
  assert_eq!(bottom, vec![("jumps", 1), ("lazy", 1), ("dog", 1)]);
}

#[test]
fn test_totals_match_table() {
  let text = "It was the best of times, it was the worst of times, it was the age of wisdom";
  let config = AnalyzerConfig::default();
  let table = Tokenizer::new(&config).unwrap().frequency_table(text);
  let report = wordstat::summarize(&table, 5).unwrap();

  let expected_total: u64 = table.iter().map(|(_, count)| count).sum();
  let expected_letters: u64 = table.iter().map(|(token, count)| token.chars().count() as u64 * count).sum();

  assert_eq!(report.total_word_count, expected_total);
  assert_eq!(report.unique_word_count, table.len() as u64);
  assert_eq!(report.total_letter_count, expected_letters);
}

#[test]
fn test_ranking_lengths_follow_k() {
  let table = fox_table();
  for k in 0..10 {
    let report = wordstat::summarize(&table, k).unwrap();
    assert_eq!(report.top.len(), k.min(table.len()));
    assert_eq!(report.bottom.len(), k.min(table.len()));
    assert!(report.top.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(report.bottom.windows(2).all(|w| w[0].count <= w[1].count));
  }
}

#[test]
fn test_tie_break_follows_insertion_order() {
  let forward = FrequencyTable::from_counts([("alpha", 1), ("bravo", 1)]).unwrap();
  let reverse = FrequencyTable::from_counts([("bravo", 1), ("alpha", 1)]).unwrap();

  let a = wordstat::summarize(&forward, 1).unwrap();
  let b = wordstat::summarize(&reverse, 1).unwrap();

  assert_eq!(a.top[0].token, "alpha");
  assert_eq!(a.bottom[0].token, "alpha");
  assert_eq!(a.shortest_word.as_deref(), Some("alpha"));
  assert_eq!(a.longest_word.as_deref(), Some("alpha"));

  assert_eq!(b.top[0].token, "bravo");
  assert_eq!(b.bottom[0].token, "bravo");
  assert_eq!(b.shortest_word.as_deref(), Some("bravo"));
}

#[test]
fn test_empty_corpus() {
  let config = AnalyzerConfig::default();
  let report = wordstat::analyze_text("a an; to! -- ...", &config).unwrap();

  assert_eq!(report.total_word_count, 0);
  assert_eq!(report.unique_word_count, 0);
  assert_eq!(report.shortest_word, None);
  assert_eq!(report.longest_word, None);
  assert_eq!(report.average_word_length, None);
  assert!(report.top.is_empty());
  assert!(report.bottom.is_empty());
}

#[test]
fn test_analyze_mixed_scripts() {
  let text = "Книгата на ангелите. The book of angels, книгата!";
  let config = AnalyzerConfig::default().top_k(1);
  let report = wordstat::analyze_text(text, &config).unwrap();

  assert_eq!(report.total_word_count, 6);
  assert_eq!(report.top, vec![RankedEntry::new("книгата", 2)]);
  assert_eq!(report.longest_word.as_deref(), Some("ангелите"));
}

#[test]
fn test_engine_shared_across_threads() {
  let engine = std::sync::Arc::new(StatisticsEngine::new());
  let table = fox_table();

  let handles: Vec<_> = (0..4)
    .map(|_| {
      let engine = engine.clone();
      let table = table.clone();
      std::thread::spawn(move || engine.summarize(&table, 3).unwrap())
    })
    .collect();

  let reports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
  assert!(reports.windows(2).all(|w| w[0] == w[1]));
}
