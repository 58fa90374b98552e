use wordstat::prelude::*;

fn main() {
  let text = "\
    It was the best of times, it was the worst of times, it was the age of
    wisdom, it was the age of foolishness, it was the epoch of belief.";

  let config = AnalyzerConfig::default().top_k(3);
  let table = Tokenizer::new(&config)
    .expect("default config is valid")
    .frequency_table(text);

  let engine = StatisticsEngine::builder().config(&config).build();
  let report = engine.summarize(&table, config.top_k).expect("summarize failed");

  let mut out = std::io::stdout();
  TextReporter.render(&report, config.top_k, &mut out).expect("write failed");
}
