use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordstat::prelude::*;

fn synthetic_table(distinct: usize) -> FrequencyTable {
  let mut builder = FrequencyTable::builder();
  for i in 0..distinct {
    let token = format!("word{}", i);
    builder.add_occurrences(&token, (i % 97 + 1) as u64).unwrap();
  }
  builder.freeze()
}

fn benchmark_summarize(c: &mut Criterion) {
  let table = synthetic_table(50_000);
  let engine = StatisticsEngine::new();

  c.bench_function("summarize_50k", |b| {
    b.iter(|| engine.summarize(black_box(&table), black_box(5)))
  });
}

fn benchmark_frequency_table(c: &mut Criterion) {
  let text = "The quick brown fox jumps over the lazy dog. Бързата кафява лисица. ".repeat(2_000);
  let tokenizer = Tokenizer::default();

  c.bench_function("frequency_table", |b| {
    b.iter(|| tokenizer.frequency_table(black_box(&text)))
  });
}

criterion_group!(benches, benchmark_summarize, benchmark_frequency_table);
criterion_main!(benches);
