//! Tokenizer benchmarks.
//!
//! Measures throughput across input sizes, with and without cooking values.

#![allow(clippy::unwrap_used, reason = "Benchmarks can panic")]

use std::hint::black_box;

use comot_css::{Arena, Tokenizer, TokenizerConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const RULE: &str = r#".card-header > a:hover, #main .nav-item[data-id="42"] {
  color: #ff00aa;
  margin: 0 auto 1.5em -2px;
  background: url(img/bg.png) no-repeat, linear-gradient(45deg, rgba(0, 0, 0, 0.3) 10%, transparent);
  content: "\201C quoted \201D";
  --custom-prop: calc(100% - 2 * var(--gap));
}
/* separator */
@media (max-width: 600px) { .card-header { display: none } }
"#;

fn stylesheet(rules: usize) -> String {
    RULE.repeat(rules)
}

fn bench_scan(c: &mut Criterion) {
    let config = TokenizerConfig::default().quiet();
    let mut group = c.benchmark_group("tokenize/scan");

    for rules in [1usize, 10, 100, 1000] {
        let source = stylesheet(rules);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("rules", rules), &source, |b, src| {
            b.iter(|| {
                let arena = Arena::for_input(src.len());
                let tokenizer = Tokenizer::create(src.as_bytes(), &arena, &config).unwrap();
                black_box(tokenizer.count());
            });
        });
    }
    group.finish();
}

fn bench_cook(c: &mut Criterion) {
    let config = TokenizerConfig::default().quiet();
    let source = stylesheet(100);
    let mut group = c.benchmark_group("tokenize/cook");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("values", |b| {
        b.iter(|| {
            let arena = Arena::for_input(source.len());
            let mut tokenizer = Tokenizer::create(source.as_bytes(), &arena, &config).unwrap();
            let mut total = 0;
            loop {
                let token = tokenizer.next_token();
                if token.is_eof() {
                    break;
                }
                total += tokenizer.value(&token).map_or(0, str::len);
            }
            black_box(total);
        });
    });
    group.finish();
}

fn bench_utf16(c: &mut Criterion) {
    let config = TokenizerConfig::default().quiet();
    let mut source = vec![0xFF, 0xFE];
    for unit in stylesheet(100).encode_utf16() {
        source.extend_from_slice(&unit.to_le_bytes());
    }

    c.bench_function("tokenize/utf16le", |b| {
        b.iter(|| {
            let arena = Arena::for_input(source.len());
            let tokenizer = Tokenizer::create(&source, &arena, &config).unwrap();
            black_box(tokenizer.count());
        });
    });
}

criterion_group!(benches, bench_scan, bench_cook, bench_utf16);
criterion_main!(benches);
