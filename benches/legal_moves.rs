//! Benchmarks for rule evaluation on the standard English board.

use criterion::{criterion_group, criterion_main, Criterion};
use peg_solitaire::games::english;
use peg_solitaire::{EnglishRules, RuleSet};

fn bench_rule_evaluation(c: &mut Criterion) {
    let board = english::board();
    let mut group = c.benchmark_group("english_rules");

    group.bench_function("legal_moves", |b| {
        b.iter(|| EnglishRules.legal_moves(&board))
    });
    group.bench_function("status", |b| b.iter(|| EnglishRules.status(&board)));

    group.finish();
}

criterion_group!(benches, bench_rule_evaluation);
criterion_main!(benches);
