//! Lexer Benchmarks
//!
//! Measures token-stream throughput. Run with:
//! `cargo bench --package quillc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use quillc_lex::lex;

fn lexer_token_count(source: &str) -> usize {
    lex(source).count()
}

fn bench_lexer_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "(balance ?? 0) + (reserve ?? 100) * 42";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_number", |b| {
        b.iter(|| lexer_token_count(black_box("42")))
    });

    group.bench_function("arithmetic_expression", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_large_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    // Many short tokens across many lines
    let source = "(amount_1 + 20) * (amount_2 ?? 3)\n".repeat(1_000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_expression_lines", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_expressions, bench_lexer_large_input);
criterion_main!(benches);
