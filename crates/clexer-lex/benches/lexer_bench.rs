//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package clexer-lex`

use clexer_lex::{tokenize, Lexer};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "int main ( ) { int x = 42 ; return x + 1 ; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("declaration", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 5;")))
    });

    group.bench_function("function_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("packed_operators", |b| {
        b.iter(|| lexer_token_count(black_box("a=b+c*d/e%f-g<h>i;")))
    });

    group.finish();
}

fn bench_lexer_long_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_long");

    let source = "for (i = 0; i < n; i = i + 1) { total = total + values[i]; } ".repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_loop", |b| {
        b.iter(|| tokenize(black_box(&source)))
    });

    let spaced = format!("x{}= 1;", " ".repeat(4096));
    group.bench_function("space_run", |b| {
        b.iter(|| lexer_token_count(black_box(&spaced)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("printf(\"hello\");")))
    });

    group.bench_function("unterminated_string", |b| {
        let source = format!("s = \"{}", "x".repeat(1024));
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_long_input,
    bench_lexer_strings
);
criterion_main!(benches);
