//! Lexer benchmarks.
//!
//! Measures raw tokenization throughput (bytes/sec) across input sizes and
//! token mixes, for comparison against other compilers' lexers.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sable_lexer::{lex, SourceBuffer};

/// A small function with the common token mix.
const SIMPLE_FUNCTION: &str = "func add(a: Int, b: Int) -> Int { return a + b }";

/// String-heavy input: quotes, raw delimiters, interpolation.
const STRING_HEAVY: &str = r###"
let greeting = "hello, \(name)!"
let raw = #"no \(escapes) here"#
let doc = """
    multi
    line
    """
"###;

fn generate_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("func f{i}(x: Int) -> Int {{ return x * {i} + 0x{i:x} }}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/throughput");
    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("functions", num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let buffer = SourceBuffer::new(src.as_bytes());
                    black_box(lex(&buffer));
                });
            },
        );
    }
    group.finish();
}

fn bench_token_mixes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/mix");

    group.throughput(Throughput::Bytes(SIMPLE_FUNCTION.len() as u64));
    group.bench_function("simple_function", |b| {
        b.iter(|| {
            let buffer = SourceBuffer::new(SIMPLE_FUNCTION.as_bytes());
            black_box(lex(&buffer));
        });
    });

    group.throughput(Throughput::Bytes(STRING_HEAVY.len() as u64));
    group.bench_function("string_heavy", |b| {
        b.iter(|| {
            let buffer = SourceBuffer::new(STRING_HEAVY.as_bytes());
            black_box(lex(&buffer));
        });
    });

    let comment_heavy = "// a line comment\n/* and /* a nested */ block */\n".repeat(200);
    group.throughput(Throughput::Bytes(comment_heavy.len() as u64));
    group.bench_function("comment_heavy", |b| {
        b.iter(|| {
            let buffer = SourceBuffer::new(comment_heavy.as_bytes());
            black_box(lex(&buffer));
        });
    });

    group.finish();
}

fn bench_reuse_buffer(c: &mut Criterion) {
    // Lexing alone, with buffer construction hoisted out.
    let source = generate_functions(500);
    let buffer = SourceBuffer::new(source.as_bytes());

    let mut group = c.benchmark_group("lexer/lex_only");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("500_functions", |b| {
        b.iter(|| black_box(lex(&buffer)));
    });
    group.finish();
}

criterion_group!(benches, bench_throughput, bench_token_mixes, bench_reuse_buffer);
criterion_main!(benches);
