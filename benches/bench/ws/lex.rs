// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// workspace imports
use sectional::syntax;

// local imports
use super::{GROUP, ND, samples};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("{}{}lex", GROUP, ND));
    group.warm_up_time(Duration::from_millis(250));
    group.measurement_time(Duration::from_secs(2));

    let samples = [
        ("small", samples::SMALL.to_owned()),
        ("nested", samples::nested(16, 3)),
    ];

    for (name, sample) in &samples {
        group.throughput(Throughput::Bytes(sample.len() as u64));

        group.bench_function(BenchmarkId::new("lex:discard", name), |b| {
            let mut lexer = syntax::lexer();
            b.iter(|| black_box(lexer.lex(black_box(sample))).unwrap());
        });

        group.bench_function(BenchmarkId::new("lex:keep-all", name), |b| {
            let mut lexer = syntax::lexer().keeping(syntax::DEFAULT_DISCARD);
            b.iter(|| black_box(lexer.lex(black_box(sample))).unwrap());
        });
    }

    group.finish();
}
