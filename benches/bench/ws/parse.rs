// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};

// workspace imports
use sectional::{parse, parse_str, syntax};

// local imports
use super::{GROUP, ND, samples};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("{}{}parse", GROUP, ND));
    group.warm_up_time(Duration::from_millis(250));
    group.measurement_time(Duration::from_secs(2));

    let samples = [
        ("small", samples::SMALL.to_owned()),
        ("nested", samples::nested(16, 3)),
    ];

    for (name, sample) in &samples {
        group.throughput(Throughput::Bytes(sample.len() as u64));

        group.bench_function(BenchmarkId::new("parse:tokens", name), |b| {
            let setup = || syntax::lexer().lex(sample).unwrap();
            b.iter_batched_ref(setup, |tokens| black_box(parse(tokens)).unwrap(), BatchSize::SmallInput);
        });

        group.bench_function(BenchmarkId::new("parse:text", name), |b| {
            b.iter(|| black_box(parse_str(black_box(sample))).unwrap());
        });
    }

    group.finish();
}
