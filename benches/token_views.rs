//! Token-view computation micro-benchmarks
//!
//! Measures the cost of the three-view merge and of resolution through the
//! cached merged view at various token-set sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use swatch::{Configuration, Platform, StyleRuntime, TokenView};

fn build_config(categories: usize, per_category: usize) -> Configuration {
    let mut builder = Configuration::builder(Platform::Web);
    for category in 0..categories {
        let values: Vec<(String, f64)> = (0..per_category)
            .map(|n| (format!("v{}", n), n as f64))
            .collect();
        builder = builder
            .with_tokens(&format!("cat{}", category), values)
            .expect("generated keys are valid");
    }
    builder
        .with_specific_token("$cat0.v0", 1.0)
        .expect("generated keys are valid")
        .build()
}

fn bench_view_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_views");
    for size in [10usize, 100, 1000] {
        let config = build_config(size / 10, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
            b.iter(|| {
                let runtime = StyleRuntime::new(Platform::Web);
                runtime.set_config(config.clone());
                runtime.tokens(TokenView::Merged).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_cached_resolution(c: &mut Criterion) {
    let runtime = StyleRuntime::new(Platform::Web);
    runtime.set_config(build_config(10, 10));
    runtime.tokens(TokenView::Merged).unwrap();

    c.bench_function("token_through_cache", |b| {
        b.iter(|| runtime.token("$cat5.v5").unwrap());
    });
}

criterion_group!(benches, bench_view_computation, bench_cached_resolution);
criterion_main!(benches);
