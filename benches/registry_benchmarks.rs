//! 注册表性能基准测试
//!
//! 测试监听器注册、移除和分发的性能

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use node_event_dispatcher::events::{NodeEvent, ScriptEventRegistry, ScriptHandle};

fn filled_registry(count: i32) -> ScriptEventRegistry {
    let mut registry = ScriptEventRegistry::new();
    for i in 0..count {
        registry.add_listener(NodeEvent::Touch, ScriptHandle::new(i), i % 16);
    }
    registry
}

fn bench_add_listener(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_listener");

    for count in [16, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(filled_registry(count)));
        });
    }

    group.finish();
}

fn bench_remove_listener(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_listener");

    for count in [16, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let registry = filled_registry(count);
                    let ids: Vec<_> = registry
                        .listeners_for(NodeEvent::Touch)
                        .iter()
                        .map(|entry| entry.id)
                        .collect();
                    (registry, ids)
                },
                |(mut registry, ids)| {
                    for id in ids {
                        let _ = registry.remove_listener(NodeEvent::Touch, id);
                    }
                    black_box(registry)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let registry = filled_registry(256);

    c.bench_function("dispatch_256", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            let report = registry.dispatch(NodeEvent::Touch, |entry| {
                sum += entry.callback.raw() as i64;
                Ok(())
            });
            black_box((report, sum))
        });
    });
}

criterion_group!(
    benches,
    bench_add_listener,
    bench_remove_listener,
    bench_dispatch
);
criterion_main!(benches);
