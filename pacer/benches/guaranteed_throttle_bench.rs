// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use pacer::{GuaranteedThrottle, Invocation};
use pacer_test_utils::ManualRuntime;
use std::hint::black_box;
use std::time::Duration;

pub fn bench_guaranteed_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("guaranteed_throttle_overhead");
    let call_spacings = [Duration::from_millis(10), Duration::from_millis(100)];

    for &spacing in &call_spacings {
        group.throughput(Throughput::Elements(100));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", spacing)),
            &spacing,
            |bencher, &spacing| {
                bencher.iter(|| {
                    let runtime = ManualRuntime::new();
                    let wrapper = GuaranteedThrottle::new(
                        |invocation: Invocation<(), u32>| {
                            black_box(invocation);
                        },
                        Duration::from_millis(300),
                        Duration::from_millis(1000),
                        runtime.clone(),
                        runtime.clone(),
                    );

                    for i in 0..100 {
                        black_box(wrapper.call_args([i]));
                        runtime.advance(spacing);
                    }
                });
            },
        );
    }

    group.finish();
}
