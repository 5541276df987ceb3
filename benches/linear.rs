use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linear_scan_queue::{LinearScanPriorityQueue, SmallLinearScanPriorityQueue};
use std::collections::BinaryHeap;

fn bench_linear_scan(c: &mut Criterion) {
    let n = 8;
    {
        let mut group = c.benchmark_group("BinaryHeap vs LinearScan (Push 8)");
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = BinaryHeap::with_capacity(n);
                for i in 0..n {
                    h.push(black_box(i as i32));
                }
                h
            })
        });

        group.bench_function("LinearScanPriorityQueue", |b| {
            b.iter(|| {
                let mut q: LinearScanPriorityQueue<i32> = LinearScanPriorityQueue::with_capacity(n);
                for i in 0..n {
                    q.push(black_box(i as i32));
                }
                q
            })
        });

        group.bench_function("SmallLinearScanPriorityQueue<i32, 8>", |b| {
            b.iter(|| {
                let mut q: SmallLinearScanPriorityQueue<i32, 8> = SmallLinearScanPriorityQueue::new();
                for i in 0..n {
                    q.push(black_box(i as i32));
                }
                q
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs LinearScan (Push 8, Drain)");
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = BinaryHeap::with_capacity(n);
                for i in 0..n {
                    h.push(black_box((i * 7 % 5) as i32));
                }
                while let Some(x) = h.pop() {
                    black_box(x);
                }
            })
        });

        group.bench_function("SmallLinearScanPriorityQueue<i32, 8>", |b| {
            b.iter(|| {
                let mut q: SmallLinearScanPriorityQueue<i32, 8> = SmallLinearScanPriorityQueue::new();
                for i in 0..n {
                    q.push(black_box((i * 7 % 5) as i32));
                }
                while let Some(x) = q.pop() {
                    black_box(x);
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs LinearScan (Peek 64)");
        let h_std: BinaryHeap<i32> = (0..64).collect();
        let q_linear: LinearScanPriorityQueue<i32> = (0..64).collect();

        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                black_box(h_std.peek());
            })
        });

        group.bench_function("LinearScanPriorityQueue", |b| {
            b.iter(|| {
                black_box(q_linear.peek());
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_linear_scan);
criterion_main!(benches);
