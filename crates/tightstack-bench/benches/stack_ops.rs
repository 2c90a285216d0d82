//! Criterion micro-benchmarks for stack operations.
//!
//! Every push and pop reallocates the full buffer, so per-operation cost
//! scales with depth; the depth-suffixed benchmarks make that visible.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tightstack::ArrayStack;
use tightstack_bench::{filled_stack, values};

const SEED: u64 = 42;

/// Benchmark: one push onto a stack of fixed depth (clone + push per iter).
fn bench_push_at_depth(c: &mut Criterion) {
    for depth in [16usize, 256, 4096] {
        let base = filled_stack(depth, SEED);
        c.bench_function(&format!("push_depth_{depth}"), |b| {
            b.iter(|| {
                let mut stack = base.clone();
                stack.push(black_box(7)).unwrap();
                black_box(stack.len());
            });
        });
    }
}

/// Benchmark: one pop from a stack of fixed depth (clone + pop per iter).
fn bench_pop_at_depth(c: &mut Criterion) {
    for depth in [16usize, 256, 4096] {
        let base = filled_stack(depth, SEED);
        c.bench_function(&format!("pop_depth_{depth}"), |b| {
            b.iter(|| {
                let mut stack = base.clone();
                black_box(stack.pop().unwrap());
            });
        });
    }
}

/// Benchmark: fill an empty stack to depth N one push at a time.
///
/// Total work is quadratic in N under the exact-reallocation contract.
fn bench_fill_to_depth(c: &mut Criterion) {
    for depth in [16usize, 256] {
        let workload = values(depth, SEED);
        c.bench_function(&format!("fill_to_depth_{depth}"), |b| {
            b.iter(|| {
                let mut stack = ArrayStack::new();
                for &v in &workload {
                    stack.push(v).unwrap();
                }
                black_box(stack.len());
            });
        });
    }
}

/// Benchmark: peek on a deep stack (no reallocation, O(1) baseline).
fn bench_peek(c: &mut Criterion) {
    let stack = filled_stack(4096, SEED);
    c.bench_function("peek_depth_4096", |b| {
        b.iter(|| black_box(stack.peek()));
    });
}

/// Benchmark: deep copy of a 4096-element stack.
fn bench_clone(c: &mut Criterion) {
    let stack = filled_stack(4096, SEED);
    c.bench_function("clone_depth_4096", |b| {
        b.iter(|| black_box(stack.clone().len()));
    });
}

/// Benchmark: full forward iteration over a 4096-element stack.
fn bench_iterate(c: &mut Criterion) {
    let stack = filled_stack(4096, SEED);
    c.bench_function("iterate_depth_4096", |b| {
        b.iter(|| {
            let sum: i64 = stack.iter().map(|&v| v as i64).sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_push_at_depth,
    bench_pop_at_depth,
    bench_fill_to_depth,
    bench_peek,
    bench_clone,
    bench_iterate
);
criterion_main!(benches);
