//! Criterion benchmarks for the exhaustive solver.
//!
//! Measures solve time as the stop count grows towards the default limit, so
//! regressions in the permutation loop show up as factorial-scale slowdowns.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package nightwalk-solver-exhaustive
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nightwalk_core::test_support::{amsterdam_museums, dam_square};
use nightwalk_core::{CancellationToken, SolveRequest, Solver, Stop};
use nightwalk_solver_exhaustive::ExhaustiveSolver;

/// Stop counts to benchmark, up to the default limit.
const STOP_COUNTS: &[usize] = &[4, 6, 7, 8];

/// Museums plus synthetic stops east of the city centre when more are needed.
#[expect(
    clippy::float_arithmetic,
    reason = "synthetic stops are spaced by floating-point offsets"
)]
fn stops(count: usize) -> Vec<Stop> {
    let museums = amsterdam_museums();
    let extra = (museums.len()..count).zip(7_u64..).map(|(offset, id)| {
        let step = f64::from(u32::try_from(offset).unwrap_or(u32::MAX)) * 0.002;
        Stop::at(id, format!("Gallery {id}"), 52.365 + step, 4.905 + step)
    });
    museums.into_iter().chain(extra).take(count).collect()
}

fn bench_solve_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_time");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    let solver = ExhaustiveSolver::new();
    let cancel = CancellationToken::new();
    for &count in STOP_COUNTS {
        let request = SolveRequest {
            start: dam_square(),
            stops: stops(count),
        };
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &request, |b, request| {
            b.iter(|| solver.solve(request, &cancel));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve_times);
criterion_main!(benches);
