use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_medium_runtime_config, apply_small_runtime_config};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sequence::{
    ArraySequence, ReferenceSequence, SequenceKernel, SequenceSecondary, TreapSequence,
    TwoStackSequence,
};

const SIZES: [usize; 4] = [1_000, 4_000, 16_000, 64_000];
const MEDIUM_RUNTIME_FROM: usize = 16_000;
const OPS_PER_SIZE: usize = 100;
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;
const WORKLOAD_WEIGHTS: &[(OpKind, u32)] = &[
    (OpKind::Get, 30),
    (OpKind::Add, 25),
    (OpKind::Remove, 25),
    (OpKind::Replace, 10),
    (OpKind::Extract, 10),
];

#[derive(Clone, Copy, Debug)]
pub enum Workload {
    /// `get`, `add` and `remove` only.
    Kernel,
    /// Kernel plus `replace_entry` and `extract`/`insert` round trips.
    Mixed,
}

#[derive(Clone, Copy)]
enum OpKind {
    Get,
    Add,
    Remove,
    Replace,
    Extract,
}

#[derive(Clone)]
enum Op {
    Get { index: usize },
    Add { index: usize, value: i64 },
    Remove { index: usize },
    Replace { index: usize, value: i64 },
    Extract { start: usize, end: usize, to: usize },
}

trait BenchSequence: SequenceSecondary<Item = i64> {
    fn with_seed(seed: u64) -> Self;
}

impl BenchSequence for ArraySequence<i64> {
    fn with_seed(_seed: u64) -> Self {
        Self::new()
    }
}

impl BenchSequence for TwoStackSequence<i64> {
    fn with_seed(_seed: u64) -> Self {
        Self::new()
    }
}

impl BenchSequence for TreapSequence<i64> {
    fn with_seed(seed: u64) -> Self {
        Self::with_seed(seed)
    }
}

impl BenchSequence for ReferenceSequence<i64> {
    fn with_seed(_seed: u64) -> Self {
        Self::new()
    }
}

pub fn bench_workload(c: &mut Criterion, workload: Workload) {
    let group_name = format!("sequence/{}", workload_label(workload));
    let mut group = c.benchmark_group(group_name);

    for &size in &SIZES {
        apply_runtime_config_for_size(size, &mut group);
        let base_seed = seed_base(workload, size as u64);
        let mut init_rng = StdRng::seed_from_u64(base_seed);
        let initial = generate_initial(size, &mut init_rng);

        bench_sequence::<ArraySequence<i64>, _>(
            &mut group, "array", size, workload, base_seed, &initial,
        );
        bench_sequence::<TwoStackSequence<i64>, _>(
            &mut group,
            "two_stack",
            size,
            workload,
            base_seed,
            &initial,
        );
        bench_sequence::<TreapSequence<i64>, _>(
            &mut group, "treap", size, workload, base_seed, &initial,
        );
        bench_sequence::<ReferenceSequence<i64>, _>(
            &mut group,
            "reference",
            size,
            workload,
            base_seed,
            &initial,
        );
    }

    group.finish();
}

fn apply_runtime_config_for_size<M: Measurement>(size: usize, group: &mut BenchmarkGroup<'_, M>) {
    if size >= MEDIUM_RUNTIME_FROM {
        apply_medium_runtime_config(group);
    } else {
        apply_small_runtime_config(group);
    }
}

fn workload_supports(workload: Workload, kind: OpKind) -> bool {
    match workload {
        Workload::Kernel => matches!(kind, OpKind::Get | OpKind::Add | OpKind::Remove),
        Workload::Mixed => true,
    }
}

fn choose_kind<R: Rng + ?Sized>(rng: &mut R, workload: Workload) -> OpKind {
    let mut total = 0_u32;
    for (kind, weight) in WORKLOAD_WEIGHTS {
        if workload_supports(workload, *kind) {
            total += *weight;
        }
    }

    let mut roll = rng.random_range(0..total);
    for (kind, weight) in WORKLOAD_WEIGHTS {
        if !workload_supports(workload, *kind) {
            continue;
        }
        if roll < *weight {
            return *kind;
        }
        roll -= *weight;
    }

    OpKind::Add
}

fn generate_initial<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i64> {
    let mut initial = Vec::with_capacity(size);
    for _ in 0..size {
        initial.push(rng.random_range(VALUE_RANGE));
    }
    initial
}

fn generate_ops(workload: Workload, size: usize, rng: &mut impl Rng) -> Vec<Op> {
    let mut len = size;
    let mut ops = Vec::with_capacity(OPS_PER_SIZE);

    for step in 0..OPS_PER_SIZE {
        let remaining = OPS_PER_SIZE - step;
        let mut kind = choose_kind(rng, workload);
        // keep the length near `size` so every iteration sees the same scale
        let delta = len as isize - size as isize;
        if delta > remaining as isize {
            kind = OpKind::Remove;
        } else if delta < -(remaining as isize) {
            kind = OpKind::Add;
        }
        if len == 0 {
            kind = OpKind::Add;
        }

        match kind {
            OpKind::Get => {
                let index = rng.random_range(0..len);
                ops.push(Op::Get { index });
            }
            OpKind::Add => {
                let index = rng.random_range(0..=len);
                let value = rng.random_range(VALUE_RANGE);
                ops.push(Op::Add { index, value });
                len += 1;
            }
            OpKind::Remove => {
                let index = rng.random_range(0..len);
                ops.push(Op::Remove { index });
                len -= 1;
            }
            OpKind::Replace => {
                let index = rng.random_range(0..len);
                let value = rng.random_range(VALUE_RANGE);
                ops.push(Op::Replace { index, value });
            }
            OpKind::Extract => {
                let start = rng.random_range(0..len);
                let end = rng.random_range(start..=len.min(start + 64));
                let to = rng.random_range(0..=len - (end - start));
                ops.push(Op::Extract { start, end, to });
            }
        }
    }

    ops
}

fn seed_base(workload: Workload, size: u64) -> u64 {
    let seed = 0x5EED_2026 ^ (size.wrapping_mul(SEED_MIX));
    let seed = seed ^ (workload_id(workload).wrapping_mul(SEED_MIX.rotate_left(31)));
    mix_seed(seed)
}

fn seed_for_iter(base: u64, iter: u64) -> u64 {
    mix_seed(base ^ iter.wrapping_mul(SEED_MIX))
}

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn workload_id(workload: Workload) -> u64 {
    match workload {
        Workload::Kernel => 1,
        Workload::Mixed => 2,
    }
}

fn bench_sequence<S, M>(
    group: &mut BenchmarkGroup<'_, M>,
    label: &str,
    size: usize,
    workload: Workload,
    base_seed: u64,
    initial: &[i64],
) where
    S: BenchSequence,
    M: Measurement<Value = Duration>,
{
    let mut seq = S::with_seed(base_seed ^ 0x00C0_FFEE);
    for &value in initial {
        let end = seq.length();
        seq.add(end, value);
    }

    group.bench_function(BenchmarkId::new(label, size), |bencher| {
        bencher.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            // Same sequence across iterations; ops are regenerated from a per-iteration seed.
            for iter in 0..iters {
                let iter_seed = seed_for_iter(base_seed, iter);
                let mut op_rng = StdRng::seed_from_u64(iter_seed);
                let ops = generate_ops(workload, seq.length(), &mut op_rng);
                let start = Instant::now();
                run_ops(&mut seq, &ops);
                black_box(seq.length());
                total += start.elapsed();
            }
            total
        })
    });
}

fn run_ops<S: SequenceSecondary<Item = i64>>(seq: &mut S, ops: &[Op]) {
    for op in ops {
        match op {
            Op::Get { index } => {
                if let Some(value) = seq.get(*index) {
                    black_box(*value);
                }
            }
            Op::Add { index, value } => {
                seq.add(*index, *value);
            }
            Op::Remove { index } => {
                black_box(seq.remove(*index));
            }
            Op::Replace { index, value } => {
                black_box(seq.replace_entry(*index, *value));
            }
            Op::Extract { start, end, to } => {
                let mut run = seq.extract(*start, *end);
                seq.insert(*to, &mut run);
            }
        }
    }
}

fn workload_label(workload: Workload) -> &'static str {
    match workload {
        Workload::Kernel => "kernel",
        Workload::Mixed => "mixed",
    }
}
