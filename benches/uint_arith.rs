use fixuint::primitives::{U256, U512};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn operands() -> (U512, U256) {
    let a = U512::from_limbs([
        0x0123_4567_89AB_CDEF,
        0xFEDC_BA98_7654_3210,
        u64::MAX,
        42,
        7,
        0xDEAD_BEEF,
        1 << 40,
        0x8000_0000_0000_0001,
    ]);
    let b = U256::from_limbs([0x1357_9BDF_0246_8ACE, 3, 0, 0x7FFF_FFFF]);

    (a, b)
}

pub fn bench_uint_mul(c: &mut Criterion) {
    let (a, b) = operands();

    c.bench_function("u512 wrapping_mul", |bench| {
        bench.iter(|| black_box(a).wrapping_mul(black_box(&b)))
    });
    c.bench_function("u512 widening_mul", |bench| {
        bench.iter(|| black_box(a).widening_mul(black_box(&a)))
    });
}

pub fn bench_uint_div(c: &mut Criterion) {
    let (a, b) = operands();
    let small = U256::from(1_000_000_007u64);

    c.bench_function("u512 div_rem short", |bench| {
        bench.iter(|| black_box(a).div_rem(black_box(&small)))
    });
    c.bench_function("u512 div_rem long", |bench| {
        bench.iter(|| black_box(a).div_rem(black_box(&b)))
    });
}

criterion_group!(benches, bench_uint_mul, bench_uint_div);
criterion_main!(benches);
