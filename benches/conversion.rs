//! Benchmarks for radix conversion

extern crate criterion;
extern crate bigradix;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bigradix::{Backend, Converter, Glyph, NumeralSystem};

criterion_main!(
    conversion,
    tokenization,
);

criterion_group!(
    name = conversion;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(300);
    targets =
        replacement_benchmarks,
        arithmetic_benchmarks,
        long_division_benchmarks,
        fraction_benchmarks,
);

criterion_group!(
    name = tokenization;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        splitter_benchmarks,
);


const SEED: u128 = 0x8A5C_D789_635D_2E23;


fn random_number<S: Glyph>(
    rng: &mut oorandom::Rand64,
    system: &NumeralSystem<S>,
    digit_count: usize,
) -> String {
    let radix = system.radix();
    let mut digits = Vec::with_capacity(digit_count);
    digits.push(rng.rand_range(1..radix));
    for _ in 1..digit_count {
        digits.push(rng.rand_range(0..radix));
    }
    system.render(&digits).unwrap()
}

fn random_numbers<S: Glyph>(
    system: &NumeralSystem<S>,
    digit_count: usize,
    count: usize,
) -> Vec<String> {
    let mut rng = oorandom::Rand64::new(SEED);
    (0..count)
        .map(|_| random_number(&mut rng, system, digit_count))
        .collect()
}

fn bench_convert(name: &str, c: &mut Criterion, converter: &Converter<char>, inputs: &[String]) {
    let mut iter_count = 0;
    c.bench_function(
        name,
        |b| b.iter_batched(
            || {
                iter_count += 1;
                &inputs[iter_count % inputs.len()]
            },
            |input| {
                black_box(converter.convert(input).unwrap());
            },
            criterion::BatchSize::SmallInput));
}


fn replacement_benchmarks(c: &mut Criterion) {
    let hex = NumeralSystem::standard(16).unwrap();
    let bits = NumeralSystem::standard(2).unwrap();
    let inputs = random_numbers(&hex, 1000, 32);

    let converter = Converter::new(hex, bits);
    bench_convert("replace-hex-to-binary-1000", c, &converter, &inputs);
}

fn arithmetic_benchmarks(c: &mut Criterion) {
    let dec = NumeralSystem::standard(10).unwrap();
    let base36 = NumeralSystem::standard(36).unwrap();
    let inputs = random_numbers(&dec, 500, 32);

    let converter = Converter::new(dec.clone(), base36.clone());
    bench_convert("decimal-default-500", c, &converter, &inputs);

    let converter = Converter::new(dec, base36).with_backend(Some(Backend::Chunked));
    bench_convert("decimal-chunked-500", c, &converter, &inputs);
}

fn long_division_benchmarks(c: &mut Criterion) {
    let dec = NumeralSystem::standard(10).unwrap();
    let base7 = NumeralSystem::standard(7).unwrap();
    let inputs = random_numbers(&dec, 200, 32);

    let converter = Converter::new(dec, base7).with_backend(None);
    bench_convert("direct-decimal-to-base7-200", c, &converter, &inputs);
}

fn fraction_benchmarks(c: &mut Criterion) {
    let bits = NumeralSystem::standard(2).unwrap();
    let dec = NumeralSystem::standard(10).unwrap();

    let mut rng = oorandom::Rand64::new(SEED);
    let inputs: Vec<String> = (0..32)
        .map(|_| {
            let mut number = String::from("0.1");
            for _ in 0..255 {
                number.push(if rng.rand_range(0..2) == 0 { '0' } else { '1' });
            }
            number
        })
        .collect();

    let converter = Converter::new(bits, dec).with_precision(100);
    bench_convert("fraction-binary-to-decimal-256", c, &converter, &inputs);
}

fn splitter_benchmarks(c: &mut Criterion) {
    let hex = NumeralSystem::standard(16).unwrap();
    let hex_inputs = random_numbers(&hex, 1000, 32);

    let mut iter_count = 0;
    c.bench_function(
        "split-hex-1000",
        |b| b.iter_batched(
            || {
                iter_count += 1;
                &hex_inputs[iter_count % hex_inputs.len()]
            },
            |input| {
                black_box(hex.split_text(input).unwrap());
            },
            criterion::BatchSize::SmallInput));

    let grouped = NumeralSystem::numbered(1000).unwrap();
    let grouped_inputs = random_numbers(&grouped, 500, 32);

    let mut iter_count = 0;
    c.bench_function(
        "split-numbered-500",
        |b| b.iter_batched(
            || {
                iter_count += 1;
                &grouped_inputs[iter_count % grouped_inputs.len()]
            },
            |input| {
                black_box(grouped.split_text(input).unwrap());
            },
            criterion::BatchSize::SmallInput));
}
