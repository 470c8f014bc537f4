use criterion::*;
use precise_arith::{gcd, BigInteger, Rational};

fn operands(digits: usize) -> (BigInteger, BigInteger) {
    let a: String = "9876543210".chars().cycle().take(digits).collect();
    let b: String = "1234567891".chars().cycle().take(digits / 2).collect();
    (a.parse().unwrap(), b.parse().unwrap())
}

pub fn integer_benchmark(c: &mut Criterion) {
    let (a, b) = operands(600);
    let text = a.to_string();

    c.bench_function("add 600 digits", |bench| bench.iter(|| black_box(&a) + black_box(&b)));
    c.bench_function("mul 600x300 digits", |bench| bench.iter(|| black_box(&a) * black_box(&b)));
    c.bench_function("div 600/300 digits", |bench| bench.iter(|| black_box(&a).div_rem(black_box(&b))));
    c.bench_function("gcd 600,300 digits", |bench| bench.iter(|| gcd(black_box(&a), black_box(&b))));
    c.bench_function("parse 600 digits", |bench| {
        bench.iter(|| black_box(&text).parse::<BigInteger>())
    });
    c.bench_function("render 600 digits", |bench| bench.iter(|| black_box(&a).to_string()));
}

pub fn rational_benchmark(c: &mut Criterion) {
    let (a, b) = operands(120);
    let x = Rational::new(a.clone(), b.clone()).unwrap();
    let y = Rational::new(b, a).unwrap();

    c.bench_function("rational add", |bench| bench.iter(|| black_box(&x) + black_box(&y)));
    c.bench_function("rational cmp", |bench| bench.iter(|| black_box(&x) < black_box(&y)));
    c.bench_function("rational decimal 50 digits", |bench| {
        bench.iter(|| black_box(&x).to_decimal_string(50))
    });
}

criterion_group!(benches, integer_benchmark, rational_benchmark);
criterion_main!(benches);
