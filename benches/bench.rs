use criterion::{criterion_group, criterion_main};

mod personal_number_benchmark {
    use criterion::{black_box, Criterion};
    use sds_swedish_ids::{FixedClock, ParseOptions, PersonalNumber};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let inputs = vec![
            "640823-3234",
            "196408233234",
            "640823+3234",
            "701063-2391",
            "850709-9805",
            // invalid
            "640823-3235",
            "990431-1231",
            "not a number",
        ];
        let options = ParseOptions::default();
        let clock = FixedClock::from_ymd(2024, 6, 1).unwrap();
        c.bench_function("personal-number-parse", |b| {
            b.iter(|| {
                for input in inputs.iter() {
                    let _ = PersonalNumber::parse_with_clock(black_box(input), &options, &clock);
                }
            })
        });
    }
}

mod organization_number_benchmark {
    use criterion::{black_box, Criterion};
    use sds_swedish_ids::OrganizationNumber;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let inputs = vec![
            "556016-0680",
            "5561034249",
            "16556103-4249",
            "121212121212",
            "556016-0681",
        ];
        c.bench_function("organization-number-parse", |b| {
            b.iter(|| {
                for input in inputs.iter() {
                    let _ = OrganizationNumber::parse(black_box(input));
                }
            })
        });
    }
}

mod luhn_checksum_benchmark {
    use criterion::{black_box, Criterion};
    use sds_swedish_ids::{luhn_valid, LuhnChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let numbers = vec![
            "6408233234",
            "8507099805",
            "5560160680",
            "5561034249",
            "4111111111111111",
        ];
        c.bench_function("luhn-checksum", |b| {
            b.iter(|| {
                for number in numbers.iter() {
                    luhn_valid(black_box(number.as_bytes()));
                }
            })
        });
        c.bench_function("luhn-checksum-free-text", |b| {
            b.iter(|| {
                for number in numbers.iter() {
                    LuhnChecksum.is_valid_match(black_box(number));
                }
            })
        });
    }
}

criterion_group!(
    benches,
    personal_number_benchmark::criterion_benchmark,
    organization_number_benchmark::criterion_benchmark,
    luhn_checksum_benchmark::criterion_benchmark
);
criterion_main!(benches);
