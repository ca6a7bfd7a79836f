use criterion::{black_box, criterion_group, criterion_main, Criterion};
use astra_core::{transform_line, History, Profile, Session};

fn generate_lines(count: usize, distinct: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("   line number {} with Mixed Case content\t", i % distinct))
        .collect()
}

fn bench_transform_line(c: &mut Criterion) {
    let profile = Profile::default().with_upper(true);
    c.bench_function("transform_line_trim_upper_1000", |b| {
        let lines = generate_lines(1000, 1000);
        b.iter(|| {
            let mut history = History::new();
            for line in &lines {
                black_box(transform_line(black_box(line), &profile, &mut history).unwrap());
            }
        })
    });

    c.bench_function("transform_line_already_normal_1000", |b| {
        let lines: Vec<String> = (0..1000).map(|i| format!("LINE {i}")).collect();
        b.iter(|| {
            let mut history = History::new();
            for line in &lines {
                black_box(transform_line(black_box(line), &profile, &mut history).unwrap());
            }
        })
    });
}

fn bench_session_dedup(c: &mut Criterion) {
    for &(name, distinct) in &[("all_unique", 10_000), ("mostly_dup", 100)] {
        let lines = generate_lines(10_000, distinct);
        c.bench_function(&format!("session_dedup_{name}_10k"), |b| {
            b.iter(|| {
                let mut session = Session::new(Profile::strict());
                for line in &lines {
                    black_box(session.transform(line.as_bytes()).unwrap());
                }
                black_box(session.close())
            })
        });
    }
}

criterion_group!(benches, bench_transform_line, bench_session_dedup);
criterion_main!(benches);
