use criterion::{Criterion, criterion_group, criterion_main};
use indent_guides_engine::{TabSize, TextBuffer, compute_all, compute_range};
use xi_rope::Rope;
mod common;

fn bench_full_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    group.sample_size(10);

    let tab_size = TabSize::default();
    let rope = Rope::from(common::generate_source(1_000));
    group.bench_function("compute_all_rope", |b| {
        b.iter(|| {
            let levels = compute_all(std::hint::black_box(&rope), tab_size);
            std::hint::black_box(levels)
        });
    });

    let lines: Vec<String> = common::generate_nested_source(200, 6)
        .lines()
        .map(str::to_string)
        .collect();
    group.bench_function("compute_all_lines", |b| {
        b.iter(|| {
            let levels = compute_all(std::hint::black_box(&lines), tab_size);
            std::hint::black_box(levels)
        });
    });

    group.finish();
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_viewport");

    let tab_size = TabSize::default();
    let rope = Rope::from(common::generate_source(5_000));
    let middle = rope.line_count() / 2;
    group.bench_function("sixty_lines", |b| {
        b.iter(|| {
            let levels = compute_range(&rope, middle, middle + 59, tab_size);
            std::hint::black_box(levels)
        });
    });

    let blank = Rope::from(common::generate_blank_buffer(20_000));
    group.bench_function("blank_buffer_window", |b| {
        b.iter(|| {
            let levels = compute_range(&blank, 10_000, 10_059, tab_size);
            std::hint::black_box(levels)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_buffer, bench_viewport);
criterion_main!(benches);
