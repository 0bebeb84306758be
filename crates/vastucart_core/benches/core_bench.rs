use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vastucart_core::{
    BirthDate, LetterSystem, MasterPolicy, life_path_number, name_number, reduce_with_steps,
};

fn reduce_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.bench_function("reduce_with_steps_all", |b| {
        b.iter(|| reduce_with_steps(black_box(987_654_321), MasterPolicy::All))
    });
    group.finish();
}

fn name_bench(c: &mut Criterion) {
    let name = "Aarav Kumar Sharma";

    let mut group = c.benchmark_group("name_number");
    group.bench_function("pythagorean", |b| {
        b.iter(|| name_number(black_box(name), LetterSystem::Pythagorean))
    });
    group.bench_function("chaldean", |b| {
        b.iter(|| name_number(black_box(name), LetterSystem::Chaldean))
    });
    group.finish();
}

fn life_path_bench(c: &mut Criterion) {
    let date = BirthDate::new(15, 7, 1990).unwrap();
    c.bench_function("life_path_number", |b| {
        b.iter(|| life_path_number(black_box(date), MasterPolicy::All))
    });
}

criterion_group!(benches, reduce_bench, name_bench, life_path_bench);
criterion_main!(benches);
