use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vastucart_core::BirthDate;
use vastucart_numerology::{
    ChildNameRequest, Gender, LuckyNumberRequest, Partner, Quality,
    calculate_child_name_suggestions, calculate_love_compatibility, calculate_lucky_colors,
    calculate_lucky_numbers,
};

fn child_name_bench(c: &mut Criterion) {
    let req = ChildNameRequest::new(
        BirthDate::new(1, 4, 1985).unwrap(),
        BirthDate::new(3, 2, 1990).unwrap(),
        Gender::Boy,
    )
    .with_qualities([Quality::Leadership, Quality::Wisdom]);
    c.bench_function("child_name_suggestions", |b| {
        b.iter(|| calculate_child_name_suggestions(black_box(&req)))
    });
}

fn lucky_bench(c: &mut Criterion) {
    let req = LuckyNumberRequest::new(BirthDate::new(15, 7, 1990).unwrap()).with_name("Asha Verma");

    let mut group = c.benchmark_group("lucky");
    group.bench_function("numbers", |b| b.iter(|| calculate_lucky_numbers(black_box(&req))));
    group.bench_function("colors", |b| b.iter(|| calculate_lucky_colors(black_box(&req))));
    group.finish();
}

fn love_bench(c: &mut Criterion) {
    let a = Partner::new("Asha", BirthDate::new(15, 7, 1990).unwrap());
    let b = Partner::new("Ravi", BirthDate::new(6, 2, 1992).unwrap());
    c.bench_function("love_compatibility", |bench| {
        bench.iter(|| calculate_love_compatibility(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, child_name_bench, lucky_bench, love_bench);
criterion_main!(benches);
