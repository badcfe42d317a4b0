use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::{
    ChartPoint, demo_rashi_observations, parse_navamsa_response, parse_planets_response,
};

const PLANETS: &str = include_str!("../tests/data/planets_response.json");
const NAVAMSA: &str = include_str!("../tests/data/navamsa_response.json");

fn wire_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire");
    group.bench_function("parse_planets_response", |b| {
        b.iter(|| parse_planets_response(black_box(PLANETS)))
    });
    group.bench_function("parse_navamsa_response", |b| {
        b.iter(|| parse_navamsa_response(black_box(NAVAMSA)))
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let set = demo_rashi_observations();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("chart_point_from_name", |b| {
        b.iter(|| ChartPoint::from_name(black_box("Saturn")))
    });
    group.bench_function("require_ascendant", |b| {
        b.iter(|| black_box(&set).require_ascendant().is_ok())
    });
    group.finish();
}

criterion_group!(benches, wire_bench, lookup_bench);
criterion_main!(benches);
