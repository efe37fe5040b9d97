use closet_layout::assign::AssignmentEngine;
use closet_layout::config::CanvasConfig;
use closet_layout::ir::{Garment, GarmentType, ModuleKind, Size, StorageModule};
use closet_layout::layout::{ClosetLayout, find_best_canvas_position};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn packed_layout(count: usize) -> Vec<StorageModule> {
    let mut layout = ClosetLayout::new(CanvasConfig::default());
    for kind in ModuleKind::ALL.iter().cycle().take(count) {
        if layout.add_module(*kind).is_err() {
            break;
        }
    }
    layout.modules().to_vec()
}

fn wardrobe(count: usize) -> Vec<Garment> {
    (0..count)
        .map(|idx| {
            let garment_type = GarmentType::ALL[idx % GarmentType::ALL.len()];
            let mut garment = Garment::new(format!("g{idx}"), garment_type)
                .with_color(["black", "navy blue", "white", "red"][idx % 4]);
            if idx % 3 == 0 {
                garment = garment.with_tag("casual");
            }
            if idx % 7 == 0 {
                garment = garment.favorite();
            }
            garment
        })
        .collect()
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_fit");
    let canvas = CanvasConfig::default();
    let size = Size::new(120.0, 80.0).expect("valid size");
    for count in [0usize, 12, 36] {
        let modules = packed_layout(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &modules, |b, modules| {
            b.iter(|| find_best_canvas_position(black_box(size), black_box(modules), &canvas))
        });
    }
    group.finish();
}

fn bench_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_assign");
    let engine = AssignmentEngine::default();
    let modules = packed_layout(24);
    for count in [10usize, 100, 500] {
        let garments = wardrobe(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &garments, |b, garments| {
            b.iter(|| engine.run(black_box(garments), modules.clone()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_placement, bench_assignment);
criterion_main!(benches);
