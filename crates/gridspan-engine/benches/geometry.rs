use criterion::{Criterion, criterion_group, criterion_main};
use gridspan_engine::{CellCoord, Column, Grid, GridOptions, GridSelection, normalize};

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    group.bench_function("normalize", |b| {
        b.iter(|| {
            let bounds = normalize(
                std::hint::black_box(CellCoord::new(17, 93)),
                std::hint::black_box(CellCoord::new(80, 4)),
            );
            std::hint::black_box(bounds);
        });
    });

    group.bench_function("classify_100x100_grid", |b| {
        let columns = (0..100)
            .map(|i| Column::new(format!("col{i}"), format!("Column {i}")))
            .collect();
        let mut selection = GridSelection::new(Grid::new(columns, 100), GridOptions::default());
        selection.set_origin(CellCoord::new(17, 93));
        selection.set_extent(CellCoord::new(80, 4));

        b.iter(|| {
            let selected = selection.cells().filter(|cell| cell.selected).count();
            std::hint::black_box(selected);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
