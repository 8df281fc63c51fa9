use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sirenia::graph::{GraphEdge, RowGraph, SimpleLayout};
use sirenia::{LayoutIndexOrder, PrintElementGenerator};
use std::hint::black_box;
use std::time::Duration;

/// A linear history with `lanes` interleaved branches and an occasional long merge.
fn build_history(rows: usize, lanes: usize) -> (RowGraph, SimpleLayout) {
    let mut edges = Vec::new();
    for up in 0..rows {
        let lane = up % lanes;
        let down = up + lanes;
        if down < rows {
            edges.push(GraphEdge::normal(up, down));
        }
        if lane == 0 && up + 1 < rows {
            edges.push(GraphEdge::normal(up, up + 1));
        }
        if up % 97 == 0 && up + 400 < rows {
            edges.push(GraphEdge::normal(up, up + 400));
        }
        if up % 53 == 0 {
            edges.push(GraphEdge::not_load_commit(up, up));
        }
    }
    let layout_indices = (0..rows).map(|row| (row % lanes) as i32).collect();
    let heads = (0..rows).map(|row| row % lanes).collect();
    let graph = RowGraph::new(rows, edges).expect("valid history");
    let layout = SimpleLayout::new(layout_indices, heads).expect("valid layout");
    (graph, layout)
}

fn bench_print_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_elements");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("rows_2k_l4", 2_000usize, 4usize),
        ("rows_20k_l8", 20_000usize, 8usize),
        ("rows_100k_l12", 100_000usize, 12usize),
    ];

    for (name, rows, lanes) in cases {
        let (graph, layout) = build_history(rows, lanes);
        let window = (rows / 2)..(rows / 2 + 200);

        group.bench_with_input(BenchmarkId::new("cold_window", name), &graph, |b, graph| {
            b.iter_batched(
                || PrintElementGenerator::new(graph, LayoutIndexOrder::new(&layout), false),
                |generator| {
                    for row in window.clone() {
                        black_box(generator.print_elements(row).expect("row in range"));
                    }
                },
                BatchSize::SmallInput,
            )
        });

        let warm = PrintElementGenerator::new(&graph, LayoutIndexOrder::new(&layout), false);
        group.bench_function(BenchmarkId::new("warm_window", name), |b| {
            b.iter(|| {
                for row in window.clone() {
                    black_box(warm.print_elements(row).expect("row in range"));
                }
            })
        });

        group.bench_with_input(
            BenchmarkId::new("recommended_width", name),
            &graph,
            |b, graph| {
                b.iter_batched(
                    || PrintElementGenerator::new(graph, LayoutIndexOrder::new(&layout), true),
                    |generator| black_box(generator.recommended_width()),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_print_elements);
criterion_main!(benches);
