use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sp_core::{
    graph::{node_index, Graph, GraphBuilder},
    search::{bidir_dijkstra::BidirDijkstra, dijkstra::Dijkstra},
};

criterion_group!(benches, dijkstra_vs_bidir);
criterion_main!(benches);

/// Square grid with `size * size` vertices, spaced 10 units apart, where
/// neighboring vertices are connected in both directions
fn grid_graph(size: usize) -> Graph {
    let mut g = GraphBuilder::new(size * size).unwrap();
    let mut rng = StdRng::seed_from_u64(20220404);

    for row in 0..size {
        for col in 0..size {
            // Jitter coordinates so edge weights differ
            let x = (col * 10) as i32 + rng.gen_range(-3..=3);
            let y = (row * 10) as i32 + rng.gen_range(-3..=3);
            g.add_vertex(row * size + col, x, y).unwrap();
        }
    }

    for row in 0..size {
        for col in 0..size {
            let id = row * size + col;
            if col + 1 < size {
                g.add_edge(id, id + 1).unwrap();
                g.add_edge(id + 1, id).unwrap();
            }
            if row + 1 < size {
                g.add_edge(id, id + size).unwrap();
                g.add_edge(id + size, id).unwrap();
            }
        }
    }

    g.build().unwrap()
}

pub fn dijkstra_vs_bidir(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_vs_bidir");

    for size in [10, 50, 100].iter() {
        let g = grid_graph(*size);
        let source = node_index(0);
        let target = node_index(size * size / 2 + size / 2);

        group.bench_with_input(BenchmarkId::new("dijkstra", size), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.search(source, target).unwrap());
            })
        });
        group.bench_with_input(BenchmarkId::new("bidir_dijkstra", size), &g, |b, g| {
            b.iter(|| {
                let mut bidir = BidirDijkstra::new(g);
                black_box(bidir.search(source, target).unwrap());
            })
        });
    }
    group.finish();
}
