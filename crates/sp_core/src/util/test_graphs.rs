use crate::{
    constants::Weight,
    graph::{Graph, GraphBuilder},
};

/// Adds `a -> b` and `b -> a` with the same weight
fn link(builder: &mut GraphBuilder, a: usize, b: usize, weight: Weight) {
    builder.add_weighted_edge(a, b, weight).unwrap();
    builder.add_weighted_edge(b, a, weight).unwrap();
}

pub fn generate_complex_graph() -> Graph {
    let coords = [
        (6, 2),  // A
        (3, 3),  // B
        (4, 6),  // C
        (2, 7),  // D
        (3, 10), // E
        (2, 13), // F
        (7, 15), // G
        (5, 12), // H
        (7, 11), // I
        (5, 9),  // J
        (7, 7),  // K
    ];

    let mut graph = GraphBuilder::new(coords.len()).unwrap();
    for (id, (x, y)) in coords.iter().enumerate() {
        graph.add_vertex(id, *x, *y).unwrap();
    }

    let [a, b, c, d, e, f, g, h, i, j, k] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    link(&mut graph, a, b, 3); // A <=> B
    link(&mut graph, a, c, 5); // A <=> C
    link(&mut graph, a, k, 3); // A <=> K

    link(&mut graph, b, d, 5); // B <=> D
    link(&mut graph, b, c, 3); // B <=> C

    link(&mut graph, c, d, 2); // C <=> D
    link(&mut graph, c, j, 2); // C <=> J

    link(&mut graph, d, j, 4); // D <=> J
    link(&mut graph, d, e, 7); // D <=> E

    link(&mut graph, e, j, 3); // E <=> J
    link(&mut graph, e, f, 6); // E <=> F

    link(&mut graph, f, h, 2); // F <=> H
    link(&mut graph, f, g, 4); // F <=> G

    link(&mut graph, g, h, 3); // G <=> H
    link(&mut graph, g, i, 5); // G <=> I

    link(&mut graph, h, i, 3); // H <=> I
    link(&mut graph, h, j, 2); // H <=> J

    link(&mut graph, i, j, 4); // I <=> J
    link(&mut graph, i, k, 6); // I <=> K

    link(&mut graph, j, k, 3); // J <=> K

    graph.build().unwrap()
}

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let mut g = GraphBuilder::new(5).unwrap();

    let [a, b, c, d, e] = [0, 1, 2, 3, 4];
    for id in [a, b, c, d, e] {
        g.add_vertex(id, 0, 0).unwrap();
    }

    g.add_weighted_edge(a, c, 1).unwrap();
    g.add_weighted_edge(a, d, 1).unwrap();
    g.add_weighted_edge(e, a, 1).unwrap();
    link(&mut g, c, b, 1);
    link(&mut g, c, d, 1);

    g.build().unwrap()
}

/// Four corners of a 4x3 rectangle with directed edges along its sides.
///
/// ```text
/// 1 -> 3
/// ^    ^
/// 0 -> 2
/// ```
pub fn generate_square_graph() -> Graph {
    let mut g = GraphBuilder::new(4).unwrap();

    g.add_vertex(0, 0, 0).unwrap();
    g.add_vertex(1, 0, 3).unwrap();
    g.add_vertex(2, 4, 0).unwrap();
    g.add_vertex(3, 4, 3).unwrap();

    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 2).unwrap();
    g.add_edge(1, 3).unwrap();
    g.add_edge(2, 3).unwrap();

    g.build().unwrap()
}

pub fn generate_directed_graph() -> Graph {
    //      7 -> 8 -> 9
    //      |         |
    // 0 -> 5 -> 6 -  |
    // |         |  \ |
    // 1 -> 2 -> 3 -> 4
    let mut g = GraphBuilder::new(10).unwrap();

    for i in 0..10 {
        g.add_vertex(i, 0, 0).unwrap();
    }

    for (from, to, weight) in [
        (0, 1, 1),
        (1, 2, 1),
        (2, 3, 1),
        (3, 4, 20),
        (0, 5, 5),
        (5, 6, 1),
        (6, 4, 20),
        (6, 3, 20),
        (5, 7, 5),
        (7, 8, 1),
        (8, 9, 1),
        (9, 4, 1),
    ] {
        g.add_weighted_edge(from, to, weight).unwrap();
    }

    g.build().unwrap()
}

/// Graph with the given coordinates, connected like the Cartesian input
/// format does it: every pair listed in `links` in both directions, weighted
/// by euclidean distance.
pub fn generate_cartesian_graph(coords: &[(i32, i32)], links: &[(usize, usize)]) -> Graph {
    let mut g = GraphBuilder::new(coords.len()).unwrap();

    for (id, (x, y)) in coords.iter().enumerate() {
        g.add_vertex(id, *x, *y).unwrap();
    }

    for (a, b) in links {
        g.add_edge(*a, *b).unwrap();
        g.add_edge(*b, *a).unwrap();
    }

    g.build().unwrap()
}
