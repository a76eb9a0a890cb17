use crate::{constants::Weight, graph::Vertex};

/// Straight line distance between two vertices, rounded to the nearest integer
pub fn euclidean_distance(src: &Vertex, dst: &Vertex) -> Weight {
    let dx = (src.x as f64) - (dst.x as f64);
    let dy = (src.y as f64) - (dst.y as f64);

    dx.hypot(dy).round() as Weight
}
