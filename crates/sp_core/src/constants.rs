/// Edge weight type
pub type Weight = u64;
/// Tentative distance of a node that has not been reached (yet)
pub const INFINITY: Weight = Weight::MAX;
/// Type of the planar coordinates of a vertex
pub type Coord = i32;
