pub mod traits;
pub mod dijkstra;
pub mod distance_map;

pub use dijkstra::Dijkstra;
pub use distance_map::{DistanceMap, Paths, SearchStats};
pub use traits::ShortestPathAlgorithm;
