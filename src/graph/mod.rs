pub mod construction;
pub mod generator;
pub mod model;
pub mod serialization;

pub use construction::GraphLoader;
pub use generator::RandomGraphGenerator;
pub use model::{EdgeAttributes, GraphId, GraphInstance, WeightedEdge, DEFAULT_EDGE_WEIGHT};
pub use serialization::{GraphWriter, RawEdge, RawGraph, RawNode};
