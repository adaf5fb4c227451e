//! The directed labeled graph.

pub use error::Err;
pub use graph::{Edges, EndPoint, Graph, Vertices};
pub use info::GraphInfo;
pub use vertex::Vertex;

pub mod error;

mod display;
mod graph;
mod info;
mod vertex;
