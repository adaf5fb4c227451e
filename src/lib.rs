//! In-memory subgraph isomorphism search.
//!
//! A [`Graph`](graph/struct.Graph.html) is a directed graph of labeled
//! vertices. [`Graph::search`](graph/struct.Graph.html#method.search) finds
//! every injective mapping of a query graph into a data graph that preserves
//! labels and edges.

pub mod front_end;
pub mod graph;
pub mod matcher;
pub mod types;
