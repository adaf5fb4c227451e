use super::graph::Graph;
use derive_more::Display;
use std::collections::BTreeSet;

#[derive(Debug, Display, PartialEq)]
#[display(fmt = "{} {} {}", num_vertices, num_edges, num_labels)]
pub struct GraphInfo {
    num_vertices: usize,
    num_edges: usize,
    num_labels: usize,
}

impl GraphInfo {
    pub fn new(num_vertices: usize, num_edges: usize, num_labels: usize) -> Self {
        Self {
            num_vertices,
            num_edges,
            num_labels,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Number of distinct labels.
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }
}

impl Graph {
    pub fn info(&self) -> GraphInfo {
        GraphInfo::new(
            self.num_vertices(),
            self.num_edges(),
            self.labels().into_iter().collect::<BTreeSet<_>>().len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    #[test]
    fn test_info() {
        let mut g = Graph::new();
        assert_eq!(g.info(), GraphInfo::new(0, 0, 0));
        g.add_bidirectional_edge(
            Vertex::new("v1").unwrap().with_label("A"),
            Vertex::new("v2").unwrap().with_labels(vec!["A", "B"]),
        )
        .unwrap();
        let info = g.info();
        assert_eq!(info, GraphInfo::new(2, 2, 2));
        assert_eq!(info.to_string(), "2 2 2");
    }
}
