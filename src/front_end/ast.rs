use crate::types::{VId, VLabel};

/// A vertex declaration: `(id label... #number)`.
#[derive(Debug, PartialEq, Clone)]
pub struct VertexDecl {
    vid: VId,
    labels: Vec<VLabel>,
    number: Option<u64>,
}

impl VertexDecl {
    pub fn new(vid: VId, labels: Vec<VLabel>, number: Option<u64>) -> Self {
        Self {
            vid,
            labels,
            number,
        }
    }

    pub fn vid(&self) -> &str {
        &self.vid
    }

    pub fn labels(&self) -> &[VLabel] {
        &self.labels
    }

    pub fn number(&self) -> Option<u64> {
        self.number
    }
}

#[derive(Debug, PartialEq, Default)]
pub struct Ast {
    vertices: Vec<VertexDecl>,
    arcs: Vec<(VId, VId)>,
    edges: Vec<(VId, VId)>,
}

impl Ast {
    pub fn new(vertices: Vec<VertexDecl>, arcs: Vec<(VId, VId)>, edges: Vec<(VId, VId)>) -> Self {
        Self {
            vertices,
            arcs,
            edges,
        }
    }

    pub fn set_vertices(&mut self, vertices: Vec<VertexDecl>) {
        self.vertices = vertices;
    }

    pub fn set_arcs(&mut self, arcs: Vec<(VId, VId)>) {
        self.arcs = arcs;
    }

    pub fn set_edges(&mut self, edges: Vec<(VId, VId)>) {
        self.edges = edges;
    }

    pub fn vertices(&self) -> &[VertexDecl] {
        &self.vertices
    }

    /// Directed edges.
    pub fn arcs(&self) -> &[(VId, VId)] {
        &self.arcs
    }

    /// Bidirectional edges.
    pub fn edges(&self) -> &[(VId, VId)] {
        &self.edges
    }
}
