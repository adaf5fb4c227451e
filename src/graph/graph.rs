use super::{
    error::{Err, Result},
    vertex::Vertex,
};
use crate::{
    matcher::Matcher,
    types::{Mapping, VId, VLabel},
};
use derive_more::From;
use indexmap::IndexMap;
use itertools::Itertools;

/// One end of an edge passed to [`Graph::add_edge`](struct.Graph.html#method.add_edge).
///
/// Either the id of a vertex already in the graph or a vertex to insert.
#[derive(Debug, From)]
pub enum EndPoint {
    Id(VId),
    Vertex(Vertex),
}

impl From<&str> for EndPoint {
    fn from(id: &str) -> Self {
        EndPoint::Id(id.to_owned())
    }
}

impl From<&String> for EndPoint {
    fn from(id: &String) -> Self {
        EndPoint::Id(id.clone())
    }
}

#[derive(Debug, Clone)]
struct GraphNode {
    vertex: Vertex,
    successors: Vec<VId>,
    predecessors: Vec<VId>,
}

impl GraphNode {
    fn new(vertex: Vertex) -> Self {
        Self {
            vertex,
            successors: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    fn has_successor(&self, vid: &str) -> bool {
        self.successors.iter().any(|s| s == vid)
    }
}

/// An iterator over the vertices of a graph, in insertion order.
pub struct Vertices<'a> {
    nodes: indexmap::map::Values<'a, VId, GraphNode>,
}

impl<'a> Iterator for Vertices<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<'a> ExactSizeIterator for Vertices<'a> {}

/// An iterator over the directed edges of a graph.
///
/// Edges are produced source by source, in vertex insertion order, and for a
/// given source in the order the edges were added.
pub struct Edges<'a> {
    graph: &'a Graph,
    nodes: indexmap::map::Values<'a, VId, GraphNode>,
    current: Option<(&'a Vertex, std::slice::Iter<'a, VId>)>,
}

impl<'a> Iterator for Edges<'a> {
    type Item = (&'a Vertex, &'a Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((src, dsts)) = &mut self.current {
                if let Some(dst) = dsts.next() {
                    return Some((*src, &self.graph.nodes[dst.as_str()].vertex));
                }
            }
            let node = self.nodes.next()?;
            self.current = Some((&node.vertex, node.successors.iter()));
        }
    }
}

/// A directed graph of labeled vertices.
///
/// Vertices are kept in insertion order, which is also the order every
/// iterator of the graph follows. Each vertex keeps both its successor and
/// its predecessor list, and its degree is the sum of the two.
/// Parallel edges are not supported: adding an existing edge is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<VId, GraphNode>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `vertex` unless a vertex with the same id exists.
    ///
    /// Returns the vertex stored in the graph, which is the existing one when
    /// the id was already taken.
    pub fn add_vertex(&mut self, vertex: Vertex) -> &Vertex {
        let node = self
            .nodes
            .entry(vertex.id().to_owned())
            .or_insert_with(|| GraphNode::new(vertex));
        &node.vertex
    }

    /// Add the directed edge `u -> v`.
    ///
    /// Both ends are either ids of existing vertices or new vertices, which are
    /// inserted first. Fails without touching the graph if an id is unknown.
    pub fn add_edge<U, V>(&mut self, u: U, v: V) -> Result<()>
    where
        U: Into<EndPoint>,
        V: Into<EndPoint>,
    {
        self.insert_edge(u.into(), v.into(), false)
    }

    /// Add both `u -> v` and `v -> u`.
    ///
    /// Same as two [`add_edge`](#method.add_edge) calls, so each endpoint's
    /// degree grows by 2 when neither direction existed before.
    pub fn add_bidirectional_edge<U, V>(&mut self, u: U, v: V) -> Result<()>
    where
        U: Into<EndPoint>,
        V: Into<EndPoint>,
    {
        self.insert_edge(u.into(), v.into(), true)
    }

    /// Remove the edge `u -> v`. The reverse edge is left alone.
    ///
    /// Returns false if either vertex or the edge does not exist.
    pub fn delete_edge(&mut self, u: &str, v: &str) -> bool {
        if !self.nodes.contains_key(v) {
            return false;
        }
        let pos = match self
            .nodes
            .get(u)
            .and_then(|node| node.successors.iter().position(|s| s == v))
        {
            Some(pos) => pos,
            None => return false,
        };
        let u_node = &mut self.nodes[u];
        u_node.successors.remove(pos);
        u_node.vertex.dec_degree();
        let v_node = &mut self.nodes[v];
        if let Some(pos) = v_node.predecessors.iter().position(|p| p == u) {
            v_node.predecessors.remove(pos);
        }
        v_node.vertex.dec_degree();
        true
    }

    /// Remove the vertex `vid` together with every edge into or out of it.
    pub fn delete_vertex(&mut self, vid: &str) -> Option<Vertex> {
        let node = self.nodes.get(vid)?;
        let successors = node.successors.clone();
        let predecessors = node.predecessors.clone();
        for s in &successors {
            self.delete_edge(vid, s);
        }
        for p in &predecessors {
            self.delete_edge(p, vid);
        }
        self.nodes.shift_remove(vid).map(|node| node.vertex)
    }

    /// Returns true if the edge `u -> v` exists.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.nodes.contains_key(v)
            && self
                .nodes
                .get(u)
                .map_or(false, |node| node.has_successor(v))
    }

    /// Add `label` to the vertex `vid`.
    pub fn add_label<L: Into<VLabel>>(&mut self, vid: &str, label: L) -> Result<()> {
        match self.nodes.get_mut(vid) {
            Some(node) => {
                node.vertex.insert_label(label.into());
                Ok(())
            }
            None => Err(Err::VertexNotFound(vid.to_owned())),
        }
    }

    pub fn vertex(&self, vid: &str) -> Option<&Vertex> {
        self.nodes.get(vid).map(|node| &node.vertex)
    }

    pub fn contains_vertex(&self, vid: &str) -> bool {
        self.nodes.contains_key(vid)
    }

    pub fn vertices(&self) -> Vertices {
        Vertices {
            nodes: self.nodes.values(),
        }
    }

    pub fn edges(&self) -> Edges {
        Edges {
            graph: self,
            nodes: self.nodes.values(),
            current: None,
        }
    }

    /// Targets of the edges leaving `vid`.
    pub fn successors(&self, vid: &str) -> Option<&[VId]> {
        self.nodes.get(vid).map(|node| node.successors.as_slice())
    }

    /// Sources of the edges entering `vid`.
    pub fn predecessors(&self, vid: &str) -> Option<&[VId]> {
        self.nodes.get(vid).map(|node| node.predecessors.as_slice())
    }

    /// Vertices adjacent to `vid` in either direction, each listed once.
    pub fn neighbors(&self, vid: &str) -> Option<Vec<&str>> {
        self.nodes.get(vid).map(|node| {
            node.successors
                .iter()
                .chain(node.predecessors.iter())
                .map(String::as_str)
                .unique()
                .collect()
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.nodes.values().map(|node| node.successors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every label of every vertex, in vertex order. Duplicates are kept.
    pub fn labels(&self) -> Vec<&str> {
        self.vertices()
            .flat_map(|v| v.labels().iter().map(String::as_str))
            .collect()
    }

    /// The first vertex carrying `label`.
    pub fn find_vertex_with_label(&self, label: &str) -> Option<&Vertex> {
        self.vertices().find(|v| v.has_label(label))
    }

    /// Returns true if the first vertex labeled `start` has an edge to the
    /// first vertex labeled `end`.
    pub fn has_edge_between_labels(&self, start: &str, end: &str) -> bool {
        match (
            self.find_vertex_with_label(start),
            self.find_vertex_with_label(end),
        ) {
            (Some(u), Some(v)) => self.has_edge(u.id(), v.id()),
            _ => false,
        }
    }

    /// The first vertex whose [`name`](struct.Vertex.html#method.name) is `name`.
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices().find(|v| v.name() == name)
    }

    /// Find every embedding of `query` in this graph.
    ///
    /// Shorthand for `Matcher::new(self, query).search()`.
    pub fn search(&self, query: &Graph) -> Vec<Mapping> {
        Matcher::new(self, query).search()
    }
}

// private methods.
impl Graph {
    fn check_endpoint(&self, end: &EndPoint) -> Result<()> {
        match end {
            EndPoint::Id(vid) if !self.nodes.contains_key(vid) => {
                Err(Err::VertexNotFound(vid.clone()))
            }
            _ => Ok(()),
        }
    }

    fn insert_endpoint(&mut self, end: EndPoint) -> VId {
        match end {
            EndPoint::Id(vid) => vid,
            EndPoint::Vertex(vertex) => self.add_vertex(vertex).id().to_owned(),
        }
    }

    fn insert_edge(&mut self, u: EndPoint, v: EndPoint, bidirectional: bool) -> Result<()> {
        self.check_endpoint(&u)?;
        self.check_endpoint(&v)?;
        let u = self.insert_endpoint(u);
        let v = self.insert_endpoint(v);
        self.insert_arc(&u, &v);
        if bidirectional {
            self.insert_arc(&v, &u);
        }
        Ok(())
    }

    fn insert_arc(&mut self, u: &str, v: &str) -> bool {
        if self.nodes[u].has_successor(v) {
            return false;
        }
        let u_node = &mut self.nodes[u];
        u_node.successors.push(v.to_owned());
        u_node.vertex.inc_degree();
        let v_node = &mut self.nodes[v];
        v_node.predecessors.push(u.to_owned());
        v_node.vertex.inc_degree();
        true
    }
}
