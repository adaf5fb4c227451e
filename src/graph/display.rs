use super::{graph::Graph, vertex::Vertex};

fn display_edge(src: &Vertex, dst: &Vertex, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "  \"{}\"->\"{}\";", src, dst)
}

fn display_isolated(vertex: &Vertex, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "  \"{}\";", vertex)
}

/// Render `graph` in DOT notation.
///
/// ```text
/// digraph {
///   "v1,A,"->"v2,B,";
///   "v3,C,";
/// }
/// ```
fn display(graph: &Graph, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "digraph {{")?;
    for (src, dst) in graph.edges() {
        display_edge(src, dst, f)?;
    }
    for vertex in graph.vertices().filter(|v| v.degree() == 0) {
        display_isolated(vertex, f)?;
    }
    write!(f, "}}")
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display(self, f)
    }
}
