use super::{
    ast::{Ast, VertexDecl},
    error::Result,
};
use crate::graph::{Graph, Vertex};

fn emit_vertex(decl: &VertexDecl) -> Result<Vertex> {
    let vertex = Vertex::new(decl.vid())?.with_labels(decl.labels());
    Ok(match decl.number() {
        Some(number) => vertex.with_number(number),
        None => vertex,
    })
}

/// Build the graph described by a checked `ast`.
pub fn codegen(ast: &Ast) -> Result<Graph> {
    let mut g = Graph::new();
    for decl in ast.vertices() {
        g.add_vertex(emit_vertex(decl)?);
    }
    for (src, dst) in ast.arcs() {
        g.add_edge(src, dst)?;
    }
    for (src, dst) in ast.edges() {
        g.add_bidirectional_edge(src, dst)?;
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_end::parse;

    #[test]
    fn test_codegen() {
        let g = codegen(
            &parse("(graph (vertices (v1 A) (v2 B C #2) (v3)) (arcs (v1 v2)) (edges (v2 v3)))")
                .unwrap(),
        )
        .unwrap();
        assert_eq!(
            g.vertices().map(|v| v.id()).collect::<Vec<_>>(),
            vec!["v1", "v2", "v3"]
        );
        let v2 = g.vertex("v2").unwrap();
        assert!(v2.has_label("B") && v2.has_label("C"));
        assert_eq!(v2.number(), Some(2));
        assert_eq!(v2.degree(), 3);
        assert!(g.has_edge("v1", "v2"));
        assert!(!g.has_edge("v2", "v1"));
        assert!(g.has_edge("v2", "v3"));
        assert!(g.has_edge("v3", "v2"));
        assert!(g.vertex("v3").unwrap().labels().is_empty());
    }
}
