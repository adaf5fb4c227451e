use super::{
    ast::{Ast, VertexDecl},
    error::{Err, Result},
};
use crate::types::VId;
use std::collections::HashSet;

fn check_vertices(vertices: &[VertexDecl]) -> Result<HashSet<&str>> {
    let mut vids = HashSet::with_capacity(vertices.len());
    for vertex in vertices {
        if !vids.insert(vertex.vid()) {
            return Err(Err::DuplicateVertex(String::from(vertex.vid())));
        }
    }
    Ok(vids)
}

fn check_links(vids: &HashSet<&str>, links: &[(VId, VId)]) -> Result<()> {
    for (src, dst) in links {
        for vid in &[src, dst] {
            if !vids.contains(vid.as_str()) {
                return Err(Err::UndeclaredVertex(String::from(vid.as_str())));
            }
        }
    }
    Ok(())
}

/// Check that vertex ids are unique and that every edge connects declared
/// vertices.
pub fn check(ast: &Ast) -> Result<()> {
    let vids = check_vertices(ast.vertices())?;
    check_links(&vids, ast.arcs())?;
    check_links(&vids, ast.edges())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_end::parse;

    #[test]
    fn test_check() {
        assert!(check(&parse("(graph (vertices (v1 A) (v2 B)) (arcs (v1 v2)))").unwrap()).is_ok());
        assert!(check(&parse("(graph (vertices (v1 A)) (arcs (v1 v1)))").unwrap()).is_ok());
        assert!(matches!(
            check(&parse("(graph (vertices (v1 A) (v1 B)))").unwrap()),
            Err(Err::DuplicateVertex(vid)) if vid == "v1"
        ));
        assert!(matches!(
            check(&parse("(graph (vertices (v1 A)) (arcs (v1 v2)))").unwrap()),
            Err(Err::UndeclaredVertex(vid)) if vid == "v2"
        ));
        assert!(matches!(
            check(&parse("(graph (vertices (v1 A)) (edges (v3 v1)))").unwrap()),
            Err(Err::UndeclaredVertex(vid)) if vid == "v3"
        ));
    }
}
