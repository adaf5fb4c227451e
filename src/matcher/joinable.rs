use super::{config::JoinMode, PartialMapping};
use crate::graph::{Graph, Vertex};

/// Returns the images of the query vertices in `vids` that are already mapped.
fn matched_images<'m>(
    vids: &'m [String],
    mapping: &'m PartialMapping<'m>,
) -> impl Iterator<Item = &'m str> + 'm {
    vids.iter()
        .filter_map(move |n| mapping.get(n.as_str()).copied())
}

/// Returns true if mapping the query vertex `u` to the data vertex `v` agrees
/// with every matched neighbor of `u`.
///
/// With [`JoinMode::Directed`](enum.JoinMode.html), a matched successor `n`
/// of `u` requires the edge `v -> M(n)` and a matched predecessor requires
/// `M(n) -> v`. With [`JoinMode::Connected`](enum.JoinMode.html) an edge in
/// either direction is enough. A self loop on `u` always requires one on `v`.
pub fn is_joinable(
    data: &Graph,
    query: &Graph,
    u: &Vertex,
    v: &Vertex,
    mapping: &PartialMapping,
    mode: JoinMode,
) -> bool {
    if query.has_edge(u.id(), u.id()) && !data.has_edge(v.id(), v.id()) {
        return false;
    }
    if mapping.is_empty() {
        return true;
    }
    let successors = query.successors(u.id()).unwrap_or_default();
    let predecessors = query.predecessors(u.id()).unwrap_or_default();
    match mode {
        JoinMode::Directed => {
            matched_images(successors, mapping).all(|m| data.has_edge(v.id(), m))
                && matched_images(predecessors, mapping).all(|m| data.has_edge(m, v.id()))
        }
        JoinMode::Connected => matched_images(successors, mapping)
            .chain(matched_images(predecessors, mapping))
            .all(|m| data.has_edge(v.id(), m) || data.has_edge(m, v.id())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(vid: &str, label: &str) -> Vertex {
        Vertex::new(vid).unwrap().with_label(label)
    }

    fn create_graphs() -> (Graph, Graph) {
        let mut q = Graph::new();
        q.add_edge(vertex("u1", "A"), vertex("u2", "B")).unwrap();
        q.add_edge("u1", vertex("u3", "C")).unwrap();

        let mut g = Graph::new();
        g.add_edge(vertex("v1", "A"), vertex("v2", "B")).unwrap();
        g.add_edge("v1", vertex("v3", "C")).unwrap();
        g.add_edge("v3", "v2").unwrap();
        g.add_edge("v3", vertex("v4", "B")).unwrap();
        g.add_edge("v3", vertex("v5", "C")).unwrap();
        g.add_edge("v2", "v1").unwrap();
        (g, q)
    }

    fn check(g: &Graph, q: &Graph, u: &str, v: &str, m: &PartialMapping, mode: JoinMode) -> bool {
        is_joinable(g, q, q.vertex(u).unwrap(), g.vertex(v).unwrap(), m, mode)
    }

    #[test]
    fn test_empty_mapping() {
        let (g, q) = create_graphs();
        let m = PartialMapping::new();
        assert!(check(&g, &q, "u2", "v4", &m, JoinMode::Directed));
    }

    #[test]
    fn test_directed() {
        let (g, q) = create_graphs();
        let m: PartialMapping = vec![("u1", "v1")].into_iter().collect();
        // No edge between v1 and v4.
        assert!(!check(&g, &q, "u2", "v4", &m, JoinMode::Directed));
        assert!(check(&g, &q, "u2", "v2", &m, JoinMode::Directed));

        // v5 is reached from v3 only.
        assert!(!check(&g, &q, "u3", "v5", &m, JoinMode::Directed));
        assert!(check(&g, &q, "u3", "v3", &m, JoinMode::Directed));

        // u1 -> u2 needs v3 -> v1, but only v1 -> v3 exists.
        let m: PartialMapping = vec![("u2", "v1")].into_iter().collect();
        assert!(!check(&g, &q, "u1", "v3", &m, JoinMode::Directed));
        let m: PartialMapping = vec![("u2", "v2")].into_iter().collect();
        assert!(check(&g, &q, "u1", "v1", &m, JoinMode::Directed));
        assert!(check(&g, &q, "u1", "v3", &m, JoinMode::Directed));
    }

    #[test]
    fn test_connected() {
        let (g, q) = create_graphs();
        let m: PartialMapping = vec![("u2", "v1")].into_iter().collect();
        // v1 -> v3 runs against u1 -> u2, which is fine when direction is ignored.
        assert!(check(&g, &q, "u1", "v3", &m, JoinMode::Connected));
        assert!(!check(&g, &q, "u1", "v4", &m, JoinMode::Connected));
    }

    #[test]
    fn test_no_matched_neighbor() {
        let (g, q) = create_graphs();
        let m: PartialMapping = vec![("u2", "v2")].into_iter().collect();
        assert!(check(&g, &q, "u3", "v5", &m, JoinMode::Directed));
    }

    #[test]
    fn test_self_loop() {
        let mut q = Graph::new();
        q.add_vertex(vertex("u1", "A"));
        q.add_edge("u1", "u1").unwrap();
        let mut g = Graph::new();
        g.add_edge(vertex("v1", "A"), vertex("v2", "A")).unwrap();
        g.add_edge("v2", "v2").unwrap();
        let m = PartialMapping::new();
        assert!(!check(&g, &q, "u1", "v1", &m, JoinMode::Directed));
        assert!(check(&g, &q, "u1", "v2", &m, JoinMode::Directed));
        assert!(!check(&g, &q, "u1", "v1", &m, JoinMode::Connected));
    }
}
