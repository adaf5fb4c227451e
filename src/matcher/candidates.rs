use super::config::JoinMode;
use crate::graph::{Graph, Vertex};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashSet;

/// Candidate data vertices of each query vertex, in query vertex order.
pub type Candidates<'a> = IndexMap<&'a str, Vec<&'a Vertex>>;

/// Returns the data vertices sharing a label with `u` whose degree is at
/// least `u`'s degree, in data graph order. Degrees are counted the way
/// [`JoinMode::degree`](enum.JoinMode.html#method.degree) does for `mode`.
pub fn filter_candidates<'a>(
    data: &'a Graph,
    query: &Graph,
    u: &Vertex,
    mode: JoinMode,
) -> Vec<&'a Vertex> {
    let degree = mode.degree(query, u);
    data.vertices()
        .filter(|v| v.has_any_label(u.labels()) && mode.degree(data, v) >= degree)
        .collect()
}

/// Computes the candidates of every query vertex.
///
/// Returns `None` as soon as a query vertex has no candidate, since no
/// embedding can exist then. Both graphs being non-empty is required too.
pub fn find_candidates<'a>(
    data: &'a Graph,
    query: &'a Graph,
    mode: JoinMode,
) -> Option<Candidates<'a>> {
    if data.is_empty() || query.is_empty() {
        return None;
    }
    let mut candidates = IndexMap::with_capacity(query.num_vertices());
    for u in query.vertices() {
        let c_u = filter_candidates(data, query, u, mode);
        if c_u.is_empty() {
            debug!("no candidate for {}", u);
            return None;
        }
        candidates.insert(u.id(), c_u);
    }
    Some(candidates)
}

/// Drops the candidates already used as an image and those whose degree is
/// below `u`'s.
pub fn refine_candidates<'a>(
    data: &Graph,
    query: &Graph,
    candidates: &[&'a Vertex],
    u: &Vertex,
    used: &HashSet<&str>,
    mode: JoinMode,
) -> Vec<&'a Vertex> {
    let degree = mode.degree(query, u);
    candidates
        .iter()
        .copied()
        .filter(|v| mode.degree(data, v) >= degree && !used.contains(v.id()))
        .collect()
}
