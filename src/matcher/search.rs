use super::{
    candidates::{find_candidates, refine_candidates, Candidates},
    config::MatchConfig,
    joinable::is_joinable,
    trace::TraceEvent,
    PartialMapping,
};
use crate::{
    graph::{Graph, Vertex},
    types::Mapping,
};
use log::{debug, trace};
use std::collections::HashSet;

/// Returns the first query vertex, in query graph order, not mapped yet.
pub fn next_query_vertex<'a>(query: &'a Graph, mapping: &PartialMapping) -> Option<&'a Vertex> {
    query.vertices().find(|u| !mapping.contains_key(u.id()))
}

#[derive(Default)]
struct State<'a> {
    mapping: PartialMapping<'a>,
    used: HashSet<&'a str>,
    solutions: Vec<Mapping>,
}

/// Backtracking search for the embeddings of a query graph in a data graph.
///
/// Candidates are computed once per query vertex from labels and degrees.
/// The search then maps query vertices one at a time, in query graph order,
/// and checks each candidate against the neighbors already mapped. The
/// partial mapping is extended by one entry before each recursive call and
/// that entry is removed afterwards, so every branch starts from the same
/// state. All the search state lives in the call; the graphs are only read.
///
/// ```
/// use subiso::{graph::{Graph, Vertex}, matcher::Matcher};
///
/// let mut data = Graph::new();
/// data.add_edge(Vertex::new("v1")?.with_label("A"), Vertex::new("v2")?.with_label("B"))?;
/// let mut query = Graph::new();
/// query.add_edge(Vertex::new("u1")?.with_label("A"), Vertex::new("u2")?.with_label("B"))?;
///
/// let solutions = Matcher::new(&data, &query).search();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0]["u2"], "v2");
/// # Ok::<(), subiso::graph::Err>(())
/// ```
pub struct Matcher<'a> {
    data: &'a Graph,
    query: &'a Graph,
    config: MatchConfig,
    trace: Option<Box<dyn FnMut(&TraceEvent) + 'a>>,
}

impl<'a> Matcher<'a> {
    pub fn new(data: &'a Graph, query: &'a Graph) -> Self {
        Self {
            data,
            query,
            config: MatchConfig::default(),
            trace: None,
        }
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Install a hook called at every step of the search.
    pub fn trace<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TraceEvent) + 'a,
    {
        self.trace = Some(Box::new(f));
        self
    }

    /// Find the embeddings of the query graph, in the order they are reached.
    ///
    /// Returns every embedding unless a limit is configured. An empty query
    /// or data graph has no embedding.
    pub fn search(&mut self) -> Vec<Mapping> {
        debug!(
            "searching {} query vertices in {} data vertices",
            self.query.num_vertices(),
            self.data.num_vertices()
        );
        let mode = self.config.get_join_mode();
        let candidates = match find_candidates(self.data, self.query, mode) {
            Some(candidates) => candidates,
            None => return vec![],
        };
        for (&query, c_u) in &candidates {
            self.emit(TraceEvent::Candidates {
                query,
                count: c_u.len(),
            });
        }
        let mut state = State::default();
        self.subgraph_search(&candidates, &mut state);
        debug!("found {} solutions", state.solutions.len());
        state.solutions
    }
}

// private methods.
impl<'a> Matcher<'a> {
    fn emit(&mut self, event: TraceEvent) {
        trace!("{:?}", event);
        if let Some(f) = &mut self.trace {
            f(&event);
        }
    }

    fn limit_reached(&self, state: &State) -> bool {
        self.config
            .get_limit()
            .map_or(false, |limit| state.solutions.len() >= limit)
    }

    fn subgraph_search(&mut self, candidates: &Candidates<'a>, state: &mut State<'a>) {
        if self.limit_reached(state) {
            return;
        }
        if state.mapping.len() == self.query.num_vertices() {
            let solution: Mapping = state
                .mapping
                .iter()
                .map(|(&u, &v)| (u.to_owned(), v.to_owned()))
                .collect();
            self.emit(TraceEvent::Solution(&solution));
            state.solutions.push(solution);
            return;
        }
        let query = self.query;
        let u = match next_query_vertex(query, &state.mapping) {
            Some(u) => u,
            None => return,
        };
        self.emit(TraceEvent::Select {
            query: u.id(),
            depth: state.mapping.len(),
        });
        let mode = self.config.get_join_mode();
        let c_u = match candidates.get(u.id()) {
            Some(c_u) => refine_candidates(self.data, query, c_u, u, &state.used, mode),
            None => return,
        };
        for v in c_u {
            if self.limit_reached(state) {
                break;
            }
            self.emit(TraceEvent::Try {
                query: u.id(),
                data: v.id(),
            });
            if !is_joinable(self.data, query, u, v, &state.mapping, mode) {
                continue;
            }
            state.mapping.insert(u.id(), v.id());
            state.used.insert(v.id());
            self.emit(TraceEvent::Extend {
                query: u.id(),
                data: v.id(),
            });
            self.subgraph_search(candidates, state);
            state.mapping.remove(u.id());
            state.used.remove(v.id());
            self.emit(TraceEvent::Undo {
                query: u.id(),
                data: v.id(),
            });
        }
    }
}

impl<'a> std::fmt::Debug for Matcher<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matcher {{ config: {:?} }}", self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::JoinMode;

    fn vertex(vid: &str, label: &str) -> Vertex {
        Vertex::new(vid).unwrap().with_label(label)
    }

    fn create_query() -> Graph {
        let mut q = Graph::new();
        q.add_edge(vertex("u1", "A"), vertex("u2", "B")).unwrap();
        q.add_edge("u1", vertex("u3", "C")).unwrap();
        q
    }

    fn solution(pairs: &[(&str, &str)]) -> Mapping {
        pairs
            .iter()
            .map(|&(u, v)| (u.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn test_next_query_vertex() {
        let mut q = Graph::new();
        q.add_edge(Vertex::new("u1").unwrap(), Vertex::new("u2").unwrap())
            .unwrap();
        q.add_edge("u1", Vertex::new("u3").unwrap()).unwrap();
        let mut m = PartialMapping::new();
        for &expected in &["u1", "u2", "u3"] {
            let u = next_query_vertex(&q, &m).unwrap();
            assert_eq!(u.id(), expected);
            m.insert(u.id(), "label");
        }
        assert!(next_query_vertex(&q, &m).is_none());
    }

    #[test]
    fn test_one_solution() {
        let q = create_query();
        let mut g = Graph::new();
        g.add_edge(vertex("v1", "A"), vertex("v2", "B")).unwrap();
        g.add_edge("v1", vertex("v3", "C")).unwrap();
        assert_eq!(
            Matcher::new(&g, &q).search(),
            vec![solution(&[("u1", "v1"), ("u2", "v2"), ("u3", "v3")])]
        );
    }

    #[test]
    fn test_reversed_edge_is_not_a_solution() {
        let q = create_query();
        let mut g = Graph::new();
        g.add_edge(vertex("v2", "B"), vertex("v1", "A")).unwrap();
        g.add_edge("v1", vertex("v3", "C")).unwrap();
        assert!(Matcher::new(&g, &q).search().is_empty());
        let connected = MatchConfig::new().join_mode(JoinMode::Connected);
        assert_eq!(
            Matcher::new(&g, &q).config(connected).search(),
            vec![solution(&[("u1", "v1"), ("u2", "v2"), ("u3", "v3")])]
        );
    }

    #[test]
    fn test_opposite_edges_onto_one_edge() {
        let mut g = Graph::new();
        g.add_edge(vertex("v1", "A"), vertex("v2", "A")).unwrap();
        let mut q = Graph::new();
        q.add_bidirectional_edge(vertex("u1", "A"), vertex("u2", "A"))
            .unwrap();
        assert!(Matcher::new(&g, &q).search().is_empty());
        let connected = MatchConfig::new().join_mode(JoinMode::Connected);
        assert_eq!(
            Matcher::new(&g, &q).config(connected).search(),
            vec![
                solution(&[("u1", "v1"), ("u2", "v2")]),
                solution(&[("u1", "v2"), ("u2", "v1")])
            ]
        );
    }

    #[test]
    fn test_limit() {
        let q = create_query();
        let mut g = Graph::new();
        g.add_edge(vertex("v1", "A"), vertex("v2", "B")).unwrap();
        g.add_edge("v1", vertex("v3", "C")).unwrap();
        g.add_edge(vertex("v4", "A"), "v3").unwrap();
        g.add_edge("v4", vertex("v5", "B")).unwrap();
        assert_eq!(Matcher::new(&g, &q).search().len(), 2);
        let solutions = Matcher::new(&g, &q)
            .config(MatchConfig::new().limit(1))
            .search();
        assert_eq!(
            solutions,
            vec![solution(&[("u1", "v1"), ("u2", "v2"), ("u3", "v3")])]
        );
        assert!(Matcher::new(&g, &q)
            .config(MatchConfig::new().limit(0))
            .search()
            .is_empty());
    }

    #[test]
    fn test_trace() {
        let q = create_query();
        let mut g = Graph::new();
        g.add_edge(vertex("v1", "A"), vertex("v2", "B")).unwrap();
        g.add_edge("v1", vertex("v3", "C")).unwrap();
        g.add_edge("v1", vertex("v4", "B")).unwrap();
        let mut extends = 0;
        let mut undos = 0;
        let mut found = vec![];
        let mut counts = vec![];
        let solutions = Matcher::new(&g, &q)
            .trace(|event| match event {
                TraceEvent::Candidates { query, count } => {
                    counts.push((query.to_string(), *count))
                }
                TraceEvent::Extend { .. } => extends += 1,
                TraceEvent::Undo { .. } => undos += 1,
                TraceEvent::Solution(m) => found.push((*m).clone()),
                _ => {}
            })
            .search();
        assert_eq!(solutions.len(), 2);
        assert_eq!(found, solutions);
        assert_eq!(extends, undos);
        assert_eq!(
            counts,
            vec![
                ("u1".to_string(), 1),
                ("u2".to_string(), 2),
                ("u3".to_string(), 1)
            ]
        );
    }
}
