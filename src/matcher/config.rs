use crate::graph::{Graph, Vertex};

/// How a candidate is checked against the already matched neighbors of a
/// query vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// Every query edge must map onto a data edge running the same way.
    Directed,
    /// Every query edge must map onto a data edge running either way.
    Connected,
}

impl JoinMode {
    /// The degree of `v` in `g` that candidates are pruned by.
    ///
    /// Directed matching counts every incoming and outgoing edge. When edge
    /// direction is ignored a pair of opposite edges can map onto a single
    /// data edge, so only distinct neighbors count.
    pub fn degree(self, g: &Graph, v: &Vertex) -> usize {
        match self {
            JoinMode::Directed => v.degree(),
            JoinMode::Connected => g.neighbors(v.id()).map_or(0, |n| n.len()),
        }
    }
}

impl Default for JoinMode {
    fn default() -> Self {
        JoinMode::Directed
    }
}

/// Options of one [`Matcher`](struct.Matcher.html) run.
///
/// ```
/// use subiso::matcher::{JoinMode, MatchConfig};
///
/// let config = MatchConfig::new().join_mode(JoinMode::Connected).limit(10);
/// assert_eq!(config.get_limit(), Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchConfig {
    join_mode: JoinMode,
    limit: Option<usize>,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join_mode(mut self, join_mode: JoinMode) -> Self {
        self.join_mode = join_mode;
        self
    }

    /// Stop after `limit` solutions.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn get_join_mode(&self) -> JoinMode {
        self.join_mode
    }

    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }
}
