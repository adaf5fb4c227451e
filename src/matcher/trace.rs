use crate::types::Mapping;

/// A step of the search, as reported to a trace hook.
///
/// Ids are borrowed from the query and data graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// Candidate generation kept `count` data vertices for `query`.
    Candidates { query: &'a str, count: usize },
    /// `query` is the next vertex to match, `depth` vertices being matched.
    Select { query: &'a str, depth: usize },
    /// `data` is checked as the image of `query`.
    Try { query: &'a str, data: &'a str },
    /// `query` is mapped to `data` and the search goes one level deeper.
    Extend { query: &'a str, data: &'a str },
    /// The mapping of `query` to `data` is taken back.
    Undo { query: &'a str, data: &'a str },
    /// A complete embedding was found.
    Solution(&'a Mapping),
}
