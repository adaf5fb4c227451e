//! Subgraph isomorphism search.
//!
//! The search follows the generic backtracking framework of Lee et al.,
//! *An In-depth Comparison of Subgraph Isomorphism Algorithms in Graph
//! Databases* (VLDB 2013), with Ullmann-style candidate filtering.

pub use candidates::{filter_candidates, find_candidates, refine_candidates, Candidates};
pub use config::{JoinMode, MatchConfig};
pub use joinable::is_joinable;
pub use search::{next_query_vertex, Matcher};
pub use trace::TraceEvent;

use std::collections::BTreeMap;

mod candidates;
mod config;
mod joinable;
mod search;
mod trace;

/// The mapping under construction: query vertex id to data vertex id.
pub type PartialMapping<'a> = BTreeMap<&'a str, &'a str>;
