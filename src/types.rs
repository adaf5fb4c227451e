//! Various types related to graph matching.

use std::collections::BTreeMap;

/// The vertex id type.
pub type VId = String;

/// The vertex label type.
pub type VLabel = String;

/// One embedding of a query graph: query vertex id to data vertex id.
pub type Mapping = BTreeMap<VId, VId>;
