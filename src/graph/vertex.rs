use super::error::{Err, Result};
use crate::types::{VId, VLabel};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// A labeled vertex.
///
/// The id is fixed at construction. A vertex may carry any number of labels;
/// matching only looks at the labels, while the optional number is cosmetic.
/// The degree (in-degree plus out-degree) is maintained by the owning
/// [`Graph`](struct.Graph.html) and is always 0 for a vertex outside a graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VId,
    labels: BTreeSet<VLabel>,
    number: Option<u64>,
    degree: usize,
}

impl Vertex {
    /// Create an unlabeled vertex.
    pub fn new<I: Into<VId>>(id: I) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Err::EmptyVertexId);
        }
        Ok(Self {
            id,
            labels: BTreeSet::new(),
            number: None,
            degree: 0,
        })
    }

    pub fn with_label<L: Into<VLabel>>(mut self, label: L) -> Self {
        self.labels.insert(label.into());
        self
    }

    pub fn with_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<VLabel>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn with_number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn labels(&self) -> &BTreeSet<VLabel> {
        &self.labels
    }

    pub fn number(&self) -> Option<u64> {
        self.number
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Display name: the labels followed by the number, e.g. `A1`.
    ///
    /// Falls back to the id for an unlabeled vertex.
    pub fn name(&self) -> String {
        let mut name = if self.labels.is_empty() {
            self.id.clone()
        } else {
            self.labels.iter().join("|")
        };
        if let Some(number) = self.number {
            name.push_str(&number.to_string());
        }
        name
    }

    /// Returns true if this vertex carries `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Returns true if at least one of `labels` is carried by this vertex.
    pub fn has_any_label<'l, I>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = &'l VLabel>,
    {
        labels.into_iter().any(|label| self.has_label(label))
    }
}

// pub(crate) methods.
impl Vertex {
    pub(crate) fn insert_label(&mut self, label: VLabel) {
        self.labels.insert(label);
    }

    pub(crate) fn inc_degree(&mut self) {
        self.degree += 1;
    }

    pub(crate) fn dec_degree(&mut self) {
        self.degree -= 1;
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},", self.id, self.labels.iter().join("|"))?;
        match self.number {
            Some(number) => write!(f, "{}", number),
            None => Ok(()),
        }
    }
}
