//! Error management.

use crate::types::VId;
use derive_more::Display;

#[derive(Debug, Display, PartialEq, Clone)]
pub enum Err {
    #[display(fmt = "vertex id must not be empty")]
    EmptyVertexId,
    #[display(fmt = "vertex {} does not exist", _0)]
    VertexNotFound(VId),
}

impl std::error::Error for Err {}

pub type Result<T> = std::result::Result<T, Err>;
