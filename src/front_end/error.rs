//! Error management.

use super::GraphRule;
use crate::{graph, types::VId};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum Err {
    #[display(fmt = "{}", _0)]
    ParseError(pest::error::Error<GraphRule>),
    #[display(fmt = "vertex {} is declared twice", _0)]
    DuplicateVertex(VId),
    #[display(fmt = "vertex {} is not declared", _0)]
    UndeclaredVertex(VId),
    #[display(fmt = "{}", _0)]
    GraphError(graph::Err),
    #[display(fmt = "{}", _0)]
    IoError(std::io::Error),
}

impl std::error::Error for Err {}

impl From<pest::error::Error<GraphRule>> for Err {
    fn from(e: pest::error::Error<GraphRule>) -> Self {
        Err::ParseError(e)
    }
}

impl From<graph::Err> for Err {
    fn from(e: graph::Err) -> Self {
        Err::GraphError(e)
    }
}

impl From<std::io::Error> for Err {
    fn from(e: std::io::Error) -> Self {
        Err::IoError(e)
    }
}

pub type Result<T> = std::result::Result<T, Err>;
