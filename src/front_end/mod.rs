//! Textual graph descriptions.

pub use ast::{Ast, VertexDecl};
pub use checker::check;
pub use codegen::codegen;
pub use error::{Err, Result};
pub use parser::parse;

pub use parser::GraphRule;

use crate::graph::Graph;
use std::path::Path;

pub mod error;

mod ast;
mod checker;
mod codegen;
mod parser;

/// Parse, check and build a graph description.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let ast = parse(input)?;
    check(&ast)?;
    codegen(&ast)
}

/// Read a graph description from the file at `path`.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    parse_graph(&std::fs::read_to_string(path)?)
}
