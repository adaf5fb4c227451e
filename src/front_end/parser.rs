use super::{
    ast::{Ast, VertexDecl},
    error::Result,
};
use crate::types::VId;
use itertools::Itertools;
use pest::Parser;
use pest_derive::Parser;

pub type GraphRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct GraphParser;

/// Parse a graph description.
///
/// ```text
/// (graph (vertices (v1 A) (v2 B C #2) (v3))
///        (arcs (v1 v2) (v1 v3))
///        (edges (v2 v3)))
/// ```
///
/// `arcs` are directed edges and `edges` are bidirectional ones. A vertex
/// is its id followed by any number of labels and an optional `#number`.
pub fn parse(input: &str) -> Result<Ast> {
    let mut ast = Ast::default();
    for pair in GraphParser::parse(Rule::graph, input)? {
        match pair.as_rule() {
            Rule::vertices_stat => {
                ast.set_vertices(parse_vertices_stat(pair)?);
            }
            Rule::arcs_stat => {
                ast.set_arcs(parse_arcs_or_edges_stat(pair));
            }
            Rule::edges_stat => {
                ast.set_edges(parse_arcs_or_edges_stat(pair));
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(ast)
}

fn custom_error(pair: &pest::iterators::Pair<Rule>, message: &str) -> pest::error::Error<GraphRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: String::from(message),
        },
        pair.as_span(),
    )
}

fn parse_vertex(pair: pest::iterators::Pair<Rule>) -> Result<VertexDecl> {
    let mut vid = None;
    let mut labels = vec![];
    let mut number = None;
    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::name if vid.is_none() => vid = Some(String::from(item.as_str())),
            Rule::name => labels.push(String::from(item.as_str())),
            Rule::number => {
                number = Some(
                    item.as_str()
                        .parse()
                        .map_err(|_| custom_error(&item, "number out of range"))?,
                )
            }
            _ => unreachable!(),
        }
    }
    Ok(VertexDecl::new(vid.unwrap_or_default(), labels, number))
}

fn parse_vertices_stat(pair: pest::iterators::Pair<Rule>) -> Result<Vec<VertexDecl>> {
    pair.into_inner().map(parse_vertex).collect()
}

fn parse_arcs_or_edges_stat(pair: pest::iterators::Pair<Rule>) -> Vec<(VId, VId)> {
    let mut links = vec![];
    for (src, dst) in pair.into_inner().tuples() {
        match (src.as_rule(), dst.as_rule()) {
            (Rule::name, Rule::name) => {
                links.push((String::from(src.as_str()), String::from(dst.as_str())));
            }
            _ => unreachable!(),
        }
    }
    links
}
