use super::error::Result;
use crate::types::VId;
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser, Span,
};
use pest_derive::Parser;

pub type TxtRule = Rule;

#[derive(Parser)]
#[grammar = "txt/grammar.pest"]
struct TxtParser;

/// A sequence graph in CSR form.
///
/// `adjcny[offsets[v]..offsets[v + 1]]` are the out-neighbors of `v`.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    adjcny: Vec<VId>,
    labels: Vec<String>,
}

impl CsrGraph {
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjcny.len()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn adjcny(&self) -> &[VId] {
        &self.adjcny
    }

    pub fn neighbors(&self, vid: VId) -> &[VId] {
        &self.adjcny[self.offsets[vid]..self.offsets[vid + 1]]
    }

    pub fn label(&self, vid: VId) -> &str {
        &self.labels[vid]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Loads a graph written in the adjacency-list text format.
pub fn load(input: &str) -> Result<CsrGraph> {
    let mut pairs = TxtParser::parse(Rule::graph, input)?;
    let num_vertices = parse_int(pairs.next().unwrap().into_inner().next().unwrap())?;
    let mut graph = CsrGraph {
        offsets: vec![0],
        adjcny: vec![],
        labels: vec![],
    };
    for pair in pairs {
        match pair.as_rule() {
            Rule::row => {
                if graph.labels.len() == num_vertices {
                    return Err(custom_error(
                        pair.as_span(),
                        format!("more than {} vertices", num_vertices),
                    ));
                }
                load_row(&mut graph, num_vertices, pair)?;
            }
            Rule::EOI => {
                if graph.labels.len() != num_vertices {
                    return Err(custom_error(
                        pair.as_span(),
                        format!(
                            "expected {} vertices, found {}",
                            num_vertices,
                            graph.labels.len()
                        ),
                    ));
                }
            }
            _ => unreachable!(),
        }
    }
    Ok(graph)
}

fn load_row(graph: &mut CsrGraph, num_vertices: usize, pair: Pair<Rule>) -> Result<()> {
    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::int => {
                let span = item.as_span();
                let nid = parse_int(item)?;
                if nid >= num_vertices {
                    return Err(custom_error(
                        span,
                        format!("neighbor {} outside 0..{}", nid, num_vertices),
                    ));
                }
                graph.adjcny.push(nid);
            }
            Rule::label => graph.labels.push(item.as_str().to_owned()),
            _ => unreachable!(),
        }
    }
    graph.offsets.push(graph.adjcny.len());
    Ok(())
}

fn parse_int(pair: Pair<Rule>) -> Result<usize> {
    pair.as_str()
        .parse()
        .map_err(|_| custom_error(pair.as_span(), String::from("integer out of range")))
}

fn custom_error(span: Span, message: String) -> Error<Rule> {
    Error::new_from_span(ErrorVariant::CustomError { message }, span)
}
