//! Error types shared by the graph builder, the residual network and the engines.
//!
//! Degenerate requests (empty graph, unknown source or sink, `source == sink`) are
//! not errors: every engine answers them with a flow of zero.

use crate::maximum_flow::graph::Vertex;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected capacity edges, reported while the capacity graph is being built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphError {
    #[error("edge {from} -> {to} references undeclared vertex {vertex}")]
    UnknownVertex { from: Vertex, to: Vertex, vertex: Vertex },

    #[error("edge {from} -> {to} has negative capacity")]
    NegativeCapacity { from: Vertex, to: Vertex },
}

/// A broken internal invariant. Never expected on a correctly built residual network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmInvariantError {
    #[error("residual edge {edge} holds negative residual capacity")]
    NegativeResidual { edge: usize },

    #[error("residual pair of input edge {edge} no longer sums to its capacity")]
    CapacityMismatch { edge: usize },

    #[error("no predecessor edge recorded for vertex {vertex} while tracing an augmenting path")]
    MissingPredecessor { vertex: Vertex },

    #[error("{algorithm} exceeded its iteration limit of {limit}")]
    IterationLimitExceeded { algorithm: &'static str, limit: usize },

    #[error("vertex {vertex} has excess but no outgoing residual edge to relabel over")]
    StrandedExcess { vertex: Vertex },

    #[error("vertex {vertex} still holds excess after the active worklist drained")]
    ExcessRemaining { vertex: Vertex },

    #[error("flow into vertex {vertex} exceeds the range of the flow type")]
    FlowOverflow { vertex: Vertex },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?}, expected one of ford-fulkerson, edmonds-karp, dinic, push-relabel")]
pub struct UnknownAlgorithmError(pub String);

/// Failures while reading an edge list.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to read edge list")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `from to capacity`, found {content:?}")]
    Parse { line: usize, content: String },

    #[error("line {line}: {source}")]
    InvalidGraph {
        line: usize,
        #[source]
        source: InvalidGraphError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidGraph(#[from] InvalidGraphError),

    #[error(transparent)]
    AlgorithmInvariant(#[from] AlgorithmInvariantError),

    #[error(transparent)]
    Read(#[from] ReadError),
}
