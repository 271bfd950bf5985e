pub mod algorithm;
pub mod augmenting_path;
pub mod config;
pub mod dinic;
pub mod edmonds_karp;
pub mod ford_fulkerson;
pub mod graph;
pub mod push_relabel;
pub mod residual;
pub mod solution;

use crate::error::AlgorithmInvariantError;
use crate::maximum_flow::graph::{Graph, Vertex};
use crate::maximum_flow::solution::MaximumFlow;
use num_traits::NumAssign;

pub use algorithm::{maximum_flow, Algorithm};
pub use config::{Config, IterationLimit};
pub use dinic::Dinic;
pub use edmonds_karp::EdmondsKarp;
pub use ford_fulkerson::FordFulkerson;
pub use push_relabel::PushRelabel;

/// Common interface of the four engines.
pub trait MaximumFlowSolver<Flow> {
    fn name(&self) -> &'static str;

    fn solve(&mut self, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError>;
}

// Dense (source, sink) indices, or None when the request is degenerate and the flow is zero.
pub(crate) fn terminals<Flow>(graph: &Graph<Flow>, source: Vertex, sink: Vertex) -> Option<(usize, usize)>
where
    Flow: NumAssign + Ord + Copy,
{
    if graph.is_empty() {
        return None;
    }
    let s = graph.index_of(source)?;
    let t = graph.index_of(sink)?;
    if s == t {
        return None;
    }
    Some((s, t))
}
