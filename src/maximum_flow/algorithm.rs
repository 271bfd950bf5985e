use crate::error::{AlgorithmInvariantError, UnknownAlgorithmError};
use crate::maximum_flow::config::Config;
use crate::maximum_flow::graph::{Graph, Vertex};
use crate::maximum_flow::solution::MaximumFlow;
use crate::maximum_flow::{Dinic, EdmondsKarp, FordFulkerson, MaximumFlowSolver, PushRelabel};
use num_traits::{CheckedAdd, NumAssign, Signed, ToPrimitive};
use std::fmt::{self, Debug};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    FordFulkerson,
    EdmondsKarp,
    Dinic,
    PushRelabel,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Algorithm::FordFulkerson, Algorithm::EdmondsKarp, Algorithm::Dinic, Algorithm::PushRelabel];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::FordFulkerson => "ford-fulkerson",
            Algorithm::EdmondsKarp => "edmonds-karp",
            Algorithm::Dinic => "dinic",
            Algorithm::PushRelabel => "push-relabel",
        }
    }

    pub fn solver<Flow>(self, config: Config) -> Box<dyn MaximumFlowSolver<Flow>>
    where
        Flow: NumAssign + Signed + Ord + Copy + ToPrimitive + CheckedAdd + Debug + 'static,
    {
        match self {
            Algorithm::FordFulkerson => Box::new(FordFulkerson::<Flow>::new(config)),
            Algorithm::EdmondsKarp => Box::new(EdmondsKarp::<Flow>::new(config)),
            Algorithm::Dinic => Box::new(Dinic::<Flow>::new(config)),
            Algorithm::PushRelabel => Box::new(PushRelabel::<Flow>::new(config)),
        }
    }

    pub fn solve<Flow>(self, config: Config, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError>
    where
        Flow: NumAssign + Signed + Ord + Copy + ToPrimitive + CheckedAdd + Debug + 'static,
    {
        self.solver(config).solve(source, sink, graph)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Algorithm::ALL.into_iter().find(|a| a.name() == normalized).ok_or_else(|| UnknownAlgorithmError(s.to_string()))
    }
}

/// Maximum flow value from `source` to `sink` with the default configuration.
///
/// Degenerate requests (empty graph, unknown source or sink, `source == sink`) yield zero.
pub fn maximum_flow<Flow>(algorithm: Algorithm, graph: &Graph<Flow>, source: Vertex, sink: Vertex) -> Result<Flow, AlgorithmInvariantError>
where
    Flow: NumAssign + Signed + Ord + Copy + ToPrimitive + CheckedAdd + Debug + 'static,
{
    algorithm.solve(Config::default(), source, sink, graph).map(|result| result.value())
}
