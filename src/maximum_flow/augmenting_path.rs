//! Augmenting-path engine shared by Ford-Fulkerson and Edmonds-Karp.
//!
//! The engine repeatedly asks a [`PathSearch`] for a source-sink path of positive residual
//! edges, pushes the path's bottleneck along it, and stops once no path is left. The two
//! algorithms differ only in the order the search visits vertices.

use crate::error::AlgorithmInvariantError;
use crate::maximum_flow::config::{Config, IterationBudget};
use crate::maximum_flow::graph::{Graph, Vertex};
use crate::maximum_flow::residual::ResidualGraph;
use crate::maximum_flow::solution::MaximumFlow;
use crate::maximum_flow::{terminals, MaximumFlowSolver};
use log::{debug, trace};
use num_traits::{CheckedAdd, NumAssign, ToPrimitive};

pub(crate) const NO_EDGE: usize = usize::MAX;

pub trait PathSearch: Default {
    const NAME: &'static str;

    /// Looks for a path of positive residual edges from `source` to `sink`.
    ///
    /// On success `prev[v]` holds the residual edge used to enter every vertex `v` on the
    /// path. `prev` is filled with `NO_EDGE` by the caller.
    fn search<Flow>(&mut self, residual: &ResidualGraph<Flow>, source: usize, sink: usize, prev: &mut [usize]) -> bool
    where
        Flow: NumAssign + Ord + Copy;

    /// Upper bound on the number of augmentations this search order can need.
    fn iteration_bound<Flow>(residual: &ResidualGraph<Flow>, source: usize) -> usize
    where
        Flow: NumAssign + Ord + Copy + ToPrimitive;
}

#[derive(Default)]
pub struct AugmentingPath<Flow, S> {
    residual: ResidualGraph<Flow>,
    search: S,
    prev: Vec<usize>,
    path: Vec<usize>,
    config: Config,
}

impl<Flow, S> AugmentingPath<Flow, S>
where
    Flow: NumAssign + Ord + Copy + ToPrimitive + CheckedAdd + std::fmt::Debug,
    S: PathSearch,
{
    pub fn new(config: Config) -> Self {
        Self { residual: ResidualGraph::default(), search: S::default(), prev: Vec::new(), path: Vec::new(), config }
    }

    /// Residual network left behind by the last `solve`.
    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }

    pub fn solve(&mut self, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError> {
        let Some((s, t)) = terminals(graph, source, sink) else {
            return Ok(MaximumFlow::zero(graph));
        };
        self.residual.build(graph);
        self.prev.clear();
        self.prev.resize(self.residual.num_nodes(), NO_EDGE);

        let limit = self.config.iteration_limit.resolve(|| S::iteration_bound(&self.residual, s));
        let mut budget = IterationBudget::new(S::NAME, limit);

        let mut flow = Flow::zero();
        loop {
            self.prev.fill(NO_EDGE);
            if !self.search.search(&self.residual, s, t, &mut self.prev) {
                break;
            }
            budget.spend()?;

            // calculate delta
            let delta = self.trace_path(s, t)?;
            flow = flow.checked_add(&delta).ok_or(AlgorithmInvariantError::FlowOverflow { vertex: sink })?;

            // update flow
            for &i in self.path.iter() {
                self.residual.augment(i, delta);
            }
            trace!("{}: augmented {:?} along {} edges", S::NAME, delta, self.path.len());
        }

        if self.config.verify {
            self.residual.check_invariants()?;
        }
        debug!("{}: maximum flow {:?} from {} to {} after {} augmentations", S::NAME, flow, source, sink, budget.used());
        Ok(MaximumFlow::from_residual(flow, &self.residual, s, budget.used()))
    }

    // collects the path from sink back to source into self.path and returns its bottleneck
    fn trace_path(&mut self, source: usize, sink: usize) -> Result<Flow, AlgorithmInvariantError> {
        self.path.clear();
        let mut v = sink;
        while v != source {
            let i = self.prev[v];
            if i == NO_EDGE || self.path.len() >= self.residual.num_nodes() {
                return Err(AlgorithmInvariantError::MissingPredecessor { vertex: self.residual.vertex(v) });
            }
            self.path.push(i);
            v = self.residual.tail(i);
        }

        self.path
            .iter()
            .map(|&i| self.residual.residual_capacity(i))
            .min()
            .ok_or(AlgorithmInvariantError::MissingPredecessor { vertex: self.residual.vertex(sink) })
    }
}

impl<Flow, S> MaximumFlowSolver<Flow> for AugmentingPath<Flow, S>
where
    Flow: NumAssign + Ord + Copy + ToPrimitive + CheckedAdd + std::fmt::Debug,
    S: PathSearch,
{
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn solve(&mut self, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError> {
        AugmentingPath::solve(self, source, sink, graph)
    }
}
