use crate::error::AlgorithmInvariantError;
use crate::maximum_flow::config::{Config, IterationBudget};
use crate::maximum_flow::graph::{Graph, Vertex};
use crate::maximum_flow::residual::ResidualGraph;
use crate::maximum_flow::solution::MaximumFlow;
use crate::maximum_flow::{terminals, MaximumFlowSolver};
use log::{debug, trace};
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;

const UNREACHED: usize = usize::MAX;

#[derive(Default)]
pub struct Dinic<Flow> {
    residual: ResidualGraph<Flow>,
    levels: Vec<usize>,
    current_edge: Vec<usize>,
    path: Vec<usize>,
    que: VecDeque<usize>,
    config: Config,
}

impl<Flow> Dinic<Flow>
where
    Flow: NumAssign + Ord + Copy + CheckedAdd + Debug,
{
    pub fn new(config: Config) -> Self {
        Self { residual: ResidualGraph::default(), levels: Vec::new(), current_edge: Vec::new(), path: Vec::new(), que: VecDeque::new(), config }
    }

    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }

    pub fn solve(&mut self, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError> {
        let Some((s, t)) = terminals(graph, source, sink) else {
            return Ok(MaximumFlow::zero(graph));
        };
        self.residual.build(graph);
        let num_nodes = self.residual.num_nodes();
        self.levels.resize(num_nodes, UNREACHED);
        self.current_edge.resize(num_nodes, 0);

        // the sink's level strictly increases every phase
        let limit = self.config.iteration_limit.resolve(|| num_nodes.saturating_add(1));
        let mut budget = IterationBudget::new("dinic", limit);

        let mut flow = Flow::zero();
        while self.update_levels(s, t) {
            budget.spend()?;
            for u in 0..num_nodes {
                self.current_edge[u] = self.residual.edge_range(u).start;
            }

            let mut phase_flow = Flow::zero();
            let mut paths = 0;
            while let Some(delta) = self.augment_blocking_path(s, t) {
                phase_flow = phase_flow.checked_add(&delta).ok_or(AlgorithmInvariantError::FlowOverflow { vertex: sink })?;
                paths += 1;
            }
            flow = flow.checked_add(&phase_flow).ok_or(AlgorithmInvariantError::FlowOverflow { vertex: sink })?;
            trace!("dinic: phase {} at sink level {} pushed {:?} over {} paths", budget.used(), self.levels[t], phase_flow, paths);
        }

        if self.config.verify {
            self.residual.check_invariants()?;
        }
        debug!("dinic: maximum flow {:?} from {} to {} after {} phases", flow, source, sink, budget.used());
        Ok(MaximumFlow::from_residual(flow, &self.residual, s, budget.used()))
    }

    // O(n + m)
    // levels[u] becomes the number of positive residual edges on a shortest path from source,
    // or UNREACHED. returns whether the sink is reachable.
    fn update_levels(&mut self, source: usize, sink: usize) -> bool {
        self.levels.fill(UNREACHED);
        self.levels[source] = 0;
        self.que.clear();
        self.que.push_back(source);

        while let Some(u) = self.que.pop_front() {
            for e in self.residual.neighbors(u) {
                if e.residual > Flow::zero() && self.levels[e.to] == UNREACHED {
                    self.levels[e.to] = self.levels[u] + 1;
                    self.que.push_back(e.to);
                }
            }
        }
        self.levels[sink] != UNREACHED
    }

    #[inline]
    fn is_admissible_edge(&self, from: usize, i: usize) -> bool {
        let edge = self.residual.edge(i);
        edge.residual > Flow::zero() && self.levels[edge.to] == self.levels[from] + 1
    }

    // Walks the level graph from source with the per-vertex cursors and augments the first
    // path that reaches sink. None once the blocking flow of this phase is complete.
    fn augment_blocking_path(&mut self, source: usize, sink: usize) -> Option<Flow> {
        self.path.clear();
        let mut u = source;
        loop {
            if u == sink {
                let delta = self.path.iter().map(|&i| self.residual.residual_capacity(i)).min()?;
                for &i in self.path.iter() {
                    self.residual.augment(i, delta);
                }
                return Some(delta);
            }

            let end = self.residual.edge_range(u).end;
            while self.current_edge[u] < end && !self.is_admissible_edge(u, self.current_edge[u]) {
                self.current_edge[u] += 1;
            }

            if self.current_edge[u] < end {
                // advance
                let i = self.current_edge[u];
                self.path.push(i);
                u = self.residual.edge(i).to;
            } else {
                // retreat: u is dead until the next phase
                if u == source {
                    return None;
                }
                self.levels[u] = UNREACHED;
                let i = self.path.pop()?;
                u = self.residual.tail(i);
                self.current_edge[u] += 1;
            }
        }
    }
}

impl<Flow> MaximumFlowSolver<Flow> for Dinic<Flow>
where
    Flow: NumAssign + Ord + Copy + CheckedAdd + Debug,
{
    fn name(&self) -> &'static str {
        "dinic"
    }

    fn solve(&mut self, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError> {
        Dinic::solve(self, source, sink, graph)
    }
}
