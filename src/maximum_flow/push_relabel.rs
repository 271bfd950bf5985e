use crate::error::AlgorithmInvariantError;
use crate::maximum_flow::config::{Config, IterationBudget};
use crate::maximum_flow::graph::{Graph, Vertex};
use crate::maximum_flow::residual::ResidualGraph;
use crate::maximum_flow::solution::MaximumFlow;
use crate::maximum_flow::{terminals, MaximumFlowSolver};
use log::{debug, trace};
use num_traits::{CheckedAdd, NumAssign, Signed};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Generic push-relabel over a preflow.
///
/// Active vertices wait in a queue. Taking one out pushes its excess along admissible edges
/// and, if excess is left once its edges are exhausted, relabels it and puts it back. No gap
/// or global relabeling heuristics are applied.
#[derive(Default)]
pub struct PushRelabel<Flow> {
    residual: ResidualGraph<Flow>,
    heights: Vec<usize>,
    excesses: Vec<Flow>,
    current_edge: Vec<usize>,
    active_nodes: VecDeque<usize>,
    is_active: Vec<bool>,
    source: usize,
    sink: usize,
    config: Config,
}

impl<Flow> PushRelabel<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy + CheckedAdd + Debug,
{
    pub fn new(config: Config) -> Self {
        Self {
            residual: ResidualGraph::default(),
            heights: Vec::new(),
            excesses: Vec::new(),
            current_edge: Vec::new(),
            active_nodes: VecDeque::new(),
            is_active: Vec::new(),
            source: 0,
            sink: 0,
            config,
        }
    }

    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }

    /// Excess left at `v` by the last `solve`.
    pub fn excess(&self, v: Vertex) -> Option<Flow> {
        self.residual.index_of(v).and_then(|u| self.excesses.get(u).copied())
    }

    /// Height label of `v` after the last `solve`.
    pub fn height(&self, v: Vertex) -> Option<usize> {
        self.residual.index_of(v).and_then(|u| self.heights.get(u).copied())
    }

    pub fn solve(&mut self, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError> {
        let Some((s, t)) = terminals(graph, source, sink) else {
            return Ok(MaximumFlow::zero(graph));
        };
        self.residual.build(graph);
        self.source = s;
        self.sink = t;
        self.pre_process()?;

        let limit = self.config.iteration_limit.resolve(|| operation_bound(self.residual.num_nodes(), self.residual.num_edges()));
        let mut budget = IterationBudget::new("push-relabel", limit);

        while let Some(u) = self.active_nodes.pop_front() {
            self.is_active[u] = false;
            self.discharge(u, &mut budget)?;
        }

        if self.config.verify {
            self.residual.check_invariants()?;
            if let Some(u) = (0..self.residual.num_nodes()).find(|&u| u != s && u != t && self.excesses[u] != Flow::zero()) {
                return Err(AlgorithmInvariantError::ExcessRemaining { vertex: self.residual.vertex(u) });
            }
        }

        let flow = self.excesses[t];
        self.excesses[s] = -flow;
        debug!("push-relabel: maximum flow {:?} from {} to {} after {} pushes and relabels", flow, source, sink, budget.used());
        Ok(MaximumFlow::from_residual(flow, &self.residual, s, budget.used()))
    }

    fn pre_process(&mut self) -> Result<(), AlgorithmInvariantError> {
        let num_nodes = self.residual.num_nodes();
        self.heights.clear();
        self.heights.resize(num_nodes, 0);
        self.heights[self.source] = num_nodes;
        self.excesses.clear();
        self.excesses.resize(num_nodes, Flow::zero());
        self.is_active.clear();
        self.is_active.resize(num_nodes, false);
        self.active_nodes.clear();
        self.current_edge.clear();
        self.current_edge.extend((0..num_nodes).map(|u| self.residual.edge_range(u).start));

        // out-capacity of every vertex before any push, None if it exceeds the range of Flow
        let out_capacities: Vec<Option<Flow>> = (0..num_nodes)
            .map(|u| self.residual.neighbors(u).try_fold(Flow::zero(), |sum, e| sum.checked_add(&e.residual)))
            .collect();

        // saturate every edge leaving the source, but never push more into an inner vertex
        // than it can pass on
        for i in self.residual.edge_range(self.source) {
            let edge = self.residual.edge(i);
            let (to, mut delta) = (edge.to, edge.residual);
            if to == self.source {
                continue;
            }
            if to != self.sink {
                if let Some(capacity) = out_capacities[to] {
                    delta = delta.min(capacity - self.excesses[to]);
                }
            }
            if delta == Flow::zero() {
                continue;
            }
            self.residual.augment(i, delta);
            self.add_excess(to, delta)?;
        }

        for u in 0..num_nodes {
            self.activate(u);
        }
        Ok(())
    }

    // the source's excess is settled once the worklist drains
    fn add_excess(&mut self, u: usize, delta: Flow) -> Result<(), AlgorithmInvariantError> {
        if u != self.source {
            self.excesses[u] = self.excesses[u].checked_add(&delta).ok_or(AlgorithmInvariantError::FlowOverflow { vertex: self.residual.vertex(u) })?;
        }
        Ok(())
    }

    #[inline]
    fn activate(&mut self, u: usize) {
        if u != self.source && u != self.sink && !self.is_active[u] && self.excesses[u] > Flow::zero() {
            self.is_active[u] = true;
            self.active_nodes.push_back(u);
        }
    }

    #[inline]
    fn is_admissible_edge(&self, from: usize, i: usize) -> bool {
        let edge = self.residual.edge(i);
        edge.residual > Flow::zero() && self.heights[from] == self.heights[edge.to] + 1
    }

    fn discharge(&mut self, u: usize, budget: &mut IterationBudget) -> Result<(), AlgorithmInvariantError> {
        // push
        let end = self.residual.edge_range(u).end;
        while self.current_edge[u] < end {
            let i = self.current_edge[u];
            if self.is_admissible_edge(u, i) {
                budget.spend()?;
                self.push(u, i)?;
                if self.excesses[u] == Flow::zero() {
                    return Ok(());
                }
            } else {
                self.current_edge[u] += 1;
            }
        }

        // relabel
        budget.spend()?;
        self.relabel(u)?;
        self.current_edge[u] = self.residual.edge_range(u).start;
        self.activate(u);
        Ok(())
    }

    // push from u
    fn push(&mut self, u: usize, i: usize) -> Result<(), AlgorithmInvariantError> {
        let to = self.residual.edge(i).to;
        let delta = self.excesses[u].min(self.residual.residual_capacity(i));
        self.residual.augment(i, delta);
        self.excesses[u] -= delta;
        self.add_excess(to, delta)?;
        self.activate(to);
        Ok(())
    }

    fn relabel(&mut self, u: usize) -> Result<(), AlgorithmInvariantError> {
        let new_height = self
            .residual
            .neighbors(u)
            .filter(|edge| edge.residual > Flow::zero())
            .map(|edge| self.heights[edge.to] + 1)
            .min()
            .ok_or(AlgorithmInvariantError::StrandedExcess { vertex: self.residual.vertex(u) })?;

        trace!("push-relabel: relabel {} from {} to {}", self.residual.vertex(u), self.heights[u], new_height);
        self.heights[u] = new_height;
        Ok(())
    }
}

// relabels: 2n^2, saturating pushes: 2nm, non-saturating pushes: 4n^2m, with m residual edges
fn operation_bound(num_nodes: usize, num_edges: usize) -> usize {
    let n = num_nodes;
    let m = num_edges.saturating_mul(2);
    let n2 = n.saturating_mul(n);
    n2.saturating_mul(2)
        .saturating_add(n.saturating_mul(m).saturating_mul(2))
        .saturating_add(n2.saturating_mul(m).saturating_mul(4))
        .saturating_add(1)
}

impl<Flow> MaximumFlowSolver<Flow> for PushRelabel<Flow>
where
    Flow: NumAssign + Signed + Ord + Copy + CheckedAdd + Debug,
{
    fn name(&self) -> &'static str {
        "push-relabel"
    }

    fn solve(&mut self, source: Vertex, sink: Vertex, graph: &Graph<Flow>) -> Result<MaximumFlow<Flow>, AlgorithmInvariantError> {
        PushRelabel::solve(self, source, sink, graph)
    }
}
