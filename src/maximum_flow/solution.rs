use crate::maximum_flow::graph::{Graph, Vertex};
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct MaximumFlow<Flow> {
    value: Flow,
    flows: Vec<Flow>,
    minimum_cut: Vec<Vertex>,
    iterations: usize,
}

impl<Flow> MaximumFlow<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    // answer to a degenerate request
    pub(crate) fn zero(graph: &Graph<Flow>) -> Self {
        Self { value: Flow::zero(), flows: vec![Flow::zero(); graph.num_edges()], minimum_cut: Vec::new(), iterations: 0 }
    }

    pub(crate) fn from_residual(value: Flow, residual: &ResidualGraph<Flow>, source: usize, iterations: usize) -> Self {
        let mut minimum_cut: Vec<Vertex> = residual.reachable_from(source).into_iter().map(|u| residual.vertex(u)).collect();
        minimum_cut.sort_unstable();
        Self { value, flows: residual.flows(), minimum_cut, iterations }
    }

    #[inline]
    pub fn value(&self) -> Flow {
        self.value
    }

    pub fn flow(&self, edge_id: usize) -> Option<Flow> {
        self.flows.get(edge_id).copied()
    }

    /// Flow on every input edge, indexed by the id `Graph::add_directed_edge` returned.
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    /// Source side of a minimum cut, sorted. Empty for degenerate requests.
    pub fn minimum_cut(&self) -> &[Vertex] {
        &self.minimum_cut
    }

    /// Augmenting paths, phases, or push/relabel operations, depending on the engine.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
