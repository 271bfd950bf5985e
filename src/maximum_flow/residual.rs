use crate::error::AlgorithmInvariantError;
use crate::maximum_flow::graph::{Graph, Vertex};
use num_traits::NumAssign;
use std::collections::{HashMap, VecDeque};
use std::ops::Range;

#[derive(PartialEq, Debug, Clone)]
pub struct ResidualEdge<Flow> {
    pub to: usize,
    pub residual: Flow,
    pub rev: usize,
}

/// Residual network in CSR form.
///
/// Every input edge `(u, v, c)` owns a forward edge on `u` starting at residual `c` and a
/// backward edge on `v` starting at residual `0`. The two refer to each other through `rev`,
/// and their residuals always sum to `c`.
#[derive(Debug, Clone)]
pub struct ResidualGraph<Flow> {
    vertices: Vec<Vertex>,
    index: HashMap<Vertex, usize>,

    pub(crate) start: Vec<usize>,
    pub(crate) edge_list: Vec<ResidualEdge<Flow>>,

    // input edge id -> forward residual edge index
    forward: Vec<usize>,
    capacities: Vec<Flow>,
}

impl<Flow> Default for ResidualGraph<Flow> {
    fn default() -> Self {
        Self { vertices: Vec::new(), index: HashMap::new(), start: vec![0], edge_list: Vec::new(), forward: Vec::new(), capacities: Vec::new() }
    }
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(graph: &Graph<Flow>) -> Self {
        let mut residual = Self::default();
        residual.build(graph);
        residual
    }

    /// Rebuilds the network from `graph`, reusing the existing buffers.
    pub fn build(&mut self, graph: &Graph<Flow>) {
        let num_nodes = graph.num_nodes();
        let num_edges = graph.num_edges();

        self.vertices.clear();
        self.vertices.extend_from_slice(graph.vertices());
        self.index.clear();
        self.index.extend(self.vertices.iter().enumerate().map(|(u, &v)| (v, u)));

        self.start.clear();
        self.start.resize(num_nodes + 1, 0);
        self.forward.clear();
        self.forward.resize(num_edges, usize::MAX);
        self.capacities.clear();
        self.capacities.extend(graph.edges.iter().map(|e| e.upper));
        self.edge_list.clear();
        self.edge_list.resize(2 * num_edges, ResidualEdge { to: 0, residual: Flow::zero(), rev: 0 });

        let mut degree = vec![0; num_nodes];
        for &(u, v) in graph.endpoints.iter() {
            degree[u] += 1;
            degree[v] += 1;
        }

        for i in 1..=num_nodes {
            self.start[i] = self.start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; num_nodes];
        for (edge_id, (&(u, v), &upper)) in graph.endpoints.iter().zip(self.capacities.iter()).enumerate() {
            let forward = self.start[u] + counter[u];
            counter[u] += 1;
            let backward = self.start[v] + counter[v];
            counter[v] += 1;

            self.forward[edge_id] = forward;
            self.edge_list[forward] = ResidualEdge { to: v, residual: upper, rev: backward };
            self.edge_list[backward] = ResidualEdge { to: u, residual: Flow::zero(), rev: forward };
        }
    }

    /// Restores every edge pair to its state right after `build`.
    pub fn reset(&mut self) {
        for (&forward, &upper) in self.forward.iter().zip(self.capacities.iter()) {
            let rev = self.edge_list[forward].rev;
            self.edge_list[forward].residual = upper;
            self.edge_list[rev].residual = Flow::zero();
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    /// Number of input edges, i.e. half the number of residual edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn has_vertex(&self, v: Vertex) -> bool {
        self.index.contains_key(&v)
    }

    #[inline]
    pub fn index_of(&self, v: Vertex) -> Option<usize> {
        self.index.get(&v).copied()
    }

    #[inline]
    pub fn vertex(&self, u: usize) -> Vertex {
        self.vertices[u]
    }

    #[inline]
    pub fn edge_range(&self, u: usize) -> Range<usize> {
        self.start[u]..self.start[u + 1]
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<'_, ResidualEdge<Flow>> {
        self.edge_list[self.edge_range(u)].iter()
    }

    #[inline]
    pub fn edge(&self, i: usize) -> &ResidualEdge<Flow> {
        &self.edge_list[i]
    }

    #[inline]
    pub fn residual_capacity(&self, i: usize) -> Flow {
        self.edge_list[i].residual
    }

    // the vertex residual edge i leaves from
    #[inline]
    pub fn tail(&self, i: usize) -> usize {
        self.edge_list[self.edge_list[i].rev].to
    }

    /// Moves `amount` units of residual capacity from edge `i` to its reverse.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < amount <= residual_capacity(i)`.
    #[inline]
    pub fn augment(&mut self, i: usize, amount: Flow) {
        assert!(
            amount > Flow::zero() && amount <= self.edge_list[i].residual,
            "augmenting residual edge {i} by an amount outside (0, residual]"
        );
        let rev = self.edge_list[i].rev;

        self.edge_list[i].residual -= amount;
        self.edge_list[rev].residual += amount;
    }

    /// Flow currently carried by each input edge, indexed by edge id.
    pub fn flows(&self) -> Vec<Flow> {
        self.forward.iter().map(|&i| self.edge_list[self.edge_list[i].rev].residual).collect()
    }

    /// Vertices reachable from `source` over positive residual edges, in BFS order.
    pub fn reachable_from(&self, source: usize) -> Vec<usize> {
        let mut visited = vec![false; self.num_nodes()];
        let mut reached = Vec::new();
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            reached.push(u);
            for e in self.neighbors(u) {
                if !visited[e.to] && e.residual > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }
        reached
    }

    /// Verifies non-negative residuals and that every pair still sums to its capacity.
    pub fn check_invariants(&self) -> Result<(), AlgorithmInvariantError> {
        if let Some(edge) = self.edge_list.iter().position(|e| e.residual < Flow::zero()) {
            return Err(AlgorithmInvariantError::NegativeResidual { edge });
        }
        for (edge, (&i, &upper)) in self.forward.iter().zip(self.capacities.iter()).enumerate() {
            let e = &self.edge_list[i];
            if e.residual + self.edge_list[e.rev].residual != upper {
                return Err(AlgorithmInvariantError::CapacityMismatch { edge });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph<i64> {
        Graph::from_edges([10, 20, 30], [(10, 20, 7), (20, 30, 3)]).unwrap()
    }

    #[test]
    fn build_links_forward_and_backward_edges() {
        let residual = ResidualGraph::new(&chain());
        assert_eq!(residual.num_nodes(), 3);
        assert_eq!(residual.num_edges(), 2);

        let u = residual.index_of(10).unwrap();
        let v = residual.index_of(20).unwrap();
        let forward = residual.edge_range(u).start;
        let e = residual.edge(forward);
        assert_eq!((e.to, e.residual), (v, 7));

        let back = residual.edge(e.rev);
        assert_eq!((back.to, back.residual, back.rev), (u, 0, forward));
        assert_eq!(residual.tail(forward), u);
        assert_eq!(residual.tail(e.rev), v);
        assert!(residual.check_invariants().is_ok());
    }

    #[test]
    fn augment_moves_capacity_to_the_reverse_edge() {
        let mut residual = ResidualGraph::new(&chain());
        let u = residual.index_of(10).unwrap();
        let forward = residual.edge_range(u).start;
        let rev = residual.edge(forward).rev;

        residual.augment(forward, 5);
        assert_eq!(residual.residual_capacity(forward), 2);
        assert_eq!(residual.residual_capacity(rev), 5);
        assert_eq!(residual.flows(), vec![5, 0]);

        residual.augment(rev, 1);
        assert_eq!(residual.flows(), vec![4, 0]);
        assert!(residual.check_invariants().is_ok());
    }

    #[test]
    #[should_panic]
    fn augment_beyond_residual_panics() {
        let mut residual = ResidualGraph::new(&chain());
        let u = residual.index_of(20).unwrap();
        let i = residual.edge_range(u).find(|&i| residual.edge(i).residual == 3).unwrap();
        residual.augment(i, 4);
    }

    #[test]
    #[should_panic]
    fn augment_by_zero_panics() {
        let mut residual = ResidualGraph::new(&chain());
        residual.augment(0, 0);
    }

    #[test]
    fn reset_restores_initial_residuals() {
        let mut residual = ResidualGraph::new(&chain());
        let u = residual.index_of(10).unwrap();
        residual.augment(residual.edge_range(u).start, 7);
        assert_eq!(residual.reachable_from(u), vec![u]);

        residual.reset();
        assert_eq!(residual.flows(), vec![0, 0]);
        assert_eq!(residual.reachable_from(u).len(), 3);
    }

    #[test]
    fn check_invariants_catches_corruption() {
        let mut residual = ResidualGraph::new(&chain());
        residual.edge_list[0].residual += 1;
        assert!(matches!(residual.check_invariants(), Err(AlgorithmInvariantError::CapacityMismatch { .. })));

        residual.reset();
        residual.edge_list[1].residual = -1;
        assert!(matches!(residual.check_invariants(), Err(AlgorithmInvariantError::NegativeResidual { edge: 1 })));
    }

    #[test]
    fn parallel_edges_get_separate_pairs() {
        let graph = Graph::from_edges([1, 2], [(1, 2, 2), (1, 2, 3)]).unwrap();
        let residual = ResidualGraph::new(&graph);
        let u = residual.index_of(1).unwrap();
        let residuals: Vec<i64> = residual.neighbors(u).map(|e| e.residual).collect();
        assert_eq!(residuals, vec![2, 3]);
    }
}
