use crate::maximum_flow::augmenting_path::{AugmentingPath, PathSearch};
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::{NumAssign, ToPrimitive};

/// Ford-Fulkerson: augments along whatever path a depth-first search meets first.
///
/// The number of augmentations is bounded only by the flow value.
pub type FordFulkerson<Flow> = AugmentingPath<Flow, DepthFirst>;

/// Depth-first path search with an explicit stack and a per-vertex edge cursor.
#[derive(Default)]
pub struct DepthFirst {
    visited: Vec<bool>,
    current_edge: Vec<usize>,
    stack: Vec<usize>,
}

impl PathSearch for DepthFirst {
    const NAME: &'static str = "ford-fulkerson";

    fn search<Flow>(&mut self, residual: &ResidualGraph<Flow>, source: usize, sink: usize, prev: &mut [usize]) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.visited.clear();
        self.visited.resize(residual.num_nodes(), false);
        self.current_edge.resize(residual.num_nodes(), 0);
        self.stack.clear();

        self.visited[source] = true;
        self.current_edge[source] = residual.edge_range(source).start;
        self.stack.push(source);

        while let Some(&u) = self.stack.last() {
            if u == sink {
                return true;
            }

            let end = residual.edge_range(u).end;
            let mut advanced = false;
            while self.current_edge[u] < end {
                let i = self.current_edge[u];
                self.current_edge[u] += 1;

                let edge = residual.edge(i);
                if self.visited[edge.to] || edge.residual == Flow::zero() {
                    continue;
                }

                self.visited[edge.to] = true;
                self.current_edge[edge.to] = residual.edge_range(edge.to).start;
                prev[edge.to] = i;
                self.stack.push(edge.to);
                advanced = true;
                break;
            }

            if !advanced {
                self.stack.pop();
            }
        }
        false
    }

    // every augmentation carries at least one unit out of the source
    fn iteration_bound<Flow>(residual: &ResidualGraph<Flow>, source: usize) -> usize
    where
        Flow: NumAssign + Ord + Copy + ToPrimitive,
    {
        residual
            .neighbors(source)
            .map(|e| e.residual.to_usize().unwrap_or(usize::MAX))
            .fold(0usize, usize::saturating_add)
            .saturating_add(1)
    }
}
