use crate::maximum_flow::augmenting_path::{AugmentingPath, PathSearch};
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::{NumAssign, ToPrimitive};
use std::collections::VecDeque;

/// Edmonds-Karp: always augments along a path with the fewest edges, which bounds the number
/// of augmentations by O(V·E) independently of the capacities.
pub type EdmondsKarp<Flow> = AugmentingPath<Flow, BreadthFirst>;

#[derive(Default)]
pub struct BreadthFirst {
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl PathSearch for BreadthFirst {
    const NAME: &'static str = "edmonds-karp";

    fn search<Flow>(&mut self, residual: &ResidualGraph<Flow>, source: usize, sink: usize, prev: &mut [usize]) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.visited.clear();
        self.visited.resize(residual.num_nodes(), false);
        self.que.clear();

        // bfs
        self.visited[source] = true;
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            for i in residual.edge_range(u) {
                let edge = residual.edge(i);
                if self.visited[edge.to] || edge.residual == Flow::zero() {
                    continue;
                }

                self.visited[edge.to] = true;
                prev[edge.to] = i;
                if edge.to == sink {
                    return true;
                }
                self.que.push_back(edge.to);
            }
        }
        false
    }

    fn iteration_bound<Flow>(residual: &ResidualGraph<Flow>, _source: usize) -> usize
    where
        Flow: NumAssign + Ord + Copy + ToPrimitive,
    {
        residual.num_nodes().saturating_mul(residual.num_edges()).saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maximum_flow::augmenting_path::NO_EDGE;
    use crate::maximum_flow::graph::Graph;

    #[test]
    fn search_finds_the_shortest_path() {
        let graph = Graph::from_edges([0, 1, 2, 3], [(0, 1, 1), (0, 3, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
        let residual = ResidualGraph::new(&graph);
        let mut prev = vec![NO_EDGE; 4];

        assert!(BreadthFirst::default().search(&residual, 0, 3, &mut prev));
        assert_eq!(residual.tail(prev[3]), 0);
    }

    #[test]
    fn search_reports_unreachable_sink() {
        let graph = Graph::from_edges([0, 1, 2], [(0, 1, 3), (2, 1, 3)]).unwrap();
        let residual = ResidualGraph::new(&graph);
        let mut prev = vec![NO_EDGE; 3];

        assert!(!BreadthFirst::default().search(&residual, 0, 2, &mut prev));
        assert_eq!(prev[2], NO_EDGE);
    }

    #[test]
    fn bound_is_nodes_times_edges_plus_one() {
        let graph = Graph::from_edges([0, 1, 2], [(0, 1, 6), (1, 2, 4)]).unwrap();
        assert_eq!(BreadthFirst::iteration_bound(&ResidualGraph::new(&graph), 0), 7);
    }
}
