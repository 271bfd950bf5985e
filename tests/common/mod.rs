#![allow(dead_code)]

use network_flow::maximum_flow::graph::{Graph, Vertex};
use network_flow::maximum_flow::solution::MaximumFlow;
use network_flow::maximum_flow::{Algorithm, Config, MaximumFlowSolver};
use rand::Rng;
use std::collections::HashMap;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn graph<V>(vertices: V, edges: &[(Vertex, Vertex, i64)]) -> Graph<i64>
where
    V: IntoIterator<Item = Vertex>,
{
    Graph::from_edges(vertices, edges.iter().copied()).unwrap()
}

pub fn solvers() -> Vec<Box<dyn MaximumFlowSolver<i64>>> {
    Algorithm::ALL.into_iter().map(|algorithm| algorithm.solver(Config::default())).collect()
}

// 1 -> 6
pub fn scenario_a() -> Graph<i64> {
    graph(1..=6, &[(1, 2, 16), (1, 3, 13), (2, 3, 12), (2, 4, 10), (3, 2, 9), (3, 5, 14), (4, 5, 7), (4, 6, 4), (5, 6, 20)])
}

// s = 0, v1..v4 = 1..4, t = 5
pub fn clrs() -> Graph<i64> {
    graph(0..6, &[(0, 1, 16), (0, 2, 13), (1, 3, 12), (2, 1, 4), (2, 4, 14), (3, 2, 9), (3, 5, 20), (4, 3, 7), (4, 5, 4)])
}

// 0 -> 3
pub fn simple() -> Graph<i64> {
    graph(0..4, &[(0, 1, 10), (0, 2, 5), (1, 2, 15), (1, 3, 10), (2, 3, 10)])
}

// 0 -> 9
pub fn layered() -> Graph<i64> {
    graph(
        0..10,
        &[
            (0, 1, 20),
            (0, 2, 15),
            (1, 3, 25),
            (2, 3, 10),
            (2, 4, 15),
            (3, 5, 15),
            (3, 6, 10),
            (4, 6, 20),
            (4, 7, 5),
            (5, 8, 30),
            (6, 8, 20),
            (7, 9, 10),
            (8, 9, 25),
        ],
    )
}

// 0 -> 7
pub fn dense() -> Graph<i64> {
    graph(
        0..8,
        &[
            (0, 1, 10),
            (0, 2, 20),
            (0, 3, 15),
            (1, 2, 5),
            (1, 4, 15),
            (1, 5, 10),
            (2, 3, 10),
            (2, 5, 20),
            (2, 6, 15),
            (3, 6, 10),
            (3, 7, 20),
            (4, 5, 10),
            (4, 7, 15),
            (5, 6, 5),
            (5, 7, 10),
            (6, 7, 20),
        ],
    )
}

pub const FILE_GRAPH: &str = "\
# from to capacity
0 2 40
0 1 30
0 3 20
1 2 50
2 3 20
3 4 30
2 4 30
1 4 40
";

/// Random multigraph on `0..num_nodes`; parallel edges and self-loops included.
pub fn random_graph<R: Rng>(rng: &mut R, num_nodes: usize, num_edges: usize, max_capacity: i64) -> Graph<i64> {
    let mut graph = Graph::new();
    graph.add_nodes(0..num_nodes as Vertex);
    for _ in 0..num_edges {
        let from = rng.gen_range(0..num_nodes) as Vertex;
        let to = rng.gen_range(0..num_nodes) as Vertex;
        let upper = rng.gen_range(0..=max_capacity);
        graph.add_directed_edge(from, to, upper).unwrap();
    }
    graph
}

/// Capacity respect, conservation, and max-flow = min-cut.
pub fn assert_valid_flow(graph: &Graph<i64>, source: Vertex, sink: Vertex, result: &MaximumFlow<i64>) {
    assert_eq!(result.flows().len(), graph.num_edges());

    let mut balance: HashMap<Vertex, i64> = HashMap::new();
    for (edge_id, (edge, &flow)) in graph.edges().zip(result.flows()).enumerate() {
        assert!(0 <= flow && flow <= edge.upper, "edge {edge_id} carries {flow} of {}", edge.upper);
        *balance.entry(edge.from).or_default() -= flow;
        *balance.entry(edge.to).or_default() += flow;
    }

    for &v in graph.vertices() {
        let net = balance.get(&v).copied().unwrap_or(0);
        if v == source {
            assert_eq!(-net, result.value(), "net outflow of source {v}");
        } else if v == sink {
            assert_eq!(net, result.value(), "net inflow of sink {v}");
        } else {
            assert_eq!(net, 0, "flow is not conserved at {v}");
        }
    }

    let cut = result.minimum_cut();
    assert!(cut.contains(&source));
    assert!(!cut.contains(&sink));
    assert_eq!(graph.cut_capacity(cut), result.value());
}
