mod common;

use common::*;
use network_flow::maximum_flow::graph::{Graph, Vertex};
use network_flow::maximum_flow::{Algorithm, Config};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

fn values(graph: &Graph<i64>, source: Vertex, sink: Vertex) -> Vec<i64> {
    solvers()
        .into_iter()
        .map(|mut solver| {
            let result = solver.solve(source, sink, graph).unwrap();
            assert_valid_flow(graph, source, sink, &result);
            result.value()
        })
        .collect()
}

#[test]
fn engines_agree_on_random_graphs() {
    init_logger();
    let mut rng = Pcg64::seed_from_u64(1234);

    for _ in 0..200 {
        let num_nodes = rng.gen_range(2..12);
        let num_edges = rng.gen_range(0..4 * num_nodes);
        let graph = random_graph(&mut rng, num_nodes, num_edges, 20);
        let source = rng.gen_range(0..num_nodes) as Vertex;
        let sink = rng.gen_range(0..num_nodes) as Vertex;
        if source == sink {
            continue;
        }

        let values = values(&graph, source, sink);
        assert!(values.iter().all(|&v| v == values[0]), "disagreement {values:?}");
    }
}

#[test]
fn engines_agree_on_larger_random_graphs() {
    let mut rng = Pcg64::seed_from_u64(98765);

    for _ in 0..10 {
        let graph = random_graph(&mut rng, 60, 400, 1000);
        let values = values(&graph, 0, 59);
        assert!(values.iter().all(|&v| v == values[0]), "disagreement {values:?}");
    }
}

#[test]
fn raising_a_capacity_never_lowers_the_flow() {
    let mut rng = Pcg64::seed_from_u64(4321);

    for _ in 0..100 {
        let num_nodes = rng.gen_range(2..10);
        let num_edges = rng.gen_range(1..3 * num_nodes);
        let graph = random_graph(&mut rng, num_nodes, num_edges, 10);

        let raised_edge = rng.gen_range(0..num_edges);
        let raise = rng.gen_range(1..=10);
        let mut raised = Graph::new();
        raised.add_nodes(graph.vertices().iter().copied());
        for (edge_id, edge) in graph.edges().enumerate() {
            let upper = if edge_id == raised_edge { edge.upper + raise } else { edge.upper };
            raised.add_directed_edge(edge.from, edge.to, upper).unwrap();
        }

        let sink = (num_nodes - 1) as Vertex;
        for algorithm in Algorithm::ALL {
            let before = algorithm.solve(Config::default(), 0, sink, &graph).unwrap().value();
            let after = algorithm.solve(Config::default(), 0, sink, &raised).unwrap().value();
            assert!(before <= after, "{algorithm}: {before} > {after}");
        }
    }
}

#[test]
fn zero_capacities_give_zero_flow() {
    let mut rng = Pcg64::seed_from_u64(777);

    for _ in 0..20 {
        let num_nodes = rng.gen_range(2..15);
        let graph = random_graph(&mut rng, num_nodes, 5 * num_nodes, 0);
        assert_eq!(values(&graph, 0, (num_nodes - 1) as Vertex), vec![0; 4]);
    }
}

#[test]
fn rebuilding_from_the_same_edges_gives_the_same_result() {
    let mut rng = Pcg64::seed_from_u64(2024);
    let graph = random_graph(&mut rng, 30, 150, 50);

    for algorithm in Algorithm::ALL {
        let first = algorithm.solve(Config::default(), 0, 29, &graph).unwrap();
        let rebuilt = algorithm.solve(Config::default(), 0, 29, &graph.clone()).unwrap();
        assert_eq!(first, rebuilt, "{algorithm}");
    }
}

#[test]
fn edmonds_karp_stays_within_its_augmentation_bound() {
    let mut rng = Pcg64::seed_from_u64(31337);

    for _ in 0..20 {
        let graph = random_graph(&mut rng, 40, 200, 1_000_000);
        let result = Algorithm::EdmondsKarp.solve(Config::default(), 0, 39, &graph).unwrap();
        assert!(result.iterations() <= graph.num_nodes() * graph.num_edges());
    }
}
