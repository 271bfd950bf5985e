use network_flow::io::read_edge_list_file;
use network_flow::maximum_flow::graph::{Graph, Vertex};
use network_flow::maximum_flow::{Algorithm, Config};
use std::env;

// usage: maximum_flow [FILE SOURCE SINK]...
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        for (name, graph, source, sink) in built_in() {
            report(name, &graph, source, sink);
        }
        return;
    }

    for request in args.chunks(3) {
        let [path, source, sink] = request else {
            eprintln!("expected FILE SOURCE SINK, found {request:?}");
            continue;
        };
        let (Ok(source), Ok(sink)) = (source.parse::<Vertex>(), sink.parse::<Vertex>()) else {
            eprintln!("{path}: source and sink must be integers");
            continue;
        };
        match read_edge_list_file::<i64, _>(path) {
            Ok(graph) => report(path, &graph, source, sink),
            Err(e) => eprintln!("{path}: {e}"),
        }
    }
}

fn report(name: &str, graph: &Graph<i64>, source: Vertex, sink: Vertex) {
    println!("{name}: {} vertices, {} edges, {source} -> {sink}", graph.num_nodes(), graph.num_edges());
    for algorithm in Algorithm::ALL {
        match algorithm.solve(Config::default(), source, sink, graph) {
            Ok(result) => println!("  {algorithm:<15} value {:>6}  iterations {:>4}  cut {:?}", result.value(), result.iterations(), result.minimum_cut()),
            Err(e) => println!("  {algorithm:<15} failed: {e}"),
        }
    }
}

fn built_in() -> Vec<(&'static str, Graph<i64>, Vertex, Vertex)> {
    let mut graphs = Vec::new();

    let edges = [(1, 2, 16), (1, 3, 13), (2, 3, 12), (2, 4, 10), (3, 2, 9), (3, 5, 14), (4, 5, 7), (4, 6, 4), (5, 6, 20)];
    match Graph::from_edges(1..=6, edges) {
        Ok(graph) => graphs.push(("six vertices", graph, 1, 6)),
        Err(e) => eprintln!("six vertices: {e}"),
    }

    let edges = [(0, 1, 10), (0, 2, 5), (1, 2, 15), (1, 3, 10), (2, 3, 10)];
    match Graph::from_edges(0..4, edges) {
        Ok(graph) => graphs.push(("diamond", graph, 0, 3)),
        Err(e) => eprintln!("diamond: {e}"),
    }

    // rejected: vertex 9 is never declared
    match Graph::<i64>::from_edges(0..2, [(0, 1, 3), (1, 9, 3)]) {
        Ok(graph) => graphs.push(("undeclared vertex", graph, 0, 9)),
        Err(e) => eprintln!("undeclared vertex: {e}"),
    }

    graphs.push(("empty", Graph::new(), 0, 1));
    graphs
}
