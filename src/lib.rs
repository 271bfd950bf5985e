//! Maximum flow on directed capacitated graphs.
//!
//! Four engines share one residual network: [`FordFulkerson`](maximum_flow::FordFulkerson),
//! [`EdmondsKarp`](maximum_flow::EdmondsKarp), [`Dinic`](maximum_flow::Dinic) and
//! [`PushRelabel`](maximum_flow::PushRelabel). Each builds its own residual copy of the
//! caller's [`Graph`](maximum_flow::graph::Graph) per call and leaves the graph untouched.
//!
//! ```
//! use network_flow::maximum_flow::graph::Graph;
//! use network_flow::maximum_flow::{maximum_flow, Algorithm};
//!
//! let graph = Graph::from_edges([1, 2, 3], [(1, 2, 10), (2, 3, 5)]).unwrap();
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(maximum_flow(algorithm, &graph, 1, 3).unwrap(), 5);
//! }
//! ```

pub mod error;
pub mod io;
pub mod maximum_flow;

pub use error::{AlgorithmInvariantError, Error, InvalidGraphError, ReadError, Result, UnknownAlgorithmError};
