//! # EdgeList
//!
//! Lines of the form `from to capacity`. Blank lines and lines starting with the comment
//! identifier (`#` by default) are skipped. Any other line that is not exactly three
//! whitespace-separated values is an error carrying its 1-based line number.

use crate::error::ReadError;
use crate::maximum_flow::graph::{Graph, Vertex};
use log::debug;
use num_traits::NumAssign;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self { comment_identifier: "#".to_string() }
    }
}

impl EdgeListReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier. An empty identifier disables comments.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    pub fn read<Flow, R>(&self, reader: R) -> Result<Graph<Flow>, ReadError>
    where
        Flow: NumAssign + Ord + Copy + FromStr,
        R: BufRead,
    {
        let mut graph = Graph::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() || self.is_comment(content) {
                continue;
            }

            let line = index + 1;
            let (from, to, upper) = parse_edge_line::<Flow>(content).ok_or_else(|| ReadError::Parse { line, content: content.to_string() })?;
            graph.add_node(from);
            graph.add_node(to);
            graph.add_directed_edge(from, to, upper).map_err(|source| ReadError::InvalidGraph { line, source })?;
        }

        debug!("read edge list with {} vertices and {} edges", graph.num_nodes(), graph.num_edges());
        Ok(graph)
    }

    fn is_comment(&self, line: &str) -> bool {
        !self.comment_identifier.is_empty() && line.starts_with(self.comment_identifier.as_str())
    }

    pub fn read_file<Flow, P>(&self, path: P) -> Result<Graph<Flow>, ReadError>
    where
        Flow: NumAssign + Ord + Copy + FromStr,
        P: AsRef<Path>,
    {
        self.read(BufReader::new(File::open(path)?))
    }
}

/// Reads an edge list with the default settings.
pub fn read_edge_list<Flow, R>(reader: R) -> Result<Graph<Flow>, ReadError>
where
    Flow: NumAssign + Ord + Copy + FromStr,
    R: BufRead,
{
    EdgeListReader::default().read(reader)
}

pub fn read_edge_list_file<Flow, P>(path: P) -> Result<Graph<Flow>, ReadError>
where
    Flow: NumAssign + Ord + Copy + FromStr,
    P: AsRef<Path>,
{
    EdgeListReader::default().read_file(path)
}

fn parse_edge_line<Flow: FromStr>(line: &str) -> Option<(Vertex, Vertex, Flow)> {
    let mut parts = line.split_whitespace();
    let from = parts.next()?.parse().ok()?;
    let to = parts.next()?.parse().ok()?;
    let upper = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to, upper))
}
