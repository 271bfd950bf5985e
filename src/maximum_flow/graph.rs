use crate::error::InvalidGraphError;
use num_traits::NumAssign;
use std::collections::{HashMap, HashSet};

/// Caller-supplied vertex key.
pub type Vertex = i64;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: Vertex,
    pub to: Vertex,
    pub upper: Flow,
}

/// Capacity graph handed to the engines. Engines never mutate it.
#[derive(Default, Debug, Clone)]
pub struct Graph<Flow> {
    vertices: Vec<Vertex>,
    index: HashMap<Vertex, usize>,
    pub(crate) edges: Vec<Edge<Flow>>,
    // dense (from, to) indices of each edge
    pub(crate) endpoints: Vec<(usize, usize)>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new() -> Self {
        Self { vertices: Vec::new(), index: HashMap::new(), edges: Vec::new(), endpoints: Vec::new() }
    }

    /// Builds a graph from a vertex set and `(from, to, capacity)` triples.
    pub fn from_edges<V, E>(vertices: V, edges: E) -> Result<Self, InvalidGraphError>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = (Vertex, Vertex, Flow)>,
    {
        let mut graph = Self::new();
        graph.add_nodes(vertices);
        for (from, to, upper) in edges {
            graph.add_directed_edge(from, to, upper)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn has_vertex(&self, v: Vertex) -> bool {
        self.index.contains_key(&v)
    }

    /// Vertices in declaration order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn index_of(&self, v: Vertex) -> Option<usize> {
        self.index.get(&v).copied()
    }

    // returns false if v was already declared
    pub fn add_node(&mut self, v: Vertex) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        self.index.insert(v, self.vertices.len());
        self.vertices.push(v);
        true
    }

    // returns the number of newly declared vertices
    pub fn add_nodes<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = Vertex>,
    {
        vertices.into_iter().filter(|&v| self.add_node(v)).count()
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: Vertex, to: Vertex, upper: Flow) -> Result<usize, InvalidGraphError> {
        let (u, v) = match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => (u, v),
            (None, _) => return Err(InvalidGraphError::UnknownVertex { from, to, vertex: from }),
            (_, None) => return Err(InvalidGraphError::UnknownVertex { from, to, vertex: to }),
        };
        if upper < Flow::zero() {
            return Err(InvalidGraphError::NegativeCapacity { from, to });
        }

        self.edges.push(Edge { from, to, upper });
        self.endpoints.push((u, v));
        Ok(self.edges.len() - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    pub fn edges(&self) -> std::slice::Iter<'_, Edge<Flow>> {
        self.edges.iter()
    }

    /// Total capacity of the edges leaving `source_side`.
    pub fn cut_capacity(&self, source_side: &[Vertex]) -> Flow {
        let side: HashSet<Vertex> = source_side.iter().copied().collect();
        self.edges
            .iter()
            .filter(|e| side.contains(&e.from) && !side.contains(&e.to))
            .fold(Flow::zero(), |sum, e| sum + e.upper)
    }
}
