use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use crate::error::{Result, SspError};

pub type VertexId = u64;
pub type Cost = f64;

/// Upper bound on the sum of all edge weights a graph may carry into a search. Every relaxation
/// candidate is a simple path plus one edge, so it stays below this sum; the factor of two absorbs
/// rounding so no candidate can round up to infinity.
pub const MAX_TOTAL_WEIGHT: Cost = f64::MAX / 2.0;

/// Outgoing adjacency record. `target` is the dense index of `target_id` in the owning graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub target_id: VertexId,
    pub target: usize,
    pub weight: Cost,
}

#[derive(Clone, Debug)]
pub struct Vertex {
    id: VertexId,
    edges: Vec<Edge>,
    length: Option<Cost>,
}

impl Vertex {
    fn new(id: VertexId) -> Self {
        Self {
            id,
            edges: Vec::new(),
            length: None,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Finalized distance from the last search's source. `None` until a search has settled this vertex,
    /// `Some(f64::INFINITY)` when it was unreachable.
    pub fn length(&self) -> Option<Cost> {
        self.length
    }
}

/// Directed graph with non-negative weights. Vertices live in a dense `Vec` and are addressed by
/// index internally; the id map gives O(1) lookup from the external id.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<VertexId, usize, FnvBuildHasher>,
    edge_count: usize,
    total_weight: Cost,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity_and_hasher(vertices, FnvBuildHasher::default()),
            edge_count: 0,
            total_weight: 0.0,
        }
    }

    /// Returns the index of the vertex with this id, creating it if absent.
    pub fn get_or_create(&mut self, id: VertexId) -> usize {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(id));
        self.index.insert(id, idx);
        idx
    }

    /// Appends a directed edge, creating either endpoint if missing. A rejected weight leaves the graph untouched.
    pub fn add_edge(&mut self, from_id: VertexId, to_id: VertexId, weight: Cost) -> Result<()> {
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(SspError::InvalidWeight {
                from: from_id,
                to: to_id,
                weight,
            });
        }
        let from = self.get_or_create(from_id);
        let target = self.get_or_create(to_id);
        self.vertices[from].edges.push(Edge {
            target_id: to_id,
            target,
            weight,
        });
        self.edge_count += 1;
        self.total_weight += weight;
        Ok(())
    }

    pub fn lookup(&self, id: VertexId) -> Option<&Vertex> {
        self.index.get(&id).map(|&idx| &self.vertices[idx])
    }

    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn vertex(&self, idx: usize) -> &Vertex {
        &self.vertices[idx]
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `None` if the id is unknown or no search has settled it yet.
    pub fn distance(&self, id: VertexId) -> Option<Cost> {
        self.lookup(id).and_then(Vertex::length)
    }

    /// Sum of every edge weight, parallel edges included.
    pub fn total_weight(&self) -> Cost {
        self.total_weight
    }

    /// Resolves a search source into its dense index, rejecting graphs no search can run on.
    pub(crate) fn search_source(&self, source_id: VertexId) -> Result<usize> {
        if self.is_empty() {
            return Err(SspError::EmptyGraph);
        }
        if !(self.total_weight <= MAX_TOTAL_WEIGHT) {
            return Err(SspError::WeightOverflow {
                total: self.total_weight,
            });
        }
        self.index_of(source_id)
            .ok_or(SspError::UnknownSource(source_id))
    }

    pub(crate) fn reset_lengths(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.length = None;
        }
    }

    pub(crate) fn settle(&mut self, idx: usize, length: Cost) {
        let vertex = &mut self.vertices[idx];
        debug_assert!(vertex.length.is_none(), "vertex {} settled twice", vertex.id);
        vertex.length = Some(length);
    }
}
