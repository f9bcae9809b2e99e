// Dijkstra over the indexed min-heap, writing each vertex's length back onto the graph as it is settled.
use tracing::debug;

use crate::error::{Result, SspError};
use crate::graph::{Cost, Graph, VertexId};
use crate::heap::IndexedMinHeap;

/// A vertex leaving the heap, in extraction order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settled {
    pub index: usize,
    pub id: VertexId,
    pub length: Cost,
}

/// Step-wise search. Each call to `next` extracts the current minimum, finalizes its length and relaxes
/// its outgoing edges. The graph stays mutably borrowed until the search is dropped.
pub struct Search<'g> {
    graph: &'g mut Graph,
    heap: IndexedMinHeap,
}

impl<'g> Search<'g> {
    pub fn new(graph: &'g mut Graph, source_id: VertexId) -> Result<Self> {
        let source = graph.search_source(source_id)?;

        graph.reset_lengths();
        let mut scores = vec![f64::INFINITY; graph.len()];
        scores[source] = 0.0;
        let heap = IndexedMinHeap::build(scores);
        debug!(source = source_id, vertices = graph.len(), edges = graph.edge_count(), "starting search");

        Ok(Self { graph, heap })
    }

    /// Vertices not yet settled.
    pub fn remaining(&self) -> usize {
        self.heap.len()
    }

    pub fn heap(&self) -> &IndexedMinHeap {
        &self.heap
    }

    fn relax(&mut self, u: usize, length: Cost) {
        for edge in self.graph.vertex(u).edges() {
            let v = edge.target;
            // Settled vertices are final; backward edges to them are skipped.
            if !self.heap.contains(v) {
                continue;
            }
            let candidate = length + edge.weight;
            if candidate < self.heap.score(v) {
                self.heap.decrease_key(v, candidate);
            }
        }
    }
}

impl Iterator for Search<'_> {
    type Item = Settled;

    fn next(&mut self) -> Option<Settled> {
        if self.heap.is_empty() {
            return None;
        }
        let (u, length) = self.heap.extract_min();
        self.graph.settle(u, length);
        self.relax(u, length);
        Some(Settled {
            index: u,
            id: self.graph.vertex(u).id(),
            length,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl ExactSizeIterator for Search<'_> {}

/// Runs the search from `source_id` to completion. Afterwards every vertex's `length()` is set,
/// `f64::INFINITY` for vertices the source cannot reach.
pub fn shortest_paths(graph: &mut Graph, source_id: VertexId) -> Result<()> {
    let mut settled = 0;
    let mut reachable = 0;
    for s in Search::new(graph, source_id)? {
        settled += 1;
        if s.length.is_finite() {
            reachable += 1;
        }
    }
    debug_assert_eq!(settled, graph.len());
    debug!(source = source_id, settled, reachable, "search finished");
    Ok(())
}
