use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::error::Result;
use crate::graph::{Cost, Graph, VertexId};

/// Dijkstra from `source_id` to all vertices on a `BinaryHeap` with lazy deletion: stale entries are
/// pushed instead of decreased and skipped when popped. Returns distances by vertex index,
/// `f64::INFINITY` when unreachable.
pub fn dijkstra_lazy(graph: &Graph, source_id: VertexId) -> Result<Vec<Cost>> {
    let start = graph.search_source(source_id)?;
    let mut dist = vec![f64::INFINITY; graph.len()];
    let mut heap = BinaryHeap::new();

    dist[start] = 0.0;
    // Reverse for min-heap
    heap.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
        if cost > dist[node] {
            continue;
        }
        for edge in graph.vertex(node).edges() {
            let next_cost = cost + edge.weight;
            if next_cost < dist[edge.target] {
                dist[edge.target] = next_cost;
                heap.push(Reverse((OrderedFloat(next_cost), edge.target)));
            }
        }
    }
    Ok(dist)
}
