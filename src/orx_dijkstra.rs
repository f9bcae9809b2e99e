/*
Dijkstra backed by orx-priority-queue's decrease-key heap, used as a second decrease-key implementation
to cross-check the indexed heap.
*/

use orx_priority_queue::*;

use crate::error::Result;
use crate::graph::{Cost, Graph, VertexId};

pub fn dijkstra_orx(graph: &Graph, source_id: VertexId) -> Result<Vec<Cost>> {
    let start = graph.search_source(source_id)?;
    let mut dist = vec![f64::INFINITY; graph.len()];
    let mut settled = vec![false; graph.len()];
    let mut pq: BinaryHeapWithMap<usize, Cost> = BinaryHeapWithMap::new();

    dist[start] = 0.0;
    pq.decrease_key_or_push(&start, 0.0);

    while let Some((node, cost)) = pq.pop() {
        settled[node] = true;
        for edge in graph.vertex(node).edges() {
            if settled[edge.target] {
                continue;
            }
            let next_cost = cost + edge.weight;
            if next_cost < dist[edge.target] {
                dist[edge.target] = next_cost;
                pq.decrease_key_or_push(&edge.target, next_cost);
            }
        }
    }
    Ok(dist)
}
