//! Bellman-Ford single-source shortest paths, O(V * E).
//!
//! Relaxes every edge until a full pass changes nothing. With non-negative weights there is no
//! negative cycle to detect, so at most V - 1 passes are needed.

use crate::error::Result;
use crate::graph::{Cost, Graph, VertexId};

pub fn bellman_ford(graph: &Graph, source_id: VertexId) -> Result<Vec<Cost>> {
    let start = graph.search_source(source_id)?;
    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    dist[start] = 0.0;

    for _ in 1..n {
        let mut updated = false;
        for u in 0..n {
            if dist[u] == f64::INFINITY {
                continue;
            }
            for edge in graph.vertex(u).edges() {
                let candidate = dist[u] + edge.weight;
                if candidate < dist[edge.target] {
                    dist[edge.target] = candidate;
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }
    Ok(dist)
}
