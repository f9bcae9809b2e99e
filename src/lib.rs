//! Single-source shortest paths over non-negative weighted digraphs, driven by an indexed
//! min-heap with decrease-key.
//!
//! ```no_run
//! let mut graph = indexed_ssp::load("graph.txt")?;
//! indexed_ssp::shortest_paths(&mut graph, 1)?;
//! println!("{:?}", indexed_ssp::distance(&graph, 7));
//! # Ok::<(), indexed_ssp::SspError>(())
//! ```

pub mod bellman_ford;
pub mod dijkstra;
mod error;
pub mod graph;
pub mod heap;
pub mod loader;
pub mod orx_dijkstra;
pub mod search;

pub use error::{Result, SspError};
pub use graph::{Cost, Edge, Graph, Vertex, VertexId, MAX_TOTAL_WEIGHT};
pub use heap::{IndexedMinHeap, NOT_IN_HEAP};
pub use loader::{load, load_csv, parse_adjacency, parse_csv};
pub use search::{shortest_paths, Search, Settled};

/// Finalized distance of `id` after `shortest_paths`. `None` for an unknown id (or before any search),
/// `Some(f64::INFINITY)` when unreachable.
pub fn distance(graph: &Graph, id: VertexId) -> Option<Cost> {
    graph.distance(id)
}
