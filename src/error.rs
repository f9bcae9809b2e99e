use crate::graph::VertexId;

/// Errors surfaced while loading a graph or starting a search.
///
/// Heap misuse (extracting from an empty heap, raising a key, touching a
/// settled vertex) is a bug in the caller and panics instead.
#[derive(Debug, thiserror::Error)]
pub enum SspError {
    /// Malformed line, unparseable id or weight, or an edge token without a comma.
    #[error("line {line}: {message}")]
    InputFormat { line: usize, message: String },

    /// Negative or non-finite edge weight.
    #[error("invalid weight {weight} on edge {from} -> {to}: weights must be finite and >= 0")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    #[error("source vertex {0} is not in the graph")]
    UnknownSource(VertexId),

    #[error("queried vertex {0} is not in the graph")]
    UnknownVertex(VertexId),

    #[error("cannot search an empty graph")]
    EmptyGraph,

    /// Edge weights sum past `MAX_TOTAL_WEIGHT`, so a path length could overflow to infinity.
    #[error("sum of edge weights {total} is too large: path lengths could overflow to infinity")]
    WeightOverflow { total: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SspError>;
