use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use csv::Writer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use indexed_ssp::bellman_ford::bellman_ford;
use indexed_ssp::dijkstra::dijkstra_lazy;
use indexed_ssp::orx_dijkstra::dijkstra_orx;
use indexed_ssp::{load, load_csv, shortest_paths, Cost, Graph, SspError, VertexId};

#[derive(Parser, Debug)]
#[command(name = "ssp")]
#[command(about = "Build a graph from a weighted adjacency list and run single-source shortest paths from a vertex id.", long_about = None)]
struct Cli {
    /// Path to the graph file
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = InputFormat::Adjacency)]
    format: InputFormat,

    /// Source vertex id to run SSP from
    #[arg(short, long, default_value_t = 1)]
    source: VertexId,

    #[arg(short, long, value_enum, default_value_t = SspAlgorithm::Indexed)]
    algorithm: SspAlgorithm,

    /// Vertex ids whose distances are printed, comma-separated, in the given order
    #[arg(short, long, value_delimiter = ',')]
    query: Vec<VertexId>,

    /// Print queried distances truncated to integers
    #[arg(long, default_value_t = false)]
    as_integer: bool,

    /// Output CSV (vertex_id, distance). If omitted and no query is given, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Include unreachable vertices in the CSV with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Number of times to repeat the search, for timing
    #[arg(short, long, default_value_t = 1)]
    runs: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// `id target,weight target,weight ...` per line
    Adjacency,
    /// Headed `node_id,neighbor_id,weight` edge list
    Csv,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SspAlgorithm {
    /// Indexed min-heap with decrease-key
    Indexed,
    /// BinaryHeap with lazy deletion
    Lazy,
    /// orx-priority-queue decrease-key heap
    Orx,
    BellmanFord,
}

impl SspAlgorithm {
    /// Distances by vertex index.
    fn run(&self, graph: &mut Graph, source: VertexId) -> indexed_ssp::Result<Vec<Cost>> {
        match self {
            SspAlgorithm::Indexed => {
                shortest_paths(graph, source)?;
                Ok(graph
                    .vertices()
                    .map(|v| v.length().unwrap_or(f64::INFINITY))
                    .collect())
            }
            SspAlgorithm::Lazy => dijkstra_lazy(graph, source),
            SspAlgorithm::Orx => dijkstra_orx(graph, source),
            SspAlgorithm::BellmanFord => bellman_ford(graph, source),
        }
    }
}

fn render(d: Cost, as_integer: bool) -> String {
    if !d.is_finite() {
        String::from("inf")
    } else if as_integer {
        (d as i64).to_string()
    } else {
        d.to_string()
    }
}

/// Distances of `query` ids in the given order, comma-separated.
fn format_query(graph: &Graph, dist: &[Cost], query: &[VertexId], as_integer: bool) -> indexed_ssp::Result<String> {
    let mut values = Vec::with_capacity(query.len());
    for &id in query {
        let idx = graph.index_of(id).ok_or(SspError::UnknownVertex(id))?;
        values.push(render(dist[idx], as_integer));
    }
    Ok(values.join(","))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut graph = match cli.format {
        InputFormat::Adjacency => load(&cli.input),
        InputFormat::Csv => load_csv(&cli.input),
    }
    .with_context(|| format!("loading {}", cli.input.display()))?;

    info!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        "graph ready"
    );

    let mut dist = Vec::new();
    let mut duration_millis = Vec::with_capacity(cli.runs);
    for _ in 0..cli.runs.max(1) {
        let now = Instant::now();
        dist = cli
            .algorithm
            .run(&mut graph, cli.source)
            .with_context(|| format!("running {:?} from vertex {}", cli.algorithm, cli.source))?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
    }
    info!(algorithm = ?cli.algorithm, runs = duration_millis.len(), millis = ?duration_millis, "search done");

    if !cli.query.is_empty() {
        let line = format_query(&graph, &dist, &cli.query, cli.as_integer).context("resolving query")?;
        println!("{}", line);
    }

    if let Some(out_path) = &cli.out {
        let mut wtr = Writer::from_path(out_path)
            .with_context(|| format!("creating CSV {}", out_path.display()))?;
        wtr.write_record(["vertex_id", "distance"])?;
        let mut dist_with_idx: Vec<(usize, Cost)> = dist.iter().copied().enumerate().collect();
        dist_with_idx.sort_by(|a, b| a.1.total_cmp(&b.1));
        let mut written = 0;
        for (idx, d) in &dist_with_idx {
            if d.is_finite() || cli.include_unreachable {
                let id = graph.vertex(*idx).id();
                wtr.write_record(&[id.to_string(), render(*d, false)])?;
                written += 1;
            }
        }
        wtr.flush()?;
        info!(rows = written, path = %out_path.display(), "wrote distances");
    } else if cli.query.is_empty() {
        let reachable = dist.iter().filter(|x| x.is_finite()).count();
        println!("Vertices: {}", dist.len());
        println!("Reachable from {}: {}", cli.source, reachable);
        if let Some(maxd) = dist.iter().copied().filter(|x| x.is_finite()).max_by(|a, b| a.total_cmp(b)) {
            println!("Max finite distance: {:.2}", maxd);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexed_ssp::parse_adjacency;

    #[test]
    fn render_formats() {
        assert_eq!(render(3.5, false), "3.5");
        assert_eq!(render(3.0, false), "3");
        assert_eq!(render(3.9, true), "3");
        assert_eq!(render(f64::INFINITY, false), "inf");
        assert_eq!(render(f64::INFINITY, true), "inf");
    }

    #[test]
    fn query_follows_given_order() {
        let mut graph = parse_adjacency("1 2,1.5 3,4\n2 3,2\n3\n4\n".as_bytes()).unwrap();
        let dist = SspAlgorithm::Indexed.run(&mut graph, 1).unwrap();
        assert_eq!(format_query(&graph, &dist, &[3, 1, 4, 2], false).unwrap(), "3.5,0,inf,1.5");
        assert_eq!(format_query(&graph, &dist, &[3, 2], true).unwrap(), "3,1");
    }

    #[test]
    fn unknown_query_vertex_is_an_error() {
        let mut graph = parse_adjacency("1 2,1\n".as_bytes()).unwrap();
        let dist = SspAlgorithm::Lazy.run(&mut graph, 1).unwrap();
        assert!(matches!(
            format_query(&graph, &dist, &[2, 9], false),
            Err(SspError::UnknownVertex(9))
        ));
    }

    #[test]
    fn algorithms_agree() {
        let input = "1 2,7 3,9 6,14\n2 3,10 4,15\n3 4,11 6,2\n4 5,6\n6 5,9\n7 1,1\n";
        let mut graph = parse_adjacency(input.as_bytes()).unwrap();
        let expected = SspAlgorithm::Indexed.run(&mut graph, 1).unwrap();
        for algorithm in [SspAlgorithm::Lazy, SspAlgorithm::Orx, SspAlgorithm::BellmanFord] {
            assert_eq!(algorithm.run(&mut graph, 1).unwrap(), expected, "{:?}", algorithm);
        }
    }
}
