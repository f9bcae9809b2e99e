/*
Graph loaders.

Adjacency format: one vertex per line, the head id first, then any number of `target,weight` tokens
separated by whitespace. Empty lines are skipped and line order is irrelevant.

CSV format: a headed edge list `node_id,neighbor_id,weight`, one directed edge per record.
*/

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::error::{Result, SspError};
use crate::graph::{Cost, Graph, VertexId};

fn format_error(line: usize, message: String) -> SspError {
    SspError::InputFormat { line, message }
}

fn parse_id(token: &str, line: usize, what: &str) -> Result<VertexId> {
    token
        .parse::<VertexId>()
        .map_err(|e| format_error(line, format!("{} `{}` is not a vertex id: {}", what, token, e)))
}

fn parse_weight(token: &str, line: usize) -> Result<Cost> {
    token
        .parse::<Cost>()
        .map_err(|e| format_error(line, format!("weight `{}` is not a number: {}", token, e)))
}

/// Parses one `target,weight` token. The id and the weight are checked separately so that a bad id
/// is reported even when the weight parses.
fn parse_edge_token(token: &str, line: usize) -> Result<(VertexId, Cost)> {
    let (target, weight) = token
        .split_once(',')
        .ok_or_else(|| format_error(line, format!("edge `{}` is missing a comma", token)))?;
    let target = parse_id(target, line, "edge target")?;
    let weight = parse_weight(weight, line)?;
    Ok((target, weight))
}

/// Builds a graph from the adjacency-list format. On error nothing is returned.
pub fn parse_adjacency<R: BufRead>(mut reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = std::str::from_utf8(&buf)
            .map_err(|e| format_error(line_no, format!("line is not valid UTF-8: {}", e)))?;
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            continue;
        };
        let from = parse_id(head, line_no, "vertex")?;
        graph.get_or_create(from);
        for token in tokens {
            let (to, weight) = parse_edge_token(token, line_no)?;
            graph.add_edge(from, to, weight)?;
        }
    }
    Ok(graph)
}

/// Loads an adjacency-list file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = parse_adjacency(BufReader::new(file))?;
    info!(
        path = %path.display(),
        vertices = graph.len(),
        edges = graph.edge_count(),
        "loaded adjacency list"
    );
    Ok(graph)
}

/// Builds a graph from a headed `node_id,neighbor_id,weight` CSV edge list.
pub fn parse_csv<R: Read>(reader: R) -> Result<Graph> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = Graph::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        if record.len() != 3 {
            return Err(format_error(
                line,
                format!("expected 3 fields (node_id,neighbor_id,weight), found {}", record.len()),
            ));
        }
        let from = parse_id(&record[0], line, "node_id")?;
        let to = parse_id(&record[1], line, "neighbor_id")?;
        let weight = parse_weight(&record[2], line)?;
        graph.add_edge(from, to, weight)?;
    }
    Ok(graph)
}

/// Loads a CSV edge-list file.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let graph = parse_csv(File::open(path)?)?;
    info!(
        path = %path.display(),
        vertices = graph.len(),
        edges = graph.edge_count(),
        "loaded csv edge list"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(err: SspError) -> usize {
        match err {
            SspError::InputFormat { line, .. } => line,
            other => panic!("expected InputFormat, got {:?}", other),
        }
    }

    #[test]
    fn parses_heads_and_edges() {
        let graph = parse_adjacency("1\t2,1 3,4\n2 3,2\n3\n".as_bytes()).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        let targets: Vec<_> = graph.lookup(1).unwrap().edges().iter().map(|e| (e.target_id, e.weight)).collect();
        assert_eq!(targets, vec![(2, 1.0), (3, 4.0)]);
    }

    #[test]
    fn tolerates_blank_lines_and_extra_whitespace() {
        let graph = parse_adjacency("\n  1   2,0.5    \n\n2\t \n   \n".as_bytes()).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.lookup(1).unwrap().edges()[0].weight, 0.5);
    }

    #[test]
    fn target_only_vertex_exists_without_edges() {
        let graph = parse_adjacency("1 5,2\n".as_bytes()).unwrap();
        assert!(graph.lookup(5).unwrap().edges().is_empty());
    }

    #[test]
    fn bad_head_reports_line() {
        let err = parse_adjacency("1 2,1\nx 2,1\n".as_bytes()).unwrap_err();
        assert_eq!(line_of(err), 2);
    }

    #[test]
    fn missing_comma_is_a_format_error() {
        let err = parse_adjacency("1\n2\n3 4\n".as_bytes()).unwrap_err();
        assert_eq!(line_of(err), 3);
    }

    #[test]
    fn bad_target_is_not_masked_by_good_weight() {
        let err = parse_adjacency("1 abc,2.5\n".as_bytes()).unwrap_err();
        match err {
            SspError::InputFormat { line: 1, message } => assert!(message.contains("abc"), "{message}"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bad_weight_is_a_format_error() {
        assert_eq!(line_of(parse_adjacency("1 2,\n".as_bytes()).unwrap_err()), 1);
        assert_eq!(line_of(parse_adjacency("1 2,3,4\n".as_bytes()).unwrap_err()), 1);
        assert_eq!(line_of(parse_adjacency("1 -2,3\n".as_bytes()).unwrap_err()), 1);
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let err = parse_adjacency(&b"1 2,1\n\xff 3,1\n"[..]).unwrap_err();
        match err {
            SspError::InputFormat { line: 2, message } => assert!(message.contains("UTF-8"), "{message}"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let graph = parse_adjacency("1 2,1\r\n2 3,4".as_bytes()).unwrap();
        assert_eq!(graph.lookup(2).unwrap().edges()[0].weight, 4.0);
    }

    #[test]
    fn negative_or_infinite_weight_is_invalid() {
        assert!(matches!(
            parse_adjacency("1 2,-0.5\n".as_bytes()),
            Err(SspError::InvalidWeight { from: 1, to: 2, .. })
        ));
        assert!(matches!(
            parse_adjacency("1 2,inf\n".as_bytes()),
            Err(SspError::InvalidWeight { .. })
        ));
        assert!(matches!(
            parse_adjacency("1 2,NaN\n".as_bytes()),
            Err(SspError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn csv_edge_list() {
        let input = "node_id,neighbor_id,weight\n1,2,3.5\n2, 3, 1\n1,3,10\n";
        let graph = parse_csv(input.as_bytes()).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.lookup(2).unwrap().edges()[0].weight, 1.0);
    }

    #[test]
    fn csv_reports_bad_records() {
        let err = parse_csv("node_id,neighbor_id,weight\n1,2,1\n1,x,1\n".as_bytes()).unwrap_err();
        assert_eq!(line_of(err), 3);
        assert!(matches!(
            parse_csv("node_id,neighbor_id,weight\n1,2,-1\n".as_bytes()),
            Err(SspError::InvalidWeight { .. })
        ));
    }
}
