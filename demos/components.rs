//! Example that builds a graph from edges given on the command line and
//! prints it, a depth-first search, and its connected components.
//!
//! Usage:
//!   cargo run --example components -- --edge 1,2 --edge 2,3 --edge 10,12 --start 1
//!   cargo run --example components -- --matrix 6 --edge 0,1 --edge 2,4 --start 0

use std::process;

use adjgraph::prelude::*;
use clap::Parser;

/// Build an undirected graph from edge pairs and report on it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// An edge as `from,to`; may be repeated
    #[arg(long = "edge", value_parser = parse_edge)]
    edges: Vec<(i64, i64)>,

    /// Use an adjacency matrix with this many vertices instead of a list
    #[arg(long)]
    matrix: Option<usize>,

    /// Vertex to start the depth-first search from
    #[arg(long, default_value_t = 0)]
    start: i64,
}

fn parse_edge(s: &str) -> Result<(i64, i64), String> {
    let (from, to) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `from,to`, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i64>()
            .map_err(|err| format!("bad vertex '{v}': {err}"))
    };
    Ok((parse(from)?, parse(to)?))
}

fn report<G: Graph>(graph: &G, start: G::VertexId)
where
    G: std::fmt::Debug,
{
    println!("{graph:?}");
    println!("vertices: {}", graph.num_vertices());
    println!("edges: {}", graph.num_edges());
    match graph.depth_first_search(start) {
        Some(visited) => println!("dfs from {start:?}: {visited:?}"),
        None => println!("dfs from {start:?}: no such vertex"),
    }
    println!("components: {}", graph.count_connected_components());
}

fn run_list(args: &Args) -> Result<(), String> {
    let narrow = |v: i64| i32::try_from(v).map_err(|_| format!("vertex {v} does not fit in i32"));
    let mut graph = AdjacencyListGraph::new();
    for &(from, to) in &args.edges {
        graph.add_edge(narrow(from)?, narrow(to)?);
    }
    report(&graph, narrow(args.start)?);
    Ok(())
}

fn run_matrix(size: usize, args: &Args) -> Result<(), String> {
    let index = |v: i64| usize::try_from(v).map_err(|_| format!("vertex {v} is negative"));
    let mut graph: AdjacencyMatrixGraph = AdjacencyMatrixGraph::with_size(size);
    for &(from, to) in &args.edges {
        if !graph.add_edge(index(from)?, index(to)?) {
            return Err(format!("edge {from},{to} is out of range for size {size}"));
        }
    }
    report(&graph, index(args.start)?);
    Ok(())
}

fn main() {
    let args = Args::parse();

    let result = match args.matrix {
        Some(size) => run_matrix(size, &args),
        None => run_list(&args),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
