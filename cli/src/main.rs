//! Routegraph CLI: travelling-salesman demonstration
//!
//! Wires a fixed list of cities into a complete directed graph with
//! Euclidean distances as edge weights, then asks the library for the
//! best route from the first city to the last that visits every city.

use anyhow::{bail, Result};
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use routegraph::{EdgeSpec, Graph, GraphValue, Metric};
use serde::Serialize;
use std::fmt;
use tracing::info;

/// City coordinates for the demo instance
const CITIES: [(&str, f64, f64); 11] = [
    ("A", 5.681818, 63.860370),
    ("B", 11.850649, 83.983573),
    ("C", 13.798701, 65.092402),
    ("D", 16.883117, 40.451745),
    ("E", 23.782468, 56.262834),
    ("F", 25.000000, 31.211499),
    ("G", 29.951299, 41.683778),
    ("H", 31.331169, 25.256674),
    ("I", 37.175325, 37.577002),
    ("J", 39.935065, 19.096509),
    ("K", 46.834416, 29.979466),
];

/// A point in space carried as the node value of a city
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
struct Coordinate {
    x: f64,
    y: f64,
    z: f64,
}

impl Coordinate {
    fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y, z: 0.0 }
    }

    /// Euclidean distance to another coordinate
    fn distance(&self, other: &Coordinate) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

// Coordinates are stored, never summed or ordered
impl GraphValue for Coordinate {}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum MetricArg {
    /// Sum of edge weights (distances)
    EdgeWeight,
    /// Sum of node values
    NodeValue,
    /// Node-value sum with edge weights accumulated alongside
    CombinedValue,
    /// Node count of the path
    NumberOfNodes,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::EdgeWeight => Metric::EdgeWeight,
            MetricArg::NodeValue => Metric::NodeValue,
            MetricArg::CombinedValue => Metric::CombinedValue,
            MetricArg::NumberOfNodes => Metric::NumberOfNodes,
        }
    }
}

#[derive(Parser)]
#[command(name = "routegraph-cli", version, about = "Routegraph travelling-salesman demo")]
struct Cli {
    /// Metric used to score routes
    #[arg(long, value_enum, default_value = "edge-weight")]
    metric: MetricArg,

    /// Return the maximum-scoring route instead of the minimum
    #[arg(long)]
    descending: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Connect every city to every other with its Euclidean distance.
fn build_edge_list() -> Vec<EdgeSpec<f64, Coordinate>> {
    let mut edges = Vec::new();

    for &(name_a, xa, ya) in &CITIES {
        for &(name_b, xb, yb) in &CITIES {
            if name_a != name_b {
                let a = Coordinate::new(xa, ya);
                let b = Coordinate::new(xb, yb);
                edges.push(EdgeSpec::new(name_a, name_b, a.distance(&b)).with_values(a, b));
            }
        }
    }

    edges
}

fn city_table() -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["City", "X", "Y"]);

    for &(name, x, y) in &CITIES {
        table.add_row([name.to_string(), format!("{:09.6}", x), format!("{:09.6}", y)]);
    }

    table
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut graph: Graph<f64, Coordinate> = Graph::new();
    if !graph.load_edge_list(build_edge_list()) {
        bail!("graph data load failed");
    }
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph data loaded"
    );

    if !cli.json {
        println!("{}", city_table());
        println!("\nEnumerating routes with a recursive depth-first search...");
    }

    let names: Vec<&str> = CITIES.iter().map(|&(name, _, _)| name).collect();
    let route_name = format!("{}-{}", names[0], names[names.len() - 1]);
    let metric = Metric::from(cli.metric);

    match graph.get_route(&names, false, !cli.descending, metric) {
        Ok(route) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&route)?);
            } else {
                let kind = if cli.descending { "longest" } else { "shortest" };
                println!(
                    "\nThe {} route for {} is through {}: {} units",
                    kind, route_name, route.label, route.score
                );
            }
        }
        Err(err) => bail!("route query failed: {}", err),
    }

    Ok(())
}
