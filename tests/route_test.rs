use routegraph::{EdgeSpec, Graph, Metric, RouteError, RouteScore};

/// Parse a JSON edge list and load it into a fresh graph.
fn graph_from_json(json: &str) -> (Graph<f64, i64>, bool) {
    let edges: Vec<EdgeSpec<f64, i64>> = serde_json::from_str(json).unwrap();
    let mut graph = Graph::new();
    let loaded = graph.load_edge_list(edges);
    (graph, loaded)
}

#[test]
fn test_route_from_json_edge_list() {
    let (graph, loaded) = graph_from_json(
        r#"[
            {"a": "A", "b": "B", "weight": 2.0},
            {"a": "B", "b": "C", "weight": 3.0},
            {"a": "A", "b": "C", "weight": 10.0}
        ]"#,
    );

    assert!(loaded);

    let route = graph
        .get_route(&["A", "C"], false, true, Metric::EdgeWeight)
        .unwrap();
    assert_eq!(route.label, "A-B-C");
    assert_eq!(route.score, RouteScore::EdgeWeight(5.0));
}

#[test]
fn test_json_edge_list_with_values_and_bidirectional() {
    let (graph, loaded) = graph_from_json(
        r#"[
            {"a": "A", "value_a": 1, "b": "B", "value_b": 20, "weight": 2.0, "bidirectional": true},
            {"a": "B", "value_a": 20, "b": "C", "value_b": 300, "weight": 3.0, "bidirectional": true}
        ]"#,
    );

    assert!(loaded);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.is_connected("B", "A"));

    let route = graph
        .get_route(&["C", "A"], false, true, Metric::NodeValue)
        .unwrap();
    assert_eq!(route.label, "C-B-A");
    assert_eq!(route.score, RouteScore::NodeValue(321));
}

#[test]
fn test_json_edge_list_failure_wipes_graph() {
    let (graph, loaded) = graph_from_json(
        r#"[
            {"a": "A", "b": "B", "weight": 1.0},
            {"a": "B", "b": "C", "weight": 1.0},
            {"a": "A", "b": "B", "weight": 9.0}
        ]"#,
    );

    assert!(!loaded);
    assert_eq!(graph.node_count(), 0);
}

#[test]
fn test_round_trip_through_all_nodes() {
    // Complete bidirected square; the best round A..D visiting
    // everything is forced through B and C.
    let names = ["A", "B", "C", "D"];
    let mut graph: Graph<f64, i64> = Graph::new();
    for (i, &a) in names.iter().enumerate() {
        for &b in &names[i + 1..] {
            // Cheap ring edges, expensive diagonals
            let weight = if (a, b) == ("A", "C") || (a, b) == ("B", "D") {
                10.0
            } else {
                1.0
            };
            graph.connect_with_default(a, b, weight, true);
        }
    }

    let route = graph
        .get_route(&names, false, true, Metric::EdgeWeight)
        .unwrap();
    assert_eq!(route.label, "A-B-C-D");
    assert_eq!(route.score, RouteScore::EdgeWeight(3.0));
}

#[test]
fn test_missing_endpoint_is_an_error_not_a_panic() {
    let (graph, _) = graph_from_json(r#"[{"a": "A", "b": "B", "weight": 1.0}]"#);

    assert_eq!(
        graph.get_route(&["A", "Nowhere"], false, true, Metric::EdgeWeight),
        Err(RouteError::MissingNode("Nowhere".to_string()))
    );
}

#[test]
fn test_route_serializes() {
    let (graph, _) = graph_from_json(
        r#"[
            {"a": "A", "b": "B", "weight": 2.5}
        ]"#,
    );

    let route = graph
        .get_route(&["A", "B"], false, true, Metric::EdgeWeight)
        .unwrap();

    let json = serde_json::to_value(&route).unwrap();
    assert_eq!(json["label"], "A-B");
    assert_eq!(json["score"]["EdgeWeight"], 2.5);
}

#[test]
fn test_descending_and_ascending_disagree() {
    let (graph, _) = graph_from_json(
        r#"[
            {"a": "A", "b": "B", "weight": 1.0, "bidirectional": true},
            {"a": "B", "b": "C", "weight": 1.0, "bidirectional": true},
            {"a": "A", "b": "C", "weight": 5.0, "bidirectional": true}
        ]"#,
    );

    let min = graph
        .get_route(&["A", "C"], false, true, Metric::EdgeWeight)
        .unwrap();
    let max = graph
        .get_route(&["A", "C"], false, false, Metric::EdgeWeight)
        .unwrap();

    assert_eq!(min.label, "A-B-C");
    assert_eq!(min.score, RouteScore::EdgeWeight(2.0));
    assert_eq!(max.label, "A-C");
    assert_eq!(max.score, RouteScore::EdgeWeight(5.0));
}
