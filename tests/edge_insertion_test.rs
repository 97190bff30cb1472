//! Integration tests for the edge insertion engine (check_and_add_edge,
//! connect_nodes, dedup policy, topology building).

use mapgraph::{Edge, EdgeOutcome, HabitatType, MapGraph};

fn create_map_node(graph: &mut MapGraph, x: f32, y: f32) -> usize {
    graph.create_node(x, y, HabitatType::Distributary)
}

fn require_valid(graph: &MapGraph) -> mapgraph::ValidationReport {
    let report = graph.validate();
    assert!(report.passed, "validation failed: {:?}", report.errors);
    report
}

#[test]
fn test_simple_two_node_graph_via_check_and_add_edge() {
    let mut graph = MapGraph::new();
    let a = graph.create_node(1.0, 0.0, HabitatType::Distributary);
    let b = graph.create_node(1.0, 0.0, HabitatType::BlindChannel);

    let outcome = graph.check_and_add_edge(Edge::new(a, b, 5.0));
    assert_eq!(outcome, EdgeOutcome::Added);

    let report = require_valid(&graph);
    assert_eq!(report.total_unique_edges, 1);

    assert_eq!(graph.node(a).unwrap().out_degree(), 1);
    assert_eq!(graph.node(b).unwrap().in_degree(), 1);
    assert!(graph.node(a).unwrap().edges_in.is_empty());
    assert!(graph.node(b).unwrap().edges_out.is_empty());
}

#[test]
fn test_connect_nodes_helper() {
    let mut graph = MapGraph::new();
    let a = create_map_node(&mut graph, 0.0, 0.0);
    let b = create_map_node(&mut graph, 1.0, 0.0);
    let c = create_map_node(&mut graph, 2.0, 0.0);

    assert!(graph.connect_nodes(a, b, 3.0).is_added());
    assert!(graph.connect_nodes(b, c, 4.0).is_added());

    let report = require_valid(&graph);
    assert_eq!(report.total_unique_edges, 2);

    // b should have 1 edge in (from a) and 1 edge out (to c)
    assert_eq!(graph.node(b).unwrap().in_degree(), 1);
    assert_eq!(graph.node(b).unwrap().out_degree(), 1);
}

#[test]
fn test_self_loop_is_rejected() {
    let mut graph = MapGraph::new();
    let a = create_map_node(&mut graph, 0.0, 0.0);

    let outcome = graph.check_and_add_edge(Edge::new(a, a, 1.0));
    assert_eq!(outcome, EdgeOutcome::RejectedSelfLoop);

    assert!(graph.node(a).unwrap().edges_in.is_empty());
    assert!(graph.node(a).unwrap().edges_out.is_empty());

    // connect_nodes applies the same filter
    let outcome = graph.connect_nodes(a, a, 1.0);
    assert_eq!(outcome, EdgeOutcome::RejectedSelfLoop);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_exact_duplicate_is_rejected() {
    let mut graph = MapGraph::new();
    let a = create_map_node(&mut graph, 0.0, 0.0);
    let b = create_map_node(&mut graph, 1.0, 0.0);

    assert!(graph.check_and_add_edge(Edge::new(a, b, 5.0)).is_added());

    let outcome = graph.check_and_add_edge(Edge::new(a, b, 5.0));
    assert_eq!(outcome, EdgeOutcome::RejectedDuplicate);

    // Duplicate detection ignores length: same ordered pair is enough
    let outcome = graph.check_and_add_edge(Edge::new(a, b, 9.0));
    assert_eq!(outcome, EdgeOutcome::RejectedDuplicate);

    let report = require_valid(&graph);
    assert_eq!(report.total_unique_edges, 1);
}

#[test]
fn test_check_and_add_edge_rejects_reverse_duplicate() {
    let mut graph = MapGraph::new();
    let a = create_map_node(&mut graph, 0.0, 0.0);
    let b = create_map_node(&mut graph, 1.0, 0.0);

    assert!(graph.check_and_add_edge(Edge::new(a, b, 5.0)).is_added());

    let outcome = graph.check_and_add_edge(Edge::new(b, a, 5.0));
    assert_eq!(outcome, EdgeOutcome::RejectedReverseDuplicate);

    // Still exactly one directed edge: a -> b
    assert_eq!(graph.node(a).unwrap().out_degree(), 1);
    assert_eq!(graph.node(b).unwrap().in_degree(), 1);
    assert!(graph.node(a).unwrap().edges_in.is_empty());
    assert!(graph.node(b).unwrap().edges_out.is_empty());

    require_valid(&graph);
}

#[test]
fn test_bidirectional_pair_via_connect_nodes() {
    let mut graph = MapGraph::new();
    let a = create_map_node(&mut graph, 0.0, 0.0);
    let b = create_map_node(&mut graph, 1.0, 0.0);

    // Two directed edges: a -> b and b -> a
    assert!(graph.connect_nodes(a, b, 3.0).is_added());
    assert!(graph.connect_nodes(b, a, 3.0).is_added());

    assert_eq!(graph.node(a).unwrap().out_degree(), 1);
    assert_eq!(graph.node(a).unwrap().in_degree(), 1);
    assert_eq!(graph.node(b).unwrap().out_degree(), 1);
    assert_eq!(graph.node(b).unwrap().in_degree(), 1);

    let report = require_valid(&graph);
    assert_eq!(report.total_unique_edges, 2);
}

#[test]
fn test_connect_nodes_still_rejects_exact_duplicate() {
    let mut graph = MapGraph::new();
    let a = create_map_node(&mut graph, 0.0, 0.0);
    let b = create_map_node(&mut graph, 1.0, 0.0);

    assert!(graph.connect_nodes(a, b, 3.0).is_added());
    assert_eq!(graph.connect_nodes(a, b, 3.0), EdgeOutcome::RejectedDuplicate);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_star_topology() {
    let mut graph = MapGraph::new();
    let center = create_map_node(&mut graph, 0.0, 0.0);

    let mut spokes = Vec::new();
    for i in 1..=5 {
        let spoke = create_map_node(&mut graph, i as f32, 0.0);
        assert!(graph.connect_nodes(center, spoke, i as f32).is_added());
        spokes.push(spoke);
    }

    let report = require_valid(&graph);
    assert_eq!(report.total_unique_edges, 5);

    assert_eq!(graph.node(center).unwrap().out_degree(), 5);
    assert!(graph.node(center).unwrap().edges_in.is_empty());

    for spoke in spokes {
        assert_eq!(graph.node(spoke).unwrap().in_degree(), 1);
        assert!(graph.node(spoke).unwrap().edges_out.is_empty());
    }
}

#[test]
fn test_linear_chain() {
    const CHAIN_LENGTH: usize = 6;

    let mut graph = MapGraph::new();
    let nodes: Vec<_> = (0..CHAIN_LENGTH)
        .map(|i| create_map_node(&mut graph, i as f32, 0.0))
        .collect();

    for i in 0..CHAIN_LENGTH - 1 {
        assert!(graph.connect_nodes(nodes[i], nodes[i + 1], 1.0).is_added());
    }

    let report = require_valid(&graph);
    assert_eq!(report.total_unique_edges, CHAIN_LENGTH - 1);

    // Interior nodes have 1 in + 1 out; endpoints have only 1
    assert_eq!(graph.node(nodes[0]).unwrap().out_degree(), 1);
    assert!(graph.node(nodes[0]).unwrap().edges_in.is_empty());
    assert_eq!(graph.node(nodes[CHAIN_LENGTH - 1]).unwrap().in_degree(), 1);
    assert!(graph.node(nodes[CHAIN_LENGTH - 1]).unwrap().edges_out.is_empty());

    for &id in &nodes[1..CHAIN_LENGTH - 1] {
        assert_eq!(graph.node(id).unwrap().in_degree(), 1);
        assert_eq!(graph.node(id).unwrap().out_degree(), 1);
    }
}

#[test]
fn test_bulk_construction_with_rejected_requests() {
    // Build a small graph entirely through check_and_add_edge, the way the
    // loader does, with noisy duplicate and reversed requests mixed in.
    let mut graph = MapGraph::new();
    let n0 = create_map_node(&mut graph, 0.0, 0.0);
    let n1 = create_map_node(&mut graph, 1.0, 0.0);
    let n2 = create_map_node(&mut graph, 2.0, 0.0);
    let n3 = create_map_node(&mut graph, 0.0, 1.0);

    assert!(graph.check_and_add_edge(Edge::new(n0, n1, 1.0)).is_added());
    assert!(graph.check_and_add_edge(Edge::new(n1, n2, 1.0)).is_added());
    assert!(graph.check_and_add_edge(Edge::new(n0, n3, 1.5)).is_added());
    assert!(graph.check_and_add_edge(Edge::new(n3, n2, 1.5)).is_added());

    // Duplicates and reverses must be filtered
    assert_eq!(
        graph.check_and_add_edge(Edge::new(n0, n1, 1.0)),
        EdgeOutcome::RejectedDuplicate
    );
    assert_eq!(
        graph.check_and_add_edge(Edge::new(n1, n0, 1.0)),
        EdgeOutcome::RejectedReverseDuplicate
    );
    assert_eq!(
        graph.check_and_add_edge(Edge::new(n2, n1, 1.0)),
        EdgeOutcome::RejectedReverseDuplicate
    );

    let report = require_valid(&graph);
    assert_eq!(report.total_unique_edges, 4);

    // n0: out to n1 and n3
    assert_eq!(graph.node(n0).unwrap().out_degree(), 2);
    assert!(graph.node(n0).unwrap().edges_in.is_empty());

    // n2: in from n1 and n3
    assert_eq!(graph.node(n2).unwrap().in_degree(), 2);
    assert!(graph.node(n2).unwrap().edges_out.is_empty());
}

#[test]
fn test_edge_count_matches_accepted_insertions() {
    let mut graph = MapGraph::new();
    let ids: Vec<_> = (0..8)
        .map(|i| create_map_node(&mut graph, i as f32, 0.0))
        .collect();

    let mut accepted = 0;
    for i in 0..ids.len() {
        for j in 0..ids.len() {
            if graph.check_and_add_edge(Edge::new(ids[i], ids[j], 1.0)).is_added() {
                accepted += 1;
            }
        }
    }

    let report = require_valid(&graph);
    assert_eq!(graph.edge_count(), accepted);
    assert_eq!(report.total_unique_edges, accepted);

    // All-pairs submission over 8 nodes keeps one direction per unordered pair
    assert_eq!(accepted, 8 * 7 / 2);
}

#[test]
fn test_insertion_preserves_edge_payload() {
    let mut graph = MapGraph::new();
    let a = create_map_node(&mut graph, 0.0, 0.0);
    let b = create_map_node(&mut graph, 1.0, 0.0);

    graph.check_and_add_edge(Edge::new(a, b, 7.5));

    let out = graph.node(a).unwrap().edges_out[0];
    let mirrored = graph.node(b).unwrap().edges_in[0];
    assert_eq!(out, mirrored);
    assert_eq!(out.source, a);
    assert_eq!(out.target, b);
    assert_eq!(out.length, 7.5);
}
