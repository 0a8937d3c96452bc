//! Phase 1 tests: graph container, validation errors, builder and dump.

use weighted_graph::graph::{Graph, GraphBuilder};
use weighted_graph::types::{Edge, GraphError, Neighbor, DEFAULT_WEIGHT};

// ==================== Construction Tests ====================

#[test]
fn test_new_graph_is_edgeless() {
    let g = Graph::new(4);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.arc_count(), 0);
    for v in 0..4 {
        assert_eq!(g.neighbor_count(v), 0);
        assert!(g.neighbors(v).is_empty());
    }
}

#[test]
fn test_zero_vertex_graph() {
    let mut g = Graph::new(0);
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.to_string(), "");
    assert_eq!(
        g.add_edge(0, 1, 1),
        Err(GraphError::VertexOutOfRange {
            vertex: 0,
            vertex_count: 0
        })
    );
}

#[test]
fn test_unknown_vertex_has_no_neighbors() {
    let g = Graph::new(2);
    assert_eq!(g.neighbor_count(7), 0);
    assert!(!g.has_edge(7, 0));
}

// ==================== Undirected Edge Tests ====================

#[test]
fn test_add_edge_stores_both_directions() {
    let mut g = Graph::new(5);
    g.add_edge(0, 1, 2).unwrap();
    g.add_edge(1, 2, 3).unwrap();

    assert_eq!(g.neighbor_count(0), 1);
    assert_eq!(g.neighbor_count(1), 2);
    assert_eq!(g.neighbor_count(2), 1);
    assert_eq!(g.neighbors(0), &[Neighbor::new(1, 2)]);
    assert_eq!(g.neighbors(1), &[Neighbor::new(0, 2), Neighbor::new(2, 3)]);
    assert_eq!(g.neighbors(2), &[Neighbor::new(1, 3)]);
}

#[test]
fn test_add_unit_edge_uses_default_weight() {
    let mut g = Graph::new(2);
    g.add_unit_edge(0, 1).unwrap();
    assert_eq!(g.neighbors(0)[0].weight, DEFAULT_WEIGHT);
    assert_eq!(g.neighbors(1)[0].weight, DEFAULT_WEIGHT);
}

#[test]
fn test_negative_and_zero_weights_accepted() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1, -7).unwrap();
    g.add_edge(1, 2, 0).unwrap();
    assert_eq!(g.neighbors(0)[0].weight, -7);
    assert_eq!(g.total_weight(), -7);
}

#[test]
fn test_add_edge_out_of_range() {
    let mut g = Graph::new(5);
    assert_eq!(
        g.add_edge(0, 5, 1),
        Err(GraphError::VertexOutOfRange {
            vertex: 5,
            vertex_count: 5
        })
    );
    assert_eq!(
        g.add_edge(9, 0, 1),
        Err(GraphError::VertexOutOfRange {
            vertex: 9,
            vertex_count: 5
        })
    );
    assert_eq!(g.arc_count(), 0);
}

#[test]
fn test_self_loop_rejected() {
    let mut g = Graph::new(5);
    let result = g.add_edge(0, 0, 1);
    match result.unwrap_err() {
        GraphError::SelfLoop(0) => {}
        e => panic!("Expected SelfLoop error, got {:?}", e),
    }
    assert_eq!(g.add_directed_edge(3, 3, 1), Err(GraphError::SelfLoop(3)));
}

#[test]
fn test_duplicate_edge_rejected_in_either_order() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1, 4).unwrap();
    assert_eq!(
        g.add_edge(0, 1, 9),
        Err(GraphError::DuplicateEdge { from: 0, to: 1 })
    );
    assert_eq!(
        g.add_edge(1, 0, 9),
        Err(GraphError::DuplicateEdge { from: 1, to: 0 })
    );
    // Failed insertions leave the lists untouched.
    assert_eq!(g.neighbors(0), &[Neighbor::new(1, 4)]);
    assert_eq!(g.neighbors(1), &[Neighbor::new(0, 4)]);
}

#[test]
fn test_undirected_edge_over_existing_arc_rejected() {
    let mut g = Graph::new(2);
    g.add_directed_edge(1, 0, 3).unwrap();
    assert_eq!(
        g.add_edge(0, 1, 3),
        Err(GraphError::DuplicateEdge { from: 1, to: 0 })
    );
    assert_eq!(g.neighbor_count(0), 0);
}

#[test]
fn test_many_insertions_keep_order() {
    let mut g = Graph::new(40);
    for v in 1..40 {
        g.add_edge(0, v, v as i64).unwrap();
    }
    let order: Vec<usize> = g.neighbors(0).iter().map(|n| n.vertex).collect();
    assert_eq!(order, (1..40).collect::<Vec<_>>());
    assert_eq!(g.arc_count(), 2 * 39);
}

// ==================== Directed Edge Tests ====================

#[test]
fn test_directed_edge_only_in_source_list() {
    let mut g = Graph::new(3);
    g.add_directed_edge(0, 2, 5).unwrap();
    assert_eq!(g.neighbors(0), &[Neighbor::new(2, 5)]);
    assert_eq!(g.neighbor_count(2), 0);
    assert!(g.has_edge(0, 2));
    assert!(!g.has_edge(2, 0));
}

#[test]
fn test_reverse_directed_edges_are_independent() {
    let mut g = Graph::new(2);
    g.add_directed_edge(0, 1, 1).unwrap();
    g.add_directed_edge(1, 0, 2).unwrap();
    assert_eq!(g.neighbors(0), &[Neighbor::new(1, 1)]);
    assert_eq!(g.neighbors(1), &[Neighbor::new(0, 2)]);
    assert_eq!(
        g.add_unit_directed_edge(0, 1),
        Err(GraphError::DuplicateEdge { from: 0, to: 1 })
    );
}

// ==================== Removal Tests ====================

#[test]
fn test_remove_edge_restores_counts() {
    let mut g = Graph::new(5);
    g.add_edge(0, 1, 2).unwrap();
    g.remove_edge(0, 1).unwrap();
    assert_eq!(g.neighbor_count(0), 0);
    assert_eq!(g.neighbor_count(1), 0);
}

#[test]
fn test_remove_edge_preserves_order_of_rest() {
    let mut g = Graph::new(4);
    g.add_edge(0, 1, 1).unwrap();
    g.add_edge(0, 2, 2).unwrap();
    g.add_edge(0, 3, 3).unwrap();
    g.remove_edge(2, 0).unwrap();
    assert_eq!(g.neighbors(0), &[Neighbor::new(1, 1), Neighbor::new(3, 3)]);
    assert_eq!(g.neighbor_count(2), 0);
}

#[test]
fn test_remove_missing_edge() {
    let mut g = Graph::new(5);
    assert_eq!(
        g.remove_edge(0, 1),
        Err(GraphError::MissingEdge { from: 0, to: 1 })
    );
    assert!(matches!(
        g.remove_edge(0, 5),
        Err(GraphError::VertexOutOfRange { vertex: 5, .. })
    ));
}

#[test]
fn test_reinsert_after_remove() {
    let mut g = Graph::new(2);
    g.add_edge(0, 1, 1).unwrap();
    g.remove_edge(0, 1).unwrap();
    g.add_edge(1, 0, 8).unwrap();
    assert_eq!(g.neighbors(0), &[Neighbor::new(1, 8)]);
}

// ==================== Enumeration Tests ====================

#[test]
fn test_arcs_and_undirected_edges() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1, 4).unwrap();
    g.add_edge(2, 1, 6).unwrap();

    let arcs: Vec<Edge> = g.arcs().collect();
    assert_eq!(
        arcs,
        vec![
            Edge::new(0, 1, 4),
            Edge::new(1, 0, 4),
            Edge::new(1, 2, 6),
            Edge::new(2, 1, 6),
        ]
    );
    let edges: Vec<Edge> = g.undirected_edges().collect();
    assert_eq!(edges, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 6)]);
    assert_eq!(g.total_weight(), 10);
}

#[test]
fn test_display_dump() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1, 4).unwrap();
    g.add_directed_edge(2, 0, 1).unwrap();
    assert_eq!(
        g.to_string(),
        "Vertex 0: (1, w=4)\nVertex 1: (0, w=4)\nVertex 2: (0, w=1)\n"
    );
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::new(3, 1, -2).to_string(), "3 -> 1 (w=-2)");
}

#[test]
fn test_arc_weight_counts_both_directions() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1, 4).unwrap();
    g.add_directed_edge(2, 0, 5).unwrap();
    assert_eq!(g.total_weight(), 4);
    assert_eq!(g.arc_weight(), 4 + 4 + 5);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_matches_manual_construction() {
    let built = GraphBuilder::new(4)
        .edge(0, 1, 3)
        .unit_edge(1, 2)
        .arc(3, 0, 7)
        .build()
        .unwrap();

    let mut manual = Graph::new(4);
    manual.add_edge(0, 1, 3).unwrap();
    manual.add_edge(1, 2, 1).unwrap();
    manual.add_directed_edge(3, 0, 7).unwrap();

    assert_eq!(built, manual);
}

#[test]
fn test_builder_reports_first_failure() {
    let result = GraphBuilder::new(3)
        .edge(0, 1, 1)
        .edge(2, 2, 1)
        .edge(0, 1, 1)
        .build();
    assert_eq!(result.unwrap_err(), GraphError::SelfLoop(2));
}

#[test]
fn test_builder_duplicates_graph_from_arcs() {
    let original = GraphBuilder::new(3)
        .edge(0, 1, 2)
        .arc(2, 1, 5)
        .build()
        .unwrap();
    let copy = GraphBuilder::new(original.vertex_count())
        .arcs(original.arcs())
        .build()
        .unwrap();
    assert_eq!(copy, original);
}
