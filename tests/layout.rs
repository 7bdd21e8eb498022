//! Tests for layer assignment, coordinates and centering.
mod common;
use common::*;
use zukai::graph::{ConditionDetail, ExecutionSummary};
use zukai::prelude::*;

fn condition_node(id: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        data: NodeData::Condition {
            label: id.to_string(),
            detail: ConditionDetail::Predicate {
                field: id.to_string(),
                operator: Operator::Equal,
                value: Scalar::Null,
            },
        },
    }
}

fn action_node(id: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        data: NodeData::Action {
            label: id.to_string(),
            action_id: id.to_string(),
            action_type: None,
            executions: ExecutionSummary::default(),
        },
    }
}

fn layer_of(graph: &LaidOutGraph, id: &str) -> usize {
    graph.node(id).expect("node present").layer
}

#[test]
fn test_layers_follow_longest_path() {
    let graph = build_graph(&create_nested_rule(), &create_actions(2), &[]);
    let laid_out = layout(&graph, &LayoutConfig::default());

    assert_eq!(layer_of(&laid_out, "trigger"), 0);
    assert_eq!(layer_of(&laid_out, "cond-0"), 1);
    assert_eq!(layer_of(&laid_out, "cond-0-0"), 2);
    assert_eq!(layer_of(&laid_out, "cond-0-1"), 2);
    assert_eq!(layer_of(&laid_out, "cond-0-0-1"), 3);
    // Actions are fed by leaves on layers 2 and 3; the longest path wins.
    assert_eq!(layer_of(&laid_out, "action-0"), 4);
    assert_eq!(layer_of(&laid_out, "action-1"), 4);
}

#[test]
fn test_every_edge_points_down() {
    let graph = build_graph(&create_nested_rule(), &create_actions(3), &[]);
    let laid_out = arrange(&graph, &LayoutConfig::default());

    for edge in &laid_out.edges {
        assert!(
            layer_of(&laid_out, &edge.target) > layer_of(&laid_out, &edge.source),
            "edge {} does not descend",
            edge.id
        );
    }
}

#[test]
fn test_uncentered_coordinates() {
    let config = LayoutConfig::default();
    let graph = build_graph(&create_and_rule(), &create_actions(2), &[]);
    let laid_out = layout(&graph, &config);

    let leaf_0 = laid_out.node("cond-0-0").unwrap();
    let leaf_1 = laid_out.node("cond-0-1").unwrap();
    assert_eq!((leaf_0.x, leaf_0.y), (0.0, 300.0));
    assert_eq!((leaf_1.x, leaf_1.y), (250.0, 300.0));

    let trigger = laid_out.node("trigger").unwrap();
    assert_eq!((trigger.x, trigger.y), (0.0, 0.0));
}

#[test]
fn test_centering_aligns_layers_on_widest_layer() {
    let config = LayoutConfig::default();
    let graph = build_graph(&create_and_rule(), &create_actions(3), &[]);
    let laid_out = arrange(&graph, &config);

    // Widest layer: three actions at 0, 250, 500 spanning [0, 700]; axis 350.
    let axis = 350.0;
    for id in ["trigger", "cond-0"] {
        let node = laid_out.node(id).unwrap();
        assert_eq!(node.x + config.node_width / 2.0, axis, "{} not centered", id);
    }
    let left = laid_out.node("cond-0-0").unwrap();
    let right = laid_out.node("cond-0-1").unwrap();
    assert_eq!((left.x, right.x), (125.0, 375.0));

    let actions: Vec<f64> = ["action-0", "action-1", "action-2"]
        .iter()
        .map(|id| laid_out.node(id).unwrap().x)
        .collect();
    assert_eq!(actions, vec![0.0, 250.0, 500.0]);
}

#[test]
fn test_no_overlap_within_a_layer_after_centering() {
    let config = LayoutConfig::default();
    let graph = build_graph(&create_nested_rule(), &create_actions(4), &[]);
    let laid_out = arrange(&graph, &config);

    for a in &laid_out.nodes {
        for b in &laid_out.nodes {
            if a.node.id != b.node.id && a.layer == b.layer {
                assert!(
                    (a.x - b.x).abs() >= config.node_width,
                    "{} and {} overlap",
                    a.node.id,
                    b.node.id
                );
            }
        }
    }
}

#[test]
fn test_node_spacing_is_never_below_node_width() {
    let config = LayoutConfig {
        node_spacing: 50.0,
        node_width: 120.0,
        ..LayoutConfig::default()
    };
    let graph = build_graph(&create_unconditional_rule(), &create_actions(2), &[]);
    let laid_out = layout(&graph, &config);

    let gap = laid_out.node("action-1").unwrap().x - laid_out.node("action-0").unwrap().x;
    assert_eq!(gap, 120.0);
}

#[test]
fn test_layout_is_deterministic() {
    let graph = build_graph(&create_nested_rule(), &create_actions(2), &[]);
    let config = LayoutConfig::default();
    assert_eq!(arrange(&graph, &config), arrange(&graph, &config));
}

#[test]
fn test_disconnected_nodes_become_roots() {
    let graph = FlowGraph {
        nodes: vec![condition_node("a"), condition_node("b"), action_node("c")],
        edges: vec![GraphEdge::new("a", "c", None)],
    };
    let laid_out = layout(&graph, &LayoutConfig::default());

    assert_eq!(layer_of(&laid_out, "a"), 0);
    assert_eq!(layer_of(&laid_out, "b"), 0);
    assert_eq!(layer_of(&laid_out, "c"), 1);
    assert_eq!(laid_out.node("a").unwrap().x, 0.0);
    assert_eq!(laid_out.node("b").unwrap().x, 250.0);
}

#[test]
fn test_edges_to_unknown_nodes_are_ignored() {
    let graph = FlowGraph {
        nodes: vec![condition_node("a"), action_node("b")],
        edges: vec![
            GraphEdge::new("a", "missing", None),
            GraphEdge::new("a", "b", None),
        ],
    };
    let laid_out = layout(&graph, &LayoutConfig::default());

    assert_eq!(layer_of(&laid_out, "b"), 1);
    assert_eq!(laid_out.edges.len(), 2);
}

#[test]
fn test_cycles_still_get_a_layout() {
    let graph = FlowGraph {
        nodes: vec![
            condition_node("root"),
            condition_node("a"),
            condition_node("b"),
        ],
        edges: vec![
            GraphEdge::new("root", "a", None),
            GraphEdge::new("a", "b", None),
            GraphEdge::new("b", "a", None),
        ],
    };
    let laid_out = arrange(&graph, &LayoutConfig::default());

    assert_eq!(laid_out.nodes.len(), 3);
    assert_eq!(layer_of(&laid_out, "root"), 0);
    assert_eq!(layer_of(&laid_out, "a"), 1);
    assert_eq!(layer_of(&laid_out, "b"), 2);
}

#[test]
fn test_empty_graph() {
    let laid_out = arrange(&FlowGraph::default(), &LayoutConfig::default());
    assert!(laid_out.nodes.is_empty());
    assert_eq!(laid_out.layer_count(), 0);
}

#[test]
fn test_layout_config_from_json() {
    let config = LayoutConfig::from_json_str(r#"{ "layerSpacing": 100, "node_width": 180 }"#)
        .expect("valid config");
    assert_eq!(config.layer_spacing, 100.0);
    assert_eq!(config.node_width, 180.0);
    assert_eq!(config.node_spacing, LayoutConfig::default().node_spacing);
}

#[test]
fn test_layout_config_rejects_negative_spacing() {
    let result = LayoutConfig::from_json_str(r#"{ "node_spacing": -5 }"#);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidSpacing {
            name: "node_spacing",
            ..
        })
    ));
}

#[test]
fn test_custom_layer_spacing() {
    let config = LayoutConfig {
        layer_spacing: 40.0,
        ..LayoutConfig::default()
    };
    let graph = build_graph(&create_single_predicate_rule(), &create_actions(1), &[]);
    let laid_out = Compiler::builder(create_single_predicate_rule())
        .with_actions(create_actions(1))
        .with_layout_config(config)
        .build()
        .compile_laid_out();

    assert_eq!(laid_out.node("action-0").unwrap().y, 80.0);
    assert_eq!(laid_out.edges, graph.edges);
}
