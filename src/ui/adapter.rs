use super::types::*;
use crate::graph::{
    Branch, ConditionDetail, ExecutionSummary, GraphEdge, LaidOutGraph, NodeData, PositionedNode,
};

/// Handle id on a condition node's "passed" output.
pub const TRUE_HANDLE: &str = "true";
/// Handle id on a condition node's "failed" output.
pub const FALSE_HANDLE: &str = "false";

/// Converts a laid-out graph into the node/edge/handle shape of a node-based canvas.
///
/// This is the only place that knows about handle naming; the compiler and the layout
/// engine only speak in terms of [`Branch`].
pub fn to_ui_flow(graph: &LaidOutGraph) -> UiFlow {
    UiFlow {
        nodes: graph.nodes.iter().map(to_ui_node).collect(),
        edges: graph.edges.iter().map(to_ui_edge).collect(),
    }
}

/// Serializes the canvas flow of a laid-out graph as JSON text.
pub fn to_ui_json(graph: &LaidOutGraph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_ui_flow(graph))
}

fn to_ui_node(positioned: &PositionedNode) -> UiNode {
    let node = &positioned.node;
    let mut data = UiNodeData {
        label: node.label().to_string(),
        node_type: None,
        field: None,
        operator: None,
        value: None,
        combinator: None,
        action_id: None,
        last_execution: None,
    };

    match &node.data {
        NodeData::Trigger {
            trigger_type,
            executions,
            ..
        } => {
            data.node_type = Some(trigger_type.clone());
            data.last_execution = badge(executions);
        }
        NodeData::Condition { detail, .. } => match detail {
            ConditionDetail::Predicate {
                field,
                operator,
                value,
            } => {
                data.field = Some(field.clone());
                data.operator = Some(operator.as_str().to_string());
                data.value = Some(value.to_json());
            }
            ConditionDetail::Combinator { kind, .. } => {
                data.combinator = Some(kind.to_string());
            }
        },
        NodeData::Action {
            action_id,
            action_type,
            executions,
            ..
        } => {
            data.node_type = action_type.clone();
            data.action_id = Some(action_id.clone());
            data.last_execution = badge(executions);
        }
    }

    UiNode {
        id: node.id.clone(),
        node_type: node.kind().as_str().to_string(),
        position: UiPosition {
            x: positioned.x,
            y: positioned.y,
        },
        data,
    }
}

fn to_ui_edge(edge: &GraphEdge) -> UiEdge {
    let source_handle = edge.branch.map(|branch| match branch {
        Branch::True => TRUE_HANDLE.to_string(),
        Branch::False => FALSE_HANDLE.to_string(),
    });
    UiEdge {
        id: edge.id.clone(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        label: edge.branch.map(|b| b.as_str().to_string()),
        source_handle,
    }
}

fn badge(summary: &ExecutionSummary) -> Option<UiExecutionBadge> {
    if summary.total == 0 {
        return None;
    }
    Some(UiExecutionBadge {
        total: summary.total,
        failed: summary.failed,
        last_status: summary.last_status.map(|s| s.as_str().to_string()),
        last_started_at: summary.last_started_at.clone(),
    })
}
