use serde::Serialize;

/// Canvas position of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// Last-run badge shown on trigger and action nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiExecutionBadge {
    pub total: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_started_at: Option<String>,
}

/// Node payload read by the node components
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiNodeData {
    pub label: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combinator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_execution: Option<UiExecutionBadge>,
}

/// UI node with ID, component type, position and data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: UiPosition,
    pub data: UiNodeData,
}

/// UI edge connecting nodes through named handles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Complete canvas flow
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiFlow {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}
