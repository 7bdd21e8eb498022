//! Renderer-agnostic flow graph produced by the compiler and positioned by the layout engine.

use crate::ast::{self, CombinatorKind, LogicNode, Operator, Scalar};
use crate::rule::ExecutionStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod visualizer;

/// Discriminator of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Trigger,
    Condition,
    Action,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Trigger => "trigger",
            NodeKind::Condition => "condition",
            NodeKind::Action => "action",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roll-up of the executions relevant to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub pending: usize,
    pub last_status: Option<ExecutionStatus>,
    pub last_started_at: Option<String>,
}

/// What a condition node stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionDetail {
    Predicate {
        field: String,
        operator: Operator,
        value: Scalar,
    },
    Combinator {
        kind: CombinatorKind,
        child_count: usize,
    },
}

/// Kind-specific payload of a node. Every variant carries a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeData {
    Trigger {
        label: String,
        trigger_type: String,
        executions: ExecutionSummary,
    },
    Condition {
        label: String,
        detail: ConditionDetail,
    },
    Action {
        label: String,
        action_id: String,
        action_type: Option<String>,
        executions: ExecutionSummary,
    },
}

impl NodeData {
    pub fn label(&self) -> &str {
        match self {
            NodeData::Trigger { label, .. }
            | NodeData::Condition { label, .. }
            | NodeData::Action { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub data: NodeData,
}

impl GraphNode {
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Trigger { .. } => NodeKind::Trigger,
            NodeData::Condition { .. } => NodeKind::Condition,
            NodeData::Action { .. } => NodeKind::Action,
        }
    }

    pub fn label(&self) -> &str {
        self.data.label()
    }
}

/// Outcome represented by an edge leaving a two-way condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    True,
    False,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::True => "true",
            Branch::False => "false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub branch: Option<Branch>,
}

impl GraphEdge {
    pub fn new(source: &str, target: &str, branch: Option<Branch>) -> Self {
        Self {
            id: format!("e-{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            branch,
        }
    }
}

/// The compiled, unpositioned graph of a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl FlowGraph {
    /// The label function matching the condition node labels of this graph.
    pub fn label(&self, node: &LogicNode) -> String {
        ast::label(node)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }

    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A node placed by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub node: GraphNode,
    pub layer: usize,
    pub x: f64,
    pub y: f64,
}

/// A graph whose nodes carry layers and coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaidOutGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<GraphEdge>,
}

impl LaidOutGraph {
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.node.id == id)
    }

    pub fn layer_count(&self) -> usize {
        self.nodes.iter().map(|n| n.layer + 1).max().unwrap_or(0)
    }
}
