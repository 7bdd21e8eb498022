use super::{Operator, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a combinator joins its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CombinatorKind {
    #[default]
    And,
    Or,
}

impl CombinatorKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "and" | "all" => Some(CombinatorKind::And),
            "or" | "any" => Some(CombinatorKind::Or),
            _ => None,
        }
    }

    /// Key used for this combinator in the canonical JSON shape.
    pub fn key(&self) -> &'static str {
        match self {
            CombinatorKind::And => "and",
            CombinatorKind::Or => "or",
        }
    }
}

impl fmt::Display for CombinatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinatorKind::And => write!(f, "AND"),
            CombinatorKind::Or => write!(f, "OR"),
        }
    }
}

/// A node of the boolean condition tree attached to a rule.
///
/// Each node owns its children exclusively, so a tree can never contain a cycle
/// or a shared sub-node.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicNode {
    /// A leaf comparing `field` against `value`.
    Predicate {
        field: String,
        operator: Operator,
        value: Scalar,
    },
    /// An AND/OR group over an ordered list of children.
    Combinator {
        kind: CombinatorKind,
        children: Vec<LogicNode>,
    },
}

impl LogicNode {
    pub fn predicate(
        field: impl Into<String>,
        operator: impl Into<Operator>,
        value: impl Into<Scalar>,
    ) -> Self {
        LogicNode::Predicate {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    pub fn and(children: Vec<LogicNode>) -> Self {
        LogicNode::Combinator {
            kind: CombinatorKind::And,
            children,
        }
    }

    pub fn or(children: Vec<LogicNode>) -> Self {
        LogicNode::Combinator {
            kind: CombinatorKind::Or,
            children,
        }
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, LogicNode::Predicate { .. })
    }

    /// Depth of the tree; a bare predicate has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            LogicNode::Predicate { .. } => 1,
            LogicNode::Combinator { children, .. } => {
                1 + children.iter().map(LogicNode::depth).max().unwrap_or(0)
            }
        }
    }

    /// Number of predicate leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            LogicNode::Predicate { .. } => 1,
            LogicNode::Combinator { children, .. } => {
                children.iter().map(LogicNode::leaf_count).sum()
            }
        }
    }
}

impl fmt::Display for LogicNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::label(self))
    }
}
