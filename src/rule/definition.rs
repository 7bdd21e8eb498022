use crate::ast::LogicNode;
use crate::error::RuleConversionError;
use serde::{Deserialize, Serialize};
use std::fs;

/// A rule as stored by the rule-storage collaborator.
///
/// `logic == None` means the rule fires on every trigger. Malformed logic read from
/// JSON is treated as `None` rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: String,
    #[serde(alias = "triggerType")]
    pub trigger_type: String,
    #[serde(default, deserialize_with = "crate::ast::json::deserialize_lenient")]
    pub logic: Option<LogicNode>,
}

impl RuleDefinition {
    pub fn new(id: impl Into<String>, trigger_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            trigger_type: trigger_type.into(),
            logic: None,
        }
    }

    pub fn with_logic(mut self, logic: LogicNode) -> Self {
        self.logic = Some(logic);
        self
    }
}

/// An output of a rule. Opaque to the compiler apart from its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub id: String,
    pub label: String,
    #[serde(default, alias = "actionType")]
    pub action_type: Option<String>,
}

impl ActionSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action_type: None,
        }
    }
}

/// Outcome of a past rule run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failed,
    Pending,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Pending => "pending",
        }
    }
}

/// A recent run of a rule, used only to annotate graph nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub id: String,
    pub status: ExecutionStatus,
    /// RFC 3339 timestamp; compared as a string.
    #[serde(alias = "startedAt")]
    pub started_at: String,
    /// The action this run belongs to, if it was recorded per action.
    #[serde(default, alias = "actionId")]
    pub action_id: Option<String>,
}

/// Everything needed to compile one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBundle {
    pub rule: RuleDefinition,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
    #[serde(default)]
    pub executions: Vec<ExecutionRecord>,
}

impl RuleBundle {
    pub fn new(rule: RuleDefinition) -> Self {
        Self {
            rule,
            actions: Vec::new(),
            executions: Vec::new(),
        }
    }

    /// Parse a bundle from its JSON text. Unknown fields are ignored.
    pub fn from_json_str(json: &str) -> Result<Self, RuleConversionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a bundle from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, RuleConversionError> {
        let content = fs::read_to_string(path).map_err(|source| RuleConversionError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
