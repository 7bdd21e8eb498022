use super::annotate::summarize;
use crate::ast::{self, LogicNode};
use crate::graph::{Branch, ConditionDetail, FlowGraph, GraphEdge, GraphNode, NodeData};
use crate::rule::{ActionSpec, ExecutionRecord, RuleDefinition};

pub(super) const TRIGGER_ID: &str = "trigger";

/// Lowers a rule into its flow graph. One builder is used per compile.
pub(super) struct GraphBuilder<'a> {
    actions: &'a [ActionSpec],
    executions: &'a [ExecutionRecord],
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    action_ids: Vec<String>,
}

impl<'a> GraphBuilder<'a> {
    pub(super) fn new(actions: &'a [ActionSpec], executions: &'a [ExecutionRecord]) -> Self {
        Self {
            actions,
            executions,
            nodes: Vec::new(),
            edges: Vec::new(),
            action_ids: (0..actions.len()).map(|i| format!("action-{}", i)).collect(),
        }
    }

    /// Builds the graph for `rule` whose logic has already been normalized into `logic`.
    pub(super) fn build(mut self, rule: &RuleDefinition, logic: Option<&LogicNode>) -> FlowGraph {
        self.push_trigger(rule);

        match logic {
            Some(root) => self.lower(root, "cond-0", TRIGGER_ID, None),
            None => {
                for index in 0..self.action_ids.len() {
                    self.edges
                        .push(GraphEdge::new(TRIGGER_ID, &self.action_ids[index], None));
                }
            }
        }

        self.push_actions();
        FlowGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn push_trigger(&mut self, rule: &RuleDefinition) {
        self.nodes.push(GraphNode {
            id: TRIGGER_ID.to_string(),
            data: NodeData::Trigger {
                label: rule.trigger_type.clone(),
                trigger_type: rule.trigger_type.clone(),
                executions: summarize(self.executions),
            },
        });
    }

    /// Emits the condition node for `node` at `id`, links it from `parent`, then recurses.
    /// Predicate leaves are the terminal conditions and fan out to every action.
    fn lower(&mut self, node: &LogicNode, id: &str, parent: &str, branch: Option<Branch>) {
        let detail = match node {
            LogicNode::Predicate {
                field,
                operator,
                value,
            } => ConditionDetail::Predicate {
                field: field.clone(),
                operator: operator.clone(),
                value: value.clone(),
            },
            LogicNode::Combinator { kind, children } => ConditionDetail::Combinator {
                kind: *kind,
                child_count: children.len(),
            },
        };
        self.nodes.push(GraphNode {
            id: id.to_string(),
            data: NodeData::Condition {
                label: ast::label(node),
                detail,
            },
        });
        self.edges.push(GraphEdge::new(parent, id, branch));

        match node {
            LogicNode::Predicate { .. } => {
                for index in 0..self.action_ids.len() {
                    self.edges
                        .push(GraphEdge::new(id, &self.action_ids[index], None));
                }
            }
            LogicNode::Combinator { children, .. } => {
                let binary = children.len() == 2;
                for (index, child) in children.iter().enumerate() {
                    let branch = match (binary, index) {
                        (true, 0) => Some(Branch::True),
                        (true, _) => Some(Branch::False),
                        (false, _) => None,
                    };
                    self.lower(child, &format!("{}-{}", id, index), id, branch);
                }
            }
        }
    }

    fn push_actions(&mut self) {
        for (action, id) in self.actions.iter().zip(&self.action_ids) {
            let executions = summarize(
                self.executions
                    .iter()
                    .filter(|e| e.action_id.as_deref() == Some(action.id.as_str())),
            );
            self.nodes.push(GraphNode {
                id: id.clone(),
                data: NodeData::Action {
                    label: action.label.clone(),
                    action_id: action.id.clone(),
                    action_type: action.action_type.clone(),
                    executions,
                },
            });
        }
    }
}
