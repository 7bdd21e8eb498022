//! Common test utilities for building rule definitions, actions and executions.
use zukai::prelude::*;

/// A rule with a single predicate.
///
/// Logic: `score > 80`
#[allow(dead_code)]
pub fn create_single_predicate_rule() -> RuleDefinition {
    RuleDefinition::new("rule-single", "order.created")
        .with_logic(LogicNode::predicate("score", ">", 80))
}

/// A rule joining two predicates with AND.
///
/// Logic: `x == 1 AND y != 2`
#[allow(dead_code)]
pub fn create_and_rule() -> RuleDefinition {
    RuleDefinition::new("rule-and", "payment.failed").with_logic(LogicNode::and(vec![
        LogicNode::predicate("x", "==", 1),
        LogicNode::predicate("y", "!=", 2),
    ]))
}

/// A rule with nested groups.
///
/// Logic: `(country == DE OR country == AT) AND amount >= 100 AND plan != free`
#[allow(dead_code)]
pub fn create_nested_rule() -> RuleDefinition {
    RuleDefinition::new("rule-nested", "checkout.completed").with_logic(LogicNode::and(vec![
        LogicNode::or(vec![
            LogicNode::predicate("country", "==", "DE"),
            LogicNode::predicate("country", "==", "AT"),
        ]),
        LogicNode::predicate("amount", ">=", 100),
        LogicNode::predicate("plan", "!=", "free"),
    ]))
}

/// A rule without any condition.
#[allow(dead_code)]
pub fn create_unconditional_rule() -> RuleDefinition {
    RuleDefinition::new("rule-always", "user.signed_up")
}

#[allow(dead_code)]
pub fn create_actions(count: usize) -> Vec<ActionSpec> {
    (0..count)
        .map(|i| ActionSpec {
            id: format!("a{}", i + 1),
            label: format!("notify-{}", i + 1),
            action_type: Some("email".to_string()),
        })
        .collect()
}

#[allow(dead_code)]
pub fn execution(id: &str, status: ExecutionStatus, started_at: &str) -> ExecutionRecord {
    ExecutionRecord {
        id: id.to_string(),
        status,
        started_at: started_at.to_string(),
        action_id: None,
    }
}

/// Returns the ids of the targets of all edges leaving `source`, in edge order.
#[allow(dead_code)]
pub fn targets_of(graph: &FlowGraph, source: &str) -> Vec<String> {
    graph.outgoing(source).map(|e| e.target.clone()).collect()
}

/// A bundle in the JSON shape exported by the rule store.
#[allow(dead_code)]
pub const BUNDLE_JSON: &str = r#"{
    "rule": {
        "id": "rule-42",
        "triggerType": "order.created",
        "name": "High value orders",
        "logic": {
            "AND": [
                { "field": "amount", "op": ">", "value": 500 },
                { "or": [
                    { "field": "country", "operator": "==", "value": "DE" },
                    { "field": "vip", "operator": "==", "value": true }
                ] }
            ]
        }
    },
    "actions": [
        { "id": "a1", "label": "Notify sales", "actionType": "slack" },
        { "id": "a2", "label": "Tag order" }
    ],
    "executions": [
        { "id": "e1", "status": "success", "startedAt": "2026-10-01T10:00:00Z" },
        { "id": "e2", "status": "failed", "startedAt": "2026-10-03T08:30:00Z", "actionId": "a1" },
        { "id": "e3", "status": "pending", "startedAt": "2026-10-02T12:00:00Z", "actionId": "a1" }
    ]
}"#;
