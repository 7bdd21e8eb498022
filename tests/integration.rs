//! Integration tests for zukai
//!
//! End-to-end tests that verify loading, compiling, laying out and rendering work together.
//!
mod common;
use common::*;
use zukai::error::RuleConversionError;
use zukai::graph::ConditionDetail;
use zukai::graph::visualizer::visualize_graph;
use zukai::prelude::*;
use zukai::ui::{FALSE_HANDLE, TRUE_HANDLE};

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn compile_bundle_json() -> (Compiler, LaidOutGraph) {
        let bundle = RuleBundle::from_json_str(BUNDLE_JSON).expect("Failed to parse bundle");
        let compiler = Compiler::from_bundle(bundle).build();
        let graph = compiler.compile_laid_out();
        (compiler, graph)
    }

    #[test]
    fn test_bundle_json_compiles_to_expected_graph() {
        let (compiler, graph) = compile_bundle_json();

        assert_eq!(compiler.rule().id, "rule-42");
        // trigger, AND, amount, OR, country, vip, two actions
        assert_eq!(graph.nodes.len(), 8);
        assert_eq!(graph.layer_count(), 5);

        assert_eq!(
            graph.node("cond-0").unwrap().node.label(),
            "All of: amount > 500; Any of: country == DE; vip == true"
        );
        assert_eq!(graph.node("cond-0-1-1").unwrap().node.label(), "vip == true");
        assert_eq!(graph.node("action-0").unwrap().layer, 4);
    }

    #[test]
    fn test_ui_flow_names_branch_handles() {
        let (_, graph) = compile_bundle_json();
        let flow = to_ui_flow(&graph);

        let handles: Vec<(&str, Option<&str>)> = flow
            .edges
            .iter()
            .filter(|e| e.source == "cond-0")
            .map(|e| (e.target.as_str(), e.source_handle.as_deref()))
            .collect();
        assert_eq!(
            handles,
            vec![
                ("cond-0-0", Some(TRUE_HANDLE)),
                ("cond-0-1", Some(FALSE_HANDLE))
            ]
        );

        let action_edge = flow
            .edges
            .iter()
            .find(|e| e.source == "cond-0-0" && e.target == "action-0")
            .expect("leaf to action edge");
        assert_eq!(action_edge.source_handle, None);

        let trigger = flow.nodes.iter().find(|n| n.id == "trigger").unwrap();
        assert_eq!(trigger.node_type, "trigger");
        assert_eq!(trigger.data.node_type.as_deref(), Some("order.created"));
        let badge = trigger.data.last_execution.as_ref().expect("trigger badge");
        assert_eq!(badge.total, 3);
        assert_eq!(badge.last_status.as_deref(), Some("failed"));
    }

    #[test]
    fn test_ui_json_is_camel_case() {
        let (_, graph) = compile_bundle_json();
        let json: serde_json::Value =
            serde_json::from_str(&to_ui_json(&graph).unwrap()).expect("valid JSON");

        let edges = json["edges"].as_array().unwrap();
        let branch_edge = edges
            .iter()
            .find(|e| e["id"] == "e-cond-0-cond-0-0")
            .unwrap();
        assert_eq!(branch_edge["sourceHandle"], "true");
        assert!(edges.iter().all(|e| e.get("targetHandle").is_none()));

        let nodes = json["nodes"].as_array().unwrap();
        let amount = nodes.iter().find(|n| n["id"] == "cond-0-0").unwrap();
        assert_eq!(amount["type"], "condition");
        assert_eq!(amount["data"]["field"], "amount");
        assert_eq!(amount["data"]["value"], 500);
        assert!(amount["position"]["x"].is_number());

        let action = nodes.iter().find(|n| n["id"] == "action-0").unwrap();
        assert_eq!(action["data"]["actionId"], "a1");
        assert_eq!(action["data"]["lastExecution"]["lastStartedAt"], "2026-10-03T08:30:00Z");
    }

    #[test]
    fn test_artifact_round_trip_through_file() {
        let (compiler, _) = compile_bundle_json();
        let flow = CompiledFlow::from_compiler(&compiler);

        let path = std::env::temp_dir().join("zukai_integration_artifact.bin");
        let path = path.to_str().unwrap();
        flow.save(path).expect("Failed to save artifact");
        let loaded = CompiledFlow::from_file(path).expect("Failed to load artifact");
        let _ = std::fs::remove_file(path);

        assert_eq!(loaded, flow);
        assert!(loaded.summary.starts_with("When order.created, if All of:"));
    }

    #[test]
    fn test_laid_out_graph_json_round_trip_keeps_combinators() {
        let (_, graph) = compile_bundle_json();
        let text = serde_json::to_string(&graph).expect("graph serializes");
        let back: LaidOutGraph = serde_json::from_str(&text).expect("graph deserializes");
        assert_eq!(back, graph);

        match &back.node("cond-0-1").unwrap().node.data {
            NodeData::Condition {
                detail: ConditionDetail::Combinator { kind, child_count },
                ..
            } => {
                assert_eq!(*kind, CombinatorKind::Or);
                assert_eq!(*child_count, 2);
            }
            other => panic!("expected combinator condition, got {:?}", other),
        }
    }

    #[test]
    fn test_artifact_rejects_garbage() {
        assert!(CompiledFlow::from_bytes(&[0xff, 0x00, 0x13]).is_err());
        assert!(matches!(
            CompiledFlow::from_file("/definitely/not/here.bin"),
            Err(ArtifactError::Io { .. })
        ));
    }

    #[test]
    fn test_missing_bundle_file_is_an_io_error() {
        let result = RuleBundle::from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(RuleConversionError::Io { .. })));
    }

    #[test]
    fn test_custom_format_through_into_rule() {
        struct StoredRule {
            key: String,
            event: String,
            condition: serde_json::Value,
        }

        impl IntoRule for StoredRule {
            fn into_rule(self) -> std::result::Result<RuleBundle, RuleConversionError> {
                if self.event.is_empty() {
                    return Err(RuleConversionError::ValidationError(
                        "missing trigger".to_string(),
                    ));
                }
                let mut bundle = RuleBundle::new(RuleDefinition {
                    id: self.key,
                    trigger_type: self.event,
                    logic: LogicNode::from_json(&self.condition),
                });
                bundle.actions = create_actions(1);
                Ok(bundle)
            }
        }

        let stored = StoredRule {
            key: "k1".to_string(),
            event: "ticket.updated".to_string(),
            condition: serde_json::json!({ "field": "priority", "operator": ">=", "value": 3 }),
        };
        let bundle = stored.into_rule().expect("valid stored rule");
        let graph = Compiler::from_bundle(bundle).build().compile();
        assert_eq!(graph.node("cond-0").unwrap().label(), "priority >= 3");

        let invalid = StoredRule {
            key: "k2".to_string(),
            event: String::new(),
            condition: serde_json::Value::Null,
        };
        assert!(matches!(
            invalid.into_rule(),
            Err(RuleConversionError::ValidationError(_))
        ));
    }

    #[test]
    fn test_visualizer_lists_every_layer() {
        let (_, graph) = compile_bundle_json();
        let text = visualize_graph(&graph, "rule-42");

        for layer in 0..graph.layer_count() {
            assert!(text.contains(&format!("--- LAYER {} ---", layer)));
        }
        assert!(text.contains("cond-0 -> cond-0-0 [true]"));
        assert!(text.contains("END OF GRAPH"));
    }

    #[test]
    fn test_flat_form_edit_feeds_back_into_compiler() {
        let loaded = from_logic_tree(create_and_rule().logic.as_ref());
        assert!(loaded.fully_representable);

        let mut form = loaded.form;
        form.rows.push(FlatConditionRow::new("z", "<", 10));
        form.combinator = CombinatorKind::Or;

        let mut rule = create_and_rule();
        rule.logic = form.to_logic_tree();
        let graph = build_graph(&rule, &create_actions(1), &[]);

        assert_eq!(
            graph.node("cond-0").unwrap().label(),
            "Any of: x == 1; y != 2; z < 10"
        );
        // Three children: no branch annotations.
        assert!(graph.outgoing("cond-0").all(|e| e.branch.is_none()));
    }
}
