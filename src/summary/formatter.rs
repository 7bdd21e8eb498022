use crate::ast::{self, CombinatorKind, LogicNode};
use crate::compiler::normalize;
use crate::rule::{ActionSpec, RuleDefinition};
use itertools::Itertools;

/// Formats rules and conditions into human-readable text
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// One sentence describing the whole rule.
    ///
    /// `When <trigger>, if <condition>, then <action>, <action>.` A rule without a
    /// condition reads `When <trigger>, always ...` and one without actions ends in
    /// `do nothing`. The condition is normalized the same way the compiler does, so the
    /// sentence always matches the compiled graph.
    pub fn describe_rule(rule: &RuleDefinition, actions: &[ActionSpec]) -> String {
        let condition = match rule.logic.as_ref().and_then(normalize) {
            Some(logic) => format!("if {}", ast::label(&logic)),
            None => "always".to_string(),
        };
        let outcome = if actions.is_empty() {
            "do nothing".to_string()
        } else {
            actions.iter().map(|a| a.label.as_str()).join(", ")
        };
        format!("When {}, {}, then {}.", rule.trigger_type, condition, outcome)
    }

    /// Compact infix rendering such as `(a == 1 OR b == 2) AND c > 3`.
    ///
    /// Empty groups are dropped first; a tree with nothing left reads `always`.
    pub fn format_infix(node: &LogicNode) -> String {
        match normalize(node) {
            // Start the recursive formatting with the lowest possible parent precedence.
            Some(node) => Self::format_recursive(&node, 0),
            None => "always".to_string(),
        }
    }

    /// Recursively formats the tree, adding parentheses only when necessary.
    fn format_recursive(node: &LogicNode, parent_precedence: u8) -> String {
        match node {
            LogicNode::Predicate { .. } => ast::label(node),
            // A one-child group is just its child.
            LogicNode::Combinator { children, .. } if children.len() == 1 => {
                Self::format_recursive(&children[0], parent_precedence)
            }
            LogicNode::Combinator { kind, children } => {
                let current_precedence = Self::precedence(*kind);
                let body = children
                    .iter()
                    .map(|child| Self::format_recursive(child, current_precedence))
                    .join(&format!(" {} ", kind));
                if current_precedence < parent_precedence {
                    format!("({})", body)
                } else {
                    body
                }
            }
        }
    }

    fn precedence(kind: CombinatorKind) -> u8 {
        match kind {
            CombinatorKind::Or => 1,
            CombinatorKind::And => 2,
        }
    }
}
