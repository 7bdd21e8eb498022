use super::{CombinatorKind, LogicNode};
use itertools::Itertools;

/// Renders a logic node as a plain-language sentence.
///
/// Predicates read `field operator value`; combinators read `All of: ...` or
/// `Any of: ...` with their children separated by `"; "`. The operator is written
/// verbatim, so unknown operators come out as their raw text. This function never
/// fails.
pub fn label(node: &LogicNode) -> String {
    match node {
        LogicNode::Predicate {
            field,
            operator,
            value,
        } => format!("{} {} {}", field, operator, value),
        LogicNode::Combinator { kind, children } => {
            let prefix = match kind {
                CombinatorKind::And => "All of: ",
                CombinatorKind::Or => "Any of: ",
            };
            format!("{}{}", prefix, children.iter().map(label).join("; "))
        }
    }
}
