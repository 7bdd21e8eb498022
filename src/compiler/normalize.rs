use crate::ast::LogicNode;

/// Removes combinators that end up with no children, bottom-up.
///
/// Returns `None` when nothing is left, which callers treat as "no condition".
pub(crate) fn normalize(node: &LogicNode) -> Option<LogicNode> {
    match node {
        LogicNode::Predicate { .. } => Some(node.clone()),
        LogicNode::Combinator { kind, children } => {
            let kept: Vec<LogicNode> = children.iter().filter_map(normalize).collect();
            if kept.is_empty() {
                log::debug!("Dropping empty {} combinator", kind);
                None
            } else {
                Some(LogicNode::Combinator {
                    kind: *kind,
                    children: kept,
                })
            }
        }
    }
}
