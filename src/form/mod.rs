//! Conversion between the flat "simple edit" form and the nested logic tree.
//!
//! The flat form is an ordered list of `field / operator / value` rows joined by one
//! combinator. It covers exactly the trees that are `None`, a bare predicate, or a single
//! combinator whose children are all predicates. Deeper trees can still be loaded, but
//! only their top-level predicates survive and [`FlatFormLoad::fully_representable`] is
//! `false` so the caller can warn before an edit discards the nested groups.

use crate::ast::{CombinatorKind, LogicNode, Operator, Scalar};
use serde::{Deserialize, Serialize};

/// One editable row of the flat form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatConditionRow {
    pub field: String,
    pub operator: Operator,
    #[serde(with = "crate::ast::scalar_as_json")]
    pub value: Scalar,
}

impl FlatConditionRow {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<Operator>,
        value: impl Into<Scalar>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    fn to_predicate(&self) -> LogicNode {
        LogicNode::Predicate {
            field: self.field.clone(),
            operator: self.operator.clone(),
            value: self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatForm {
    pub rows: Vec<FlatConditionRow>,
    #[serde(with = "combinator_name")]
    pub combinator: CombinatorKind,
}

impl FlatForm {
    pub fn new(rows: Vec<FlatConditionRow>, combinator: CombinatorKind) -> Self {
        Self { rows, combinator }
    }

    /// Drops rows the user has not filled in yet (blank field name).
    pub fn without_blank_rows(mut self) -> Self {
        self.rows.retain(|row| !row.field.trim().is_empty());
        self
    }

    pub fn to_logic_tree(&self) -> Option<LogicNode> {
        to_logic_tree(&self.rows, self.combinator)
    }
}

/// Result of loading a tree into the flat form.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatFormLoad {
    pub form: FlatForm,
    /// `false` when nested groups had to be dropped to fit the flat form.
    pub fully_representable: bool,
}

/// Builds the logic tree for a list of rows.
///
/// No rows gives `None`, a single row gives the bare predicate, and two or more rows
/// are wrapped in one combinator of the given kind.
pub fn to_logic_tree(rows: &[FlatConditionRow], combinator: CombinatorKind) -> Option<LogicNode> {
    match rows {
        [] => None,
        [row] => Some(row.to_predicate()),
        _ => Some(LogicNode::Combinator {
            kind: combinator,
            children: rows.iter().map(FlatConditionRow::to_predicate).collect(),
        }),
    }
}

/// Loads a logic tree into the flat form. Never fails; see the module docs for how
/// nested trees are flattened.
pub fn from_logic_tree(tree: Option<&LogicNode>) -> FlatFormLoad {
    let Some(tree) = tree else {
        return FlatFormLoad {
            form: FlatForm::default(),
            fully_representable: true,
        };
    };

    match tree {
        LogicNode::Predicate {
            field,
            operator,
            value,
        } => FlatFormLoad {
            form: FlatForm::new(
                vec![FlatConditionRow {
                    field: field.clone(),
                    operator: operator.clone(),
                    value: value.clone(),
                }],
                CombinatorKind::And,
            ),
            fully_representable: true,
        },
        LogicNode::Combinator { kind, children } => {
            let mut rows = Vec::with_capacity(children.len());
            let mut fully_representable = true;
            for child in children {
                match child {
                    LogicNode::Predicate {
                        field,
                        operator,
                        value,
                    } => rows.push(FlatConditionRow {
                        field: field.clone(),
                        operator: operator.clone(),
                        value: value.clone(),
                    }),
                    LogicNode::Combinator { .. } => fully_representable = false,
                }
            }
            if !fully_representable {
                log::debug!(
                    "Flattening nested {} group: {} of {} conditions kept",
                    kind,
                    rows.len(),
                    children.len()
                );
            }
            FlatFormLoad {
                form: FlatForm::new(rows, *kind),
                fully_representable,
            }
        }
    }
}

/// Serializes the combinator as `"AND"` / `"OR"`, the way form state is exchanged with the UI.
mod combinator_name {
    use crate::ast::CombinatorKind;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(kind: &CombinatorKind, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&kind.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<CombinatorKind, D::Error> {
        let name = String::deserialize(d)?;
        CombinatorKind::parse(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown combinator '{}'", name)))
    }
}
