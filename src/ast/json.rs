use super::{CombinatorKind, LogicNode, Operator, Scalar};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

impl LogicNode {
    /// Reads a logic node from JSON, returning `None` for anything malformed.
    ///
    /// Accepted shapes:
    /// * `{"field": .., "operator" | "op": .., "value": ..}`
    /// * `{"and": [..]}` / `{"or": [..]}` (any letter case)
    /// * `{"combinator": "and" | "or", "children" | "conditions": [..]}`
    ///
    /// Malformed children of a combinator are dropped rather than failing the whole tree.
    pub fn from_json(value: &Value) -> Option<LogicNode> {
        let object = value.as_object()?;

        if let Some(field) = object.get("field") {
            return parse_predicate(field, object);
        }

        if let Some(kind) = object
            .get("combinator")
            .and_then(Value::as_str)
            .and_then(CombinatorKind::parse)
        {
            let children = object
                .get("children")
                .or_else(|| object.get("conditions"))?;
            return parse_combinator(kind, children);
        }

        // Single-key form such as {"and": [...]}
        if object.len() == 1 {
            let (key, children) = object.iter().next()?;
            let kind = CombinatorKind::parse(key)?;
            return parse_combinator(kind, children);
        }

        None
    }

    /// Writes the canonical JSON shape read back by [`LogicNode::from_json`].
    pub fn to_json(&self) -> Value {
        match self {
            LogicNode::Predicate {
                field,
                operator,
                value,
            } => {
                let mut object = Map::new();
                object.insert("field".to_string(), Value::String(field.clone()));
                object.insert(
                    "operator".to_string(),
                    Value::String(operator.as_str().to_string()),
                );
                object.insert("value".to_string(), value.to_json());
                Value::Object(object)
            }
            LogicNode::Combinator { kind, children } => {
                let mut object = Map::new();
                object.insert(
                    kind.key().to_string(),
                    Value::Array(children.iter().map(LogicNode::to_json).collect()),
                );
                Value::Object(object)
            }
        }
    }
}

fn parse_predicate(field: &Value, object: &Map<String, Value>) -> Option<LogicNode> {
    let field = field.as_str()?;
    let operator = object
        .get("operator")
        .or_else(|| object.get("op"))
        .and_then(Value::as_str)?;
    let value = object.get("value").map_or(Scalar::Null, Scalar::from_json);
    Some(LogicNode::Predicate {
        field: field.to_string(),
        operator: Operator::parse(operator),
        value,
    })
}

fn parse_combinator(kind: CombinatorKind, children: &Value) -> Option<LogicNode> {
    let children = children
        .as_array()?
        .iter()
        .filter_map(LogicNode::from_json)
        .collect();
    Some(LogicNode::Combinator { kind, children })
}

impl Serialize for LogicNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LogicNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        LogicNode::from_json(&value)
            .ok_or_else(|| D::Error::custom(format!("malformed logic node: {}", value)))
    }
}

/// Lenient reader for optional logic fields: malformed trees become `None`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<LogicNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| {
        let parsed = LogicNode::from_json(v);
        if parsed.is_none() && !v.is_null() {
            log::debug!("Ignoring malformed rule logic: {}", v);
        }
        parsed
    }))
}
