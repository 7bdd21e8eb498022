use super::definition::RuleBundle;
use crate::error::RuleConversionError;

/// A trait for custom storage models that can be converted into a zukai `RuleBundle`.
///
/// This is the extension point that keeps zukai independent of any particular rule
/// store. Implement it on the records your storage layer returns and the compiler can
/// consume them directly.
///
/// # Example
///
/// ```rust,no_run
/// use zukai::prelude::*;
/// use zukai::error::RuleConversionError;
///
/// struct StoredRule { key: String, event: String, outputs: Vec<String> }
///
/// impl IntoRule for StoredRule {
///     fn into_rule(self) -> std::result::Result<RuleBundle, RuleConversionError> {
///         if self.event.is_empty() {
///             return Err(RuleConversionError::ValidationError("missing trigger".into()));
///         }
///         let mut bundle = RuleBundle::new(RuleDefinition::new(self.key, self.event));
///         bundle.actions = self
///             .outputs
///             .into_iter()
///             .enumerate()
///             .map(|(i, label)| ActionSpec::new(format!("out-{}", i), label))
///             .collect();
///         Ok(bundle)
///     }
/// }
/// ```
pub trait IntoRule {
    /// Consumes the object and converts it into a compilable rule bundle.
    fn into_rule(self) -> Result<RuleBundle, RuleConversionError>;
}

impl IntoRule for RuleBundle {
    fn into_rule(self) -> Result<RuleBundle, RuleConversionError> {
        Ok(self)
    }
}
