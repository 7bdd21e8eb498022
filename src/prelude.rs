//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the zukai crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use zukai::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let bundle = RuleBundle::from_file("path/to/rule.json")?;
//! let config = LayoutConfig::from_file("path/to/layout.json")?;
//!
//! let compiler = Compiler::from_bundle(bundle)
//!     .with_layout_config(config)
//!     .build();
//! let graph = compiler.compile_laid_out();
//!
//! println!("{}", to_ui_json(&graph)?);
//! # Ok(())
//! # }
//! ```

// Compilation and layout
pub use crate::compiler::{Compiler, build_graph};
pub use crate::layout::{LayoutConfig, arrange, center, layout};

// Logic tree and labels
pub use crate::ast::{CombinatorKind, LogicNode, Operator, Scalar, label};

// Graph types
pub use crate::graph::{
    Branch, FlowGraph, GraphEdge, GraphNode, LaidOutGraph, NodeData, NodeKind, PositionedNode,
};

// Rule input and artifacts
pub use crate::rule::{
    ActionSpec, CompiledFlow, ExecutionRecord, ExecutionStatus, IntoRule, RuleBundle,
    RuleDefinition,
};

// Flat form
pub use crate::form::{FlatConditionRow, FlatForm, FlatFormLoad, from_logic_tree, to_logic_tree};

// Text and renderer output
pub use crate::summary::SummaryFormatter;
pub use crate::ui::{UiFlow, to_ui_flow, to_ui_json};

// Error types
pub use crate::error::{ArtifactError, ConfigError, RuleConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
