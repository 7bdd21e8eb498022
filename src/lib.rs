//! # Zukai - Rule Logic Compiler and Flow-Graph Layout Engine
//!
//! **Zukai** turns declarative trigger/condition/action rules into diagrams. It compiles
//! a rule's boolean condition tree into a graph of typed nodes, lays that graph out
//! deterministically, and explains the logic in plain language. It never evaluates rules,
//! stores them, or touches the network: every operation is a pure transformation from
//! one data shape to another.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Read a `RuleBundle` from JSON, or implement `IntoRule` for the
//!     records your rule store returns.
//! 2.  **Compile**: `Compiler::builder` (or `build_graph`) lowers the trigger, the logic
//!     tree and the actions into a `FlowGraph` of trigger, condition and action nodes.
//! 3.  **Lay Out**: `layout::arrange` assigns each node a layer and coordinates and
//!     centers every layer on a common axis.
//! 4.  **Render**: hand the `LaidOutGraph` to your renderer, or convert it with
//!     `ui::to_ui_flow` into the node/edge/handle shape of a node-based canvas.
//!
//! The `form` module converts between the flat rows of a "simple edit" form and the
//! nested logic tree, and `label` / `SummaryFormatter` render conditions as text.
//!
//! ## Quick Start
//!
//! ```rust
//! use zukai::prelude::*;
//!
//! let rule = RuleDefinition::new("r1", "order.created")
//!     .with_logic(LogicNode::predicate("score", ">", 80));
//! let actions = vec![ActionSpec::new("a1", "notify")];
//!
//! let compiler = Compiler::builder(rule).with_actions(actions).build();
//! let graph = compiler.compile_laid_out();
//!
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.node("cond-0").unwrap().node.label(), "score > 80");
//! assert_eq!(graph.node("action-0").unwrap().layer, 2);
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod form;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod rule;
pub mod summary;
pub mod ui;
