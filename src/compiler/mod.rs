use crate::graph::{FlowGraph, LaidOutGraph};
use crate::layout::{self, LayoutConfig};
use crate::rule::{ActionSpec, ExecutionRecord, RuleBundle, RuleDefinition};

mod annotate;
mod builder;
mod normalize;

use builder::GraphBuilder;
pub(crate) use normalize::normalize;

/// Compiles a rule into its flow graph.
///
/// The output is a pure function of the inputs: node ids come from the position of each
/// condition in the logic tree (`cond-0`, `cond-0-1`, ...) and the index of each action
/// (`action-0`, ...), so compiling the same input twice yields identical graphs.
///
/// Malformed logic never fails the compile. Combinators without children are removed,
/// and a tree that becomes empty is treated as "always trigger".
pub fn build_graph(
    rule: &RuleDefinition,
    actions: &[ActionSpec],
    executions: &[ExecutionRecord],
) -> FlowGraph {
    let logic = rule.logic.as_ref().and_then(normalize);
    if rule.logic.is_some() && logic.is_none() {
        log::debug!(
            "Rule '{}' has no usable condition after normalization; treating as always-on",
            rule.id
        );
    }

    let graph = GraphBuilder::new(actions, executions).build(rule, logic.as_ref());
    log::debug!(
        "Compiled rule '{}' into {} nodes and {} edges",
        rule.id,
        graph.nodes.len(),
        graph.edges.len()
    );
    graph
}

pub struct Compiler {
    rule: RuleDefinition,
    actions: Vec<ActionSpec>,
    executions: Vec<ExecutionRecord>,
    layout_config: LayoutConfig,
}

pub struct CompilerBuilder {
    rule: RuleDefinition,
    actions: Vec<ActionSpec>,
    executions: Vec<ExecutionRecord>,
    layout_config: LayoutConfig,
}

impl CompilerBuilder {
    pub fn new(rule: RuleDefinition) -> Self {
        Self {
            rule,
            actions: Vec::new(),
            executions: Vec::new(),
            layout_config: LayoutConfig::default(),
        }
    }
    pub fn with_actions(mut self, actions: Vec<ActionSpec>) -> Self {
        self.actions = actions;
        self
    }
    pub fn with_executions(mut self, executions: Vec<ExecutionRecord>) -> Self {
        self.executions = executions;
        self
    }
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout_config = config;
        self
    }
    pub fn build(self) -> Compiler {
        Compiler {
            rule: self.rule,
            actions: self.actions,
            executions: self.executions,
            layout_config: self.layout_config,
        }
    }
}

impl Compiler {
    pub fn builder(rule: RuleDefinition) -> CompilerBuilder {
        CompilerBuilder::new(rule)
    }

    /// Starts a builder pre-filled with the actions and executions of a bundle.
    pub fn from_bundle(bundle: RuleBundle) -> CompilerBuilder {
        CompilerBuilder::new(bundle.rule)
            .with_actions(bundle.actions)
            .with_executions(bundle.executions)
    }

    pub fn rule(&self) -> &RuleDefinition {
        &self.rule
    }

    pub fn actions(&self) -> &[ActionSpec] {
        &self.actions
    }

    /// Builds the unpositioned flow graph.
    pub fn compile(&self) -> FlowGraph {
        build_graph(&self.rule, &self.actions, &self.executions)
    }

    /// Builds the flow graph, lays it out and centers it.
    pub fn compile_laid_out(&self) -> LaidOutGraph {
        layout::arrange(&self.compile(), &self.layout_config)
    }
}
