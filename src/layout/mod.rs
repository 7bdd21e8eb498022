//! Deterministic hierarchical layout for compiled flow graphs.
//!
//! The engine is a simplified layered layout: nodes are placed on the layer given by
//! their longest path from a root, kept in traversal order inside the layer (no crossing
//! minimization), spaced evenly, and finally every layer is centered on one shared
//! vertical axis. There is no randomness or iteration, so identical graphs always
//! produce identical coordinates.

use crate::error::ConfigError;
use crate::graph::{FlowGraph, LaidOutGraph, PositionedNode};
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;

mod layering;

use layering::assign_layers;

/// Spacing and node size used by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical distance between consecutive layers.
    #[serde(alias = "layerSpacing")]
    pub layer_spacing: f64,
    /// Horizontal distance between neighbouring node origins within a layer.
    #[serde(alias = "nodeSpacing")]
    pub node_spacing: f64,
    #[serde(alias = "nodeWidth")]
    pub node_width: f64,
    #[serde(alias = "nodeHeight")]
    pub node_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_spacing: 150.0,
            node_spacing: 250.0,
            node_width: 200.0,
            node_height: 60.0,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a config from JSON. Missing keys take their default.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("layer_spacing", self.layer_spacing),
            ("node_spacing", self.node_spacing),
            ("node_width", self.node_width),
            ("node_height", self.node_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpacing { name, value });
            }
        }
        Ok(())
    }

    /// Node spacing actually used: never less than the node width, so nodes sharing a
    /// layer cannot overlap.
    pub fn effective_node_spacing(&self) -> f64 {
        self.node_spacing.max(self.node_width)
    }
}

/// Assigns every node a layer and an uncentered position.
///
/// `y = layer * layer_spacing` and `x = index * node_spacing`, where `index` is the
/// node's rank among its layer in traversal order. Nodes keep their input order in the
/// output. Edges are passed through unchanged.
pub fn layout(graph: &FlowGraph, config: &LayoutConfig) -> LaidOutGraph {
    let layering = assign_layers(&graph.nodes, &graph.edges);
    let spacing = config.effective_node_spacing();

    let mut slot = vec![0usize; graph.nodes.len()];
    let mut next_in_layer: AHashMap<usize, usize> = AHashMap::new();
    for &i in &layering.order {
        let counter = next_in_layer.entry(layering.layers[i]).or_insert(0);
        slot[i] = *counter;
        *counter += 1;
    }

    let nodes = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| PositionedNode {
            node: node.clone(),
            layer: layering.layers[i],
            x: slot[i] as f64 * spacing,
            y: layering.layers[i] as f64 * config.layer_spacing,
        })
        .collect();

    log::debug!(
        "Laid out {} nodes across {} layers",
        graph.nodes.len(),
        next_in_layer.len()
    );

    LaidOutGraph {
        nodes,
        edges: graph.edges.clone(),
    }
}

/// Shifts each layer horizontally so that its midpoint sits on a common axis.
///
/// A layer spans `[min x, max x + node_width]`. The axis is the midpoint of the widest
/// layer (the lowest such layer on ties). Spacing inside a layer is unchanged.
pub fn center(mut nodes: Vec<PositionedNode>, config: &LayoutConfig) -> Vec<PositionedNode> {
    let mut extents: AHashMap<usize, (f64, f64)> = AHashMap::new();
    for node in &nodes {
        let extent = extents.entry(node.layer).or_insert((node.x, node.x));
        extent.0 = extent.0.min(node.x);
        extent.1 = extent.1.max(node.x);
    }

    let midpoint = |(min, max): (f64, f64)| (min + max + config.node_width) / 2.0;

    let mut widest: Option<(f64, (f64, f64))> = None;
    for (_, &extent) in extents.iter().sorted_by_key(|(layer, _)| **layer) {
        let width = extent.1 - extent.0;
        if widest.is_none_or(|(w, _)| width > w) {
            widest = Some((width, extent));
        }
    }
    let Some((_, widest_extent)) = widest else {
        return nodes;
    };
    let axis = midpoint(widest_extent);

    for node in &mut nodes {
        if let Some(&extent) = extents.get(&node.layer) {
            node.x += axis - midpoint(extent);
        }
    }
    nodes
}

/// Runs [`layout`] followed by [`center`].
pub fn arrange(graph: &FlowGraph, config: &LayoutConfig) -> LaidOutGraph {
    let laid_out = layout(graph, config);
    LaidOutGraph {
        nodes: center(laid_out.nodes, config),
        edges: laid_out.edges,
    }
}
