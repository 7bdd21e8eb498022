use super::{LaidOutGraph, PositionedNode};
use itertools::Itertools;
use std::fmt::Write;

/// Formats a laid-out graph into a human-readable, layer-by-layer listing for debugging.
pub fn visualize_graph(graph: &LaidOutGraph, name: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "======== FLOW GRAPH for Rule: {} ========", name);

    let layers = graph
        .nodes
        .iter()
        .sorted_by(|a, b| a.layer.cmp(&b.layer).then(a.x.total_cmp(&b.x)))
        .chunk_by(|n| n.layer);

    for (layer, nodes) in &layers {
        let _ = writeln!(output, "\n--- LAYER {} ---", layer);
        for node in nodes {
            format_node(&mut output, node);
        }
    }

    if !graph.edges.is_empty() {
        let _ = writeln!(output, "\n--- EDGES ---");
        for edge in &graph.edges {
            let branch = edge
                .branch
                .map_or(String::new(), |b| format!(" [{}]", b.as_str()));
            let _ = writeln!(output, "{} -> {}{}", edge.source, edge.target, branch);
        }
    }

    let _ = writeln!(output, "\n================ END OF GRAPH ================");
    output
}

fn format_node(output: &mut String, positioned: &PositionedNode) {
    let _ = writeln!(
        output,
        "{:<16} {:<10} ({:>8.1}, {:>8.1})  {}",
        positioned.node.id,
        positioned.node.kind().as_str(),
        positioned.x,
        positioned.y,
        positioned.node.label()
    );
}
