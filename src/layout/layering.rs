use crate::graph::{GraphEdge, GraphNode};
use ahash::AHashMap;

/// Result of the layering pass: a layer per node (indexed like the input) and the order in
/// which the traversal finalized the nodes.
pub(super) struct Layering {
    pub layers: Vec<usize>,
    pub order: Vec<usize>,
}

/// Assigns each node the length of the longest path reaching it from a root.
///
/// A Kahn traversal seeded with every node lacking incoming edges, in input order. Each
/// edge is relaxed once, so every node ends strictly below all of its predecessors. If a
/// cycle stalls the queue, the first unfinished node in input order is released with a
/// layer one below its finished predecessors and the traversal resumes.
pub(super) fn assign_layers(nodes: &[GraphNode], edges: &[GraphEdge]) -> Layering {
    let n = nodes.len();

    let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(n);
    for (i, node) in nodes.iter().enumerate() {
        index.entry(node.id.as_str()).or_insert(i);
    }

    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for edge in edges {
        match (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
            (Some(&u), Some(&v)) => {
                successors[u].push(v);
                predecessors[v].push(u);
            }
            _ => log::warn!(
                "Ignoring edge '{}': endpoint '{}' -> '{}' is not a known node",
                edge.id,
                edge.source,
                edge.target
            ),
        }
    }

    let mut in_degree: Vec<usize> = predecessors.iter().map(Vec::len).collect();
    let mut layers = vec![0usize; n];
    let mut finished = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    let mut queue: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut head = 0;

    while order.len() < n {
        if head == queue.len() {
            // Cycle: release the first node still waiting on predecessors.
            let Some(stuck) = (0..n).find(|&v| !finished[v]) else {
                break;
            };
            layers[stuck] = predecessors[stuck]
                .iter()
                .filter(|&&u| finished[u])
                .map(|&u| layers[u] + 1)
                .max()
                .unwrap_or(0);
            log::warn!(
                "Cycle detected at node '{}'; placing it on layer {}",
                nodes[stuck].id,
                layers[stuck]
            );
            in_degree[stuck] = 0;
            queue.push(stuck);
        }

        let u = queue[head];
        head += 1;
        finished[u] = true;
        order.push(u);

        for &v in &successors[u] {
            if finished[v] {
                continue;
            }
            layers[v] = layers[v].max(layers[u] + 1);
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push(v);
            }
        }
    }

    Layering { layers, order }
}
