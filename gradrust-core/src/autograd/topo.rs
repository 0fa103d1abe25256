use std::collections::HashSet;

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};

/// Recursively builds a post-order topological sort of the ancestors of
/// `node`. Used by `backward()` to process nodes in the correct order.
///
/// The visited set is keyed by `NodeId` — node identity, not value
/// equality — so a node reachable through several paths (a reused
/// sub-expression) is emitted exactly once.
pub(crate) fn build_topo(
    graph: &Graph,
    node: NodeId,
    visited: &mut HashSet<NodeId>,
    sorted_list: &mut Vec<NodeId>,
) {
    if visited.contains(&node) {
        return;
    }
    visited.insert(node);
    for parent in graph.nodes[node.0].op.parents() {
        build_topo(graph, parent, visited, sorted_list);
    }
    sorted_list.push(node);
}

/// Post-order ancestor sequence of `root`: each node appears after all of
/// its parents, and each reachable node appears exactly once.
///
/// For backward propagation the sequence is consumed in reverse (root
/// first, leaves last), since gradient flows from the root toward the
/// leaves. Cost is O(edges); no node is revisited.
///
/// Recursion depth is bounded by the longest path through the graph —
/// network depth times a small constant for the graphs built here.
pub fn topo_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, GradRustError> {
    graph.node(root)?;
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(graph, root, &mut visited, &mut sorted_list);
    Ok(sorted_list)
}

// --- Tests ---
#[cfg(test)]
#[path = "topo_test.rs"]
mod tests;
