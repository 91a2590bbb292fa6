//! Indented hierarchy listings.
//!
//! Flattens the scene tree into display lines: pre-order depth-first,
//! children in declared order, two spaces of indentation per depth level.
//! Unnamed nodes emit no line of their own but are still descended into,
//! so their children keep their true graph depth.

use super::graph::{NodeId, SceneGraph};

/// Two spaces per depth level
const INDENT: &str = "  ";

/// One emitted row of the hierarchy listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyEntry {
    pub name: String,
    pub depth: usize,
}

/// Flattens the subtree under `root` into listing entries.
///
/// Uses an explicit stack rather than recursion: each node is pushed with
/// its depth, children are pushed in reverse index order so the stack pops
/// them left-to-right. Every reachable node is visited exactly once.
pub fn list(graph: &SceneGraph, root: NodeId) -> Vec<HierarchyEntry> {
    let mut entries = Vec::new();
    if graph.node(root).is_none() {
        return entries;
    }

    let mut stack = vec![(root, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        let node = match graph.node(id) {
            Some(node) => node,
            None => continue,
        };

        // Unnamed nodes are skipped but their children are not
        if !node.name.is_empty() {
            entries.push(HierarchyEntry {
                name: node.name.clone(),
                depth,
            });
        }

        for child in node.children().iter().rev() {
            stack.push((*child, depth + 1));
        }
    }

    entries
}

/// Renders the listing as indented text lines
pub fn lines(graph: &SceneGraph, root: NodeId) -> Vec<String> {
    list(graph, root)
        .into_iter()
        .map(|entry| format!("{}{}", INDENT.repeat(entry.depth), entry.name))
        .collect()
}
