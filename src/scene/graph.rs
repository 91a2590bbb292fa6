use cgmath::{Vector3, Zero};
use thiserror::Error;

use crate::picking::Aabb;

/// Stable handle to a node in a [`SceneGraph`].
///
/// Ids stay valid for the lifetime of the graph, even after the node is
/// removed; use [`SceneGraph::is_attached`] to tell a live node from a
/// detached one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Typed picking capability markers.
///
/// The two flags are independent: `draggable` feeds the free-drag
/// controller, `clickable` feeds the gizmo-attach controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickFlags {
    pub draggable: bool,
    pub clickable: bool,
}

/// Errors from structural scene-graph operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("node {0:?} does not exist in this graph")]
    NodeNotFound(NodeId),
    #[error("node {0:?} is detached from the scene root")]
    Detached(NodeId),
    #[error("the scene root cannot be removed")]
    RootRemoval,
}

/// A positioned node in the scene tree.
///
/// Nodes carry a name (empty means "skip in hierarchy listings"), a local
/// translation, an optional local pick volume and the capability flags.
/// Parent/child links are owned by the graph and only mutated through it.
pub struct Node {
    pub name: String,
    pub position: Vector3<f32>,
    bounds: Option<Aabb>,
    flags: PickFlags,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vector3::zero(),
            bounds: None,
            flags: PickFlags::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Unnamed group node, skipped by hierarchy listings but still
    /// traversed.
    pub fn group() -> Self {
        Self::new("")
    }

    /// Sets the local translation (builder style)
    pub fn at(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    /// Attaches a local-space pick volume
    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Marks the node as draggable (free-drag variant eligibility)
    pub fn draggable(mut self) -> Self {
        self.flags.draggable = true;
        self
    }

    /// Marks the node as clickable (gizmo-attach variant eligibility)
    pub fn clickable(mut self) -> Self {
        self.flags.clickable = true;
        self
    }

    pub fn is_draggable(&self) -> bool {
        self.flags.draggable
    }

    pub fn is_clickable(&self) -> bool {
        self.flags.clickable
    }

    pub fn flags(&self) -> PickFlags {
        self.flags
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed scene tree.
///
/// The root node is created with the graph and lives as long as it does.
/// Children are stored in insertion order; removing a node unlinks its
/// whole subtree but keeps the slots (ids stay stable, attachment checks
/// turn false).
pub struct SceneGraph {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SceneGraph {
    /// Creates a graph with a root node named `"scene"`
    pub fn new() -> Self {
        let root = Node::new("scene");
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Adds `node` as the last child of `parent` and returns its id.
    ///
    /// Non-empty names are made unique within the graph so hierarchy
    /// listings stay unambiguous.
    pub fn add(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId, SceneError> {
        if parent.0 >= self.nodes.len() {
            return Err(SceneError::NodeNotFound(parent));
        }
        if !node.name.is_empty() {
            node.name = self.ensure_unique_name(&node.name);
        }

        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Unlinks `id` (and its subtree) from the graph.
    pub fn remove(&mut self, id: NodeId) -> Result<(), SceneError> {
        if id == self.root {
            return Err(SceneError::RootRemoval);
        }
        let parent = self
            .nodes
            .get(id.0)
            .ok_or(SceneError::NodeNotFound(id))?
            .parent
            .ok_or(SceneError::Detached(id))?;

        self.nodes[parent.0].children.retain(|child| *child != id);
        self.nodes[id.0].parent = None;
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// True while a path of parent links leads from `id` to the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes.get(current.0).and_then(|node| node.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Pre-order list of `id` and every node below it
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if id.0 >= self.nodes.len() {
            return out;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            // reverse push so the stack pops children left-to-right
            for child in self.nodes[current.0].children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// World-space translation: the sum of the node's and all its
    /// ancestors' local positions.
    pub fn world_position(&self, id: NodeId) -> Option<Vector3<f32>> {
        let mut sum = Vector3::zero();
        let mut current = Some(id);
        if id.0 >= self.nodes.len() {
            return None;
        }
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            sum += node.position;
            current = node.parent;
        }
        Some(sum)
    }

    /// Local pick volume translated into world space
    pub fn world_bounds(&self, id: NodeId) -> Option<Aabb> {
        let bounds = self.nodes.get(id.0)?.bounds?;
        let offset = self.world_position(id)?;
        Some(bounds.translate(offset))
    }

    /// Number of nodes still attached to the root
    pub fn node_count(&self) -> usize {
        self.descendants(self.root).len()
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.nodes.iter().any(|node| node.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_attachment() {
        let mut graph = SceneGraph::new();
        let torus = graph
            .add(graph.root(), Node::new("torus").draggable())
            .unwrap();

        assert!(graph.is_attached(torus));
        assert_eq!(graph.parent_of(torus), Some(graph.root()));
        assert_eq!(graph.children_of(graph.root()), &[torus]);
        assert!(graph.node(torus).unwrap().is_draggable());
        assert!(!graph.node(torus).unwrap().is_clickable());
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let mut graph = SceneGraph::new();
        let group = graph.add(graph.root(), Node::group()).unwrap();
        let child = graph.add(group, Node::new("head")).unwrap();

        graph.remove(group).unwrap();

        assert!(!graph.is_attached(group));
        assert!(!graph.is_attached(child));
        // ids stay valid after removal
        assert_eq!(graph.node(child).unwrap().name, "head");
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_root_cannot_be_removed() {
        let mut graph = SceneGraph::new();
        assert_eq!(graph.remove(graph.root()), Err(SceneError::RootRemoval));
    }

    #[test]
    fn test_world_position_accumulates() {
        let mut graph = SceneGraph::new();
        let group = graph
            .add(graph.root(), Node::group().at(Vector3::new(10.0, 0.0, 10.0)))
            .unwrap();
        let head = graph
            .add(group, Node::new("head").at(Vector3::new(0.0, 7.0, 0.0)))
            .unwrap();

        assert_eq!(
            graph.world_position(head).unwrap(),
            Vector3::new(10.0, 7.0, 10.0)
        );
    }

    #[test]
    fn test_names_are_made_unique() {
        let mut graph = SceneGraph::new();
        let a = graph.add(graph.root(), Node::new("arrow")).unwrap();
        let b = graph.add(graph.root(), Node::new("arrow")).unwrap();

        assert_eq!(graph.node(a).unwrap().name, "arrow");
        assert_eq!(graph.node(b).unwrap().name, "arrow (1)");
    }

    #[test]
    fn test_descendants_preorder() {
        let mut graph = SceneGraph::new();
        let a = graph.add(graph.root(), Node::new("a")).unwrap();
        let b = graph.add(graph.root(), Node::new("b")).unwrap();
        let c = graph.add(a, Node::new("c")).unwrap();

        assert_eq!(graph.descendants(graph.root()), vec![graph.root(), a, c, b]);
    }
}
