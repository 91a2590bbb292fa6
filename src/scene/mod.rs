//! # Scene Management Module
//!
//! The scene tree and its textual hierarchy listing. Nodes are positioned,
//! optionally bounded for picking, and carry typed capability flags; the
//! graph hands out stable ids and enforces the tree shape.

pub mod graph;
pub mod hierarchy;

// Re-export main types
pub use graph::{Node, NodeId, PickFlags, SceneError, SceneGraph};
pub use hierarchy::HierarchyEntry;
