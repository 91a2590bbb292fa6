//! # Brae Prelude
//!
//! Convenience imports for typical demo setups:
//!
//! ```no_run
//! use brae::prelude::*;
//!
//! let mut graph = SceneGraph::new();
//! let torus = graph
//!     .add(
//!         graph.root(),
//!         Node::new("torus")
//!             .with_bounds(Aabb::from_half_extents(
//!                 Vector3::zero(),
//!                 Vector3::new(14.0, 14.0, 4.0),
//!             ))
//!             .draggable(),
//!     )
//!     .unwrap();
//!
//! let camera = Camera::new(Vector3::new(0.0, 0.0, 30.0), Vector3::zero(), 1.5);
//! DemoApp::free_drag("demo", graph, camera).run();
//! # let _ = torus;
//! ```

// Re-export core application types
pub use crate::app::DemoApp;

// Re-export scene and picking types
pub use crate::camera::{Camera, Viewport};
pub use crate::picking::{Aabb, AabbRaycaster, Hit, PointerSample, Ray, Raycaster};
pub use crate::scene::{hierarchy, Node, NodeId, PickFlags, SceneError, SceneGraph};

// Re-export interaction controllers and seams
pub use crate::interaction::{
    CameraInteraction, DragController, GizmoController, GizmoEvent, PointerEvent, PointerTracker,
    TransformGizmo,
};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
