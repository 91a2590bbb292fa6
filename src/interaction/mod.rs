//! # Interaction Module
//!
//! Pointer-driven object interaction in two variants:
//!
//! - [`DragController`] - toggle-select free dragging: click picks a
//!   draggable node, pointer movement slides it along the ground plane,
//!   the next click drops it
//! - [`GizmoController`] - click attaches an external transform-gizmo
//!   widget to a clickable node and keeps the orbit camera out of the
//!   widget's way
//!
//! Both consume the same collaborators: the scene graph, a
//! [`Raycaster`](crate::picking::Raycaster), and the pointer samples
//! produced by [`PointerTracker`].

pub mod drag;
pub mod gizmo;
pub mod pointer;

// Re-export main types
pub use drag::DragController;
pub use gizmo::{CameraInteraction, GizmoController, GizmoEvent, TransformGizmo};
pub use pointer::{PointerEvent, PointerTracker};
