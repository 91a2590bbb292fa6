// src/lib.rs
//! Brae Interaction Toolkit
//!
//! Scene-graph picking and drag interaction built on winit and cgmath: an
//! arena scene tree with typed pick flags, mouse ray-casting against node
//! bounds, two selection state machines (free-drag and transform-gizmo
//! attach) and indented hierarchy listings. Rendering stays with whatever
//! engine sits underneath.

pub mod app;
pub mod camera;
pub mod interaction;
pub mod picking;
pub mod prelude;
pub mod scene;

// Re-export main types for convenience
pub use app::DemoApp;
pub use scene::SceneGraph;
