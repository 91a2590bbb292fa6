//! Gizmo-attach demo: clicking a torus, an arrow or a tri-arrow composite
//! binds the transform gizmo to it; clicking empty space or the grid lets
//! go. The arrows are parent groups over head/tail meshes, so they also
//! exercise the parent-fallback pick path and give the hierarchy listing
//! some depth.
//!
//! The gizmo itself is a stand-in that only logs attachment - a real
//! widget slots in through the same `TransformGizmo` trait.

use anyhow::Result;
use brae::prelude::*;
use log::info;

/// Stand-in widget: logs what a real gizmo would latch onto
struct LogGizmo;

impl TransformGizmo for LogGizmo {
    fn attach(&mut self, node: NodeId) {
        info!("gizmo attached to {:?}", node);
    }

    fn detach(&mut self) {
        info!("gizmo detached");
    }
}

/// Head-and-tail composite: the group carries the flags, the meshes carry
/// the bounds (tail along the axis, head capping it).
fn add_arrow(
    graph: &mut SceneGraph,
    parent: NodeId,
    name: &str,
    position: Vector3<f32>,
    up: Vector3<f32>,
) -> Result<NodeId> {
    let tail_half = 5.0;
    let head_half = 2.0;
    let radius = 0.75;

    let arrow = graph.add(parent, Node::new(name).at(position).clickable())?;

    // `up` is a unit axis: tail_half along it, the tube radius elsewhere
    let tail_extents = up * tail_half + (Vector3::new(1.0, 1.0, 1.0) - up) * radius;
    graph.add(
        arrow,
        Node::new("tail")
            .at(up * tail_half)
            .with_bounds(Aabb::from_half_extents(Vector3::zero(), tail_extents)),
    )?;
    graph.add(
        arrow,
        Node::new("head")
            .at(up * (tail_half * 2.0 + head_half))
            .with_bounds(Aabb::from_half_extents(
                Vector3::zero(),
                Vector3::new(head_half, head_half, head_half),
            )),
    )?;

    Ok(arrow)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut graph = SceneGraph::new();
    let root = graph.root();

    // Lighting
    graph.add(root, Node::new("point light"))?;
    graph.add(root, Node::new("ambient light"))?;

    // Shapes
    graph.add(
        root,
        Node::new("torus")
            .with_bounds(Aabb::from_half_extents(
                Vector3::zero(),
                Vector3::new(14.0, 14.0, 4.0),
            ))
            .clickable(),
    )?;

    add_arrow(
        &mut graph,
        root,
        "arrow",
        Vector3::new(10.0, 0.0, 10.0),
        Vector3::unit_y(),
    )?;

    // Tri-arrow: one clickable group holding an arrow per axis
    let tri = graph.add(
        root,
        Node::new("tri-arrow")
            .at(Vector3::new(20.0, 0.0, 20.0))
            .clickable(),
    )?;
    add_arrow(&mut graph, tri, "x arrow", Vector3::new(5.0, 0.0, 0.0), Vector3::unit_x())?;
    add_arrow(&mut graph, tri, "y arrow", Vector3::new(0.0, 5.0, 0.0), Vector3::unit_y())?;
    add_arrow(&mut graph, tri, "z arrow", Vector3::new(0.0, 0.0, 5.0), Vector3::unit_z())?;

    // Helpers
    graph.add(
        root,
        Node::new("grid helper").with_bounds(Aabb::from_half_extents(
            Vector3::zero(),
            Vector3::new(100.0, 0.01, 100.0),
        )),
    )?;
    graph.add(
        root,
        Node::new("axes helper").with_bounds(Aabb::from_half_extents(
            Vector3::zero(),
            Vector3::new(4.0, 4.0, 4.0),
        )),
    )?;

    let camera = Camera::new(Vector3::new(40.0, 40.0, 40.0), Vector3::zero(), 1.5);
    DemoApp::gizmo_attach("brae - gizmo attach", graph, camera, Box::new(LogGizmo)).run();
    Ok(())
}
