//! Free-drag demo: a torus and a cone that can be picked up with a click
//! and slid across the grid with the pointer. Click again to drop.
//!
//! There is no renderer here - run with `RUST_LOG=debug` and watch the
//! pick/drop transitions in the log.

use anyhow::Result;
use brae::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut graph = SceneGraph::new();
    let root = graph.root();

    // Shapes
    graph.add(
        root,
        Node::new("torus")
            .with_bounds(Aabb::from_half_extents(
                Vector3::zero(),
                Vector3::new(14.0, 14.0, 4.0),
            ))
            .draggable(),
    )?;

    graph.add(
        root,
        Node::new("cone")
            .at(Vector3::new(10.0, 5.0, 10.0))
            .with_bounds(Aabb::from_half_extents(
                Vector3::zero(),
                Vector3::new(10.0, 5.0, 10.0),
            ))
            .draggable(),
    )?;

    // Lighting (hierarchy entries only; nothing to pick)
    graph.add(root, Node::new("point light").at(Vector3::new(5.0, 5.0, 5.0)))?;
    graph.add(root, Node::new("ambient light"))?;

    // Helpers: pickable geometry (the drag ground plane) but not draggable
    graph.add(
        root,
        Node::new("grid helper").with_bounds(Aabb::from_half_extents(
            Vector3::zero(),
            Vector3::new(100.0, 0.01, 100.0),
        )),
    )?;

    for (name, tip) in [
        ("x axis arrow", Vector3::new(10.0, 1.0, 1.0)),
        ("y axis arrow", Vector3::new(1.0, 10.0, 1.0)),
        ("z axis arrow", Vector3::new(1.0, 1.0, 10.0)),
    ] {
        graph.add(
            root,
            Node::new(name).with_bounds(Aabb::new(-Vector3::new(1.0, 1.0, 1.0), tip)),
        )?;
    }

    let camera = Camera::new(Vector3::new(0.0, 0.0, 30.0), Vector3::zero(), 1.5);
    DemoApp::free_drag("brae - free drag", graph, camera).run();
    Ok(())
}
