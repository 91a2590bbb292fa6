//! Free-drag interaction: one click selects, moving the pointer drags the
//! selection across whatever geometry the ray strikes, the next click
//! drops it.

use log::debug;

use crate::camera::Camera;
use crate::picking::{PointerSample, Raycaster};
use crate::scene::{NodeId, SceneGraph};

/// Toggle-select / free-drag controller.
///
/// Two states: `Idle` (no selection) and `Dragging` (selection set). A
/// click on a draggable node (or on a child whose immediate parent is
/// draggable, for composite groups) enters `Dragging`; any click while
/// dragging drops the selection without re-picking; pointer movement while
/// dragging slides the selected node's X/Z along the ground intersection.
/// Y is never touched.
///
/// The controller owns the selection and re-derives everything else from
/// the live graph each event, so it can never act on a detached node.
pub struct DragController {
    selected: Option<NodeId>,
    move_sample: PointerSample,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            selected: None,
            move_sample: PointerSample::default(),
        }
    }

    /// Currently selected node, if any
    pub fn selection(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }

    /// Handles a primary-button press.
    ///
    /// While a selection is active the click always clears it, regardless
    /// of target. While idle, an empty click is a no-op and a click on an
    /// eligible node (or eligible immediate parent) starts a drag.
    pub fn click(
        &mut self,
        sample: PointerSample,
        graph: &SceneGraph,
        camera: &Camera,
        raycaster: &dyn Raycaster,
    ) {
        self.validate_selection(graph);

        if let Some(dropped) = self.selected.take() {
            debug!("drop {:?}", dropped);
            return;
        }

        let hits = raycaster.cast(camera, sample, graph);
        let Some(hit) = hits.first() else {
            return;
        };

        let target = if graph.node(hit.node).is_some_and(|node| node.is_draggable()) {
            Some(hit.node)
        } else {
            // composite groups: the flag may sit on the parent, not the mesh
            graph
                .parent_of(hit.node)
                .filter(|parent| graph.node(*parent).is_some_and(|node| node.is_draggable()))
        };

        if let Some(target) = target {
            debug!("pick {:?}", target);
            self.selected = Some(target);
        }
    }

    /// Records the latest pointer-move sample; only the newest one matters
    pub fn pointer_moved(&mut self, sample: PointerSample) {
        self.move_sample = sample;
    }

    /// Per-frame drag step.
    ///
    /// Re-casts from the latest move sample and writes the nearest
    /// intersection's X and Z into the selected node's position. The
    /// selected subtree is excluded from the candidates so the dragged
    /// object cannot occlude its own drop plane.
    pub fn update(&mut self, graph: &mut SceneGraph, camera: &Camera, raycaster: &dyn Raycaster) {
        self.validate_selection(graph);
        let Some(selected) = self.selected else {
            return;
        };

        let excluded = graph.descendants(selected);
        let hits = raycaster.cast(camera, self.move_sample, graph);
        let Some(hit) = hits.iter().find(|hit| !excluded.contains(&hit.node)) else {
            return;
        };

        if let Some(node) = graph.node_mut(selected) {
            node.position.x = hit.point.x;
            node.position.z = hit.point.z;
        }
    }

    // Selection invariant: the node must still be attached and flagged.
    fn validate_selection(&mut self, graph: &SceneGraph) {
        if let Some(selected) = self.selected {
            let eligible = graph.is_attached(selected)
                && graph.node(selected).is_some_and(|node| node.is_draggable());
            if !eligible {
                debug!("selection {:?} no longer eligible, clearing", selected);
                self.selected = None;
            }
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picking::{Aabb, Hit};
    use crate::scene::Node;
    use cgmath::{Vector3, Zero};
    use std::cell::RefCell;

    /// Raycaster returning a canned hit list per cast
    struct Scripted {
        hits: RefCell<Vec<Vec<Hit>>>,
    }

    impl Scripted {
        fn new(script: Vec<Vec<Hit>>) -> Self {
            let mut hits = script;
            hits.reverse();
            Self {
                hits: RefCell::new(hits),
            }
        }
    }

    impl Raycaster for Scripted {
        fn cast(&self, _: &Camera, _: PointerSample, _: &SceneGraph) -> Vec<Hit> {
            self.hits.borrow_mut().pop().unwrap_or_default()
        }
    }

    fn hit(node: NodeId, point: Vector3<f32>, distance: f32) -> Hit {
        Hit {
            node,
            point,
            distance,
        }
    }

    fn demo_graph() -> (SceneGraph, NodeId, NodeId, NodeId, NodeId) {
        let mut graph = SceneGraph::new();
        let half = Vector3::new(1.0, 1.0, 1.0);
        let bounds = Aabb::from_half_extents(Vector3::zero(), half);

        let torus = graph
            .add(graph.root(), Node::new("torus").with_bounds(bounds).draggable())
            .unwrap();
        let grid = graph
            .add(graph.root(), Node::new("grid helper").with_bounds(bounds))
            .unwrap();
        let arrow = graph
            .add(graph.root(), Node::new("arrow").draggable())
            .unwrap();
        let head = graph.add(arrow, Node::new("head").with_bounds(bounds)).unwrap();
        (graph, torus, grid, arrow, head)
    }

    #[test]
    fn test_empty_click_while_idle_is_noop() {
        let (graph, ..) = demo_graph();
        let mut controller = DragController::new();
        let raycaster = Scripted::new(vec![vec![]]);

        controller.click(PointerSample::default(), &graph, &Camera::default(), &raycaster);
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn test_click_on_draggable_selects() {
        let (graph, torus, ..) = demo_graph();
        let mut controller = DragController::new();
        let raycaster = Scripted::new(vec![vec![hit(torus, Vector3::zero(), 5.0)]]);

        controller.click(PointerSample::default(), &graph, &Camera::default(), &raycaster);
        assert_eq!(controller.selection(), Some(torus));
    }

    #[test]
    fn test_click_on_grid_helper_selects_nothing() {
        let (graph, _, grid, ..) = demo_graph();
        let mut controller = DragController::new();
        let raycaster = Scripted::new(vec![vec![hit(grid, Vector3::zero(), 5.0)]]);

        controller.click(PointerSample::default(), &graph, &Camera::default(), &raycaster);
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn test_composite_child_resolves_to_parent() {
        let (graph, _, _, arrow, head) = demo_graph();
        let mut controller = DragController::new();
        let raycaster = Scripted::new(vec![vec![hit(head, Vector3::zero(), 5.0)]]);

        controller.click(PointerSample::default(), &graph, &Camera::default(), &raycaster);
        assert_eq!(controller.selection(), Some(arrow));
    }

    #[test]
    fn test_click_while_dragging_clears_without_repicking() {
        let (graph, torus, ..) = demo_graph();
        let mut controller = DragController::new();
        let camera = Camera::default();
        // the clearing click never casts, so only the picking clicks and the
        // empty idle click consume script entries
        let raycaster = Scripted::new(vec![
            vec![hit(torus, Vector3::zero(), 5.0)],
            vec![],
            vec![hit(torus, Vector3::zero(), 5.0)],
        ]);

        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        assert_eq!(controller.selection(), Some(torus));

        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        assert_eq!(controller.selection(), None);

        // a second clear-click is a no-op
        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        assert_eq!(controller.selection(), None);

        // and the next click picks again
        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        assert_eq!(controller.selection(), Some(torus));
    }

    #[test]
    fn test_drag_writes_x_and_z_only() {
        let (mut graph, torus, grid, ..) = demo_graph();
        graph.node_mut(torus).unwrap().position = Vector3::new(1.0, 4.5, 2.0);

        let mut controller = DragController::new();
        let camera = Camera::default();
        let raycaster = Scripted::new(vec![
            vec![hit(torus, Vector3::zero(), 5.0)],
            vec![hit(grid, Vector3::new(7.0, 0.0, -3.0), 20.0)],
        ]);

        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        controller.pointer_moved(PointerSample::new(0.5, 0.5));
        controller.update(&mut graph, &camera, &raycaster);

        let position = graph.node(torus).unwrap().position;
        assert_eq!(position, Vector3::new(7.0, 4.5, -3.0));
    }

    #[test]
    fn test_drag_skips_the_selected_subtree() {
        let (mut graph, torus, grid, ..) = demo_graph();

        let mut controller = DragController::new();
        let camera = Camera::default();
        // nearest hit is the dragged torus itself; the grid behind it wins
        let raycaster = Scripted::new(vec![
            vec![hit(torus, Vector3::zero(), 5.0)],
            vec![
                hit(torus, Vector3::new(1.0, 1.0, 1.0), 5.0),
                hit(grid, Vector3::new(9.0, 0.0, 9.0), 20.0),
            ],
        ]);

        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        controller.update(&mut graph, &camera, &raycaster);

        let position = graph.node(torus).unwrap().position;
        assert_eq!(position, Vector3::new(9.0, 0.0, 9.0));
    }

    #[test]
    fn test_empty_cast_while_dragging_keeps_position() {
        let (mut graph, torus, ..) = demo_graph();

        let mut controller = DragController::new();
        let camera = Camera::default();
        let raycaster = Scripted::new(vec![vec![hit(torus, Vector3::zero(), 5.0)], vec![]]);

        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        controller.update(&mut graph, &camera, &raycaster);

        assert_eq!(graph.node(torus).unwrap().position, Vector3::zero());
        assert_eq!(controller.selection(), Some(torus));
    }

    #[test]
    fn test_removing_selection_clears_it() {
        let (mut graph, torus, ..) = demo_graph();

        let mut controller = DragController::new();
        let camera = Camera::default();
        let raycaster = Scripted::new(vec![vec![hit(torus, Vector3::zero(), 5.0)]]);

        controller.click(PointerSample::default(), &graph, &camera, &raycaster);
        graph.remove(torus).unwrap();

        controller.update(&mut graph, &camera, &raycaster);
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn test_y_never_changes_over_random_move_sequences() {
        use rand::Rng;

        let (mut graph, torus, grid, ..) = demo_graph();
        graph.node_mut(torus).unwrap().position.y = 12.5;

        let mut rng = rand::rng();
        let mut script = vec![vec![hit(torus, Vector3::zero(), 5.0)]];
        for _ in 0..200 {
            script.push(vec![hit(
                grid,
                Vector3::new(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                ),
                rng.random_range(0.1..200.0),
            )]);
        }

        let mut controller = DragController::new();
        let camera = Camera::default();
        let raycaster = Scripted::new(script);
        controller.click(PointerSample::default(), &graph, &camera, &raycaster);

        for step in 0..200 {
            controller.pointer_moved(PointerSample::new(
                (step as f32 / 100.0) - 1.0,
                1.0 - (step as f32 / 100.0),
            ));
            controller.update(&mut graph, &camera, &raycaster);
            assert_eq!(graph.node(torus).unwrap().position.y, 12.5);
        }
    }
}
