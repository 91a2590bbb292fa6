//! # Transform-Gizmo Attachment
//!
//! The second interaction variant: a click on a clickable node attaches an
//! external transform-gizmo widget to it. The gizmo does the actual
//! translating/rotating/scaling itself; this controller only decides what
//! it is attached to, keeps the orbit camera out of the gizmo's way while
//! a handle is being dragged, and swallows the one spurious deselect click
//! a handle interaction leaves behind.

use log::debug;

use crate::camera::Camera;
use crate::picking::{PointerSample, Raycaster};
use crate::scene::{NodeId, SceneGraph};

/// External transform-gizmo widget collaborator.
///
/// The widget renders its own handles and applies transforms to the node
/// it is attached to; the controller only drives attachment. Implementors
/// should treat `attach` on an already-attached gizmo as re-targeting and
/// `detach` on a detached gizmo as a no-op.
pub trait TransformGizmo {
    /// Bind the widget's handles to `node`
    fn attach(&mut self, node: NodeId);

    /// Release the widget from whatever it is attached to
    fn detach(&mut self);
}

/// Notifications the gizmo widget emits while its handles are used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoEvent {
    /// A handle drag began
    DragStarted,
    /// The handle drag finished
    DragEnded,
}

/// Seam to an external camera rig that must be paused during handle drags
/// so orbiting does not fight the gizmo.
pub trait CameraInteraction {
    fn set_enabled(&mut self, enabled: bool);
}

/// Gizmo-attach controller.
///
/// Two states: `Idle` (nothing attached) and `Attached`. A click on a
/// clickable node (or on a child whose immediate parent is clickable, for
/// composite groups) attaches the gizmo and selects that node; a click
/// anywhere else detaches, except while a handle drag is in progress or
/// when the click is the suppressed one a handle interaction produces.
pub struct GizmoController {
    selected: Option<NodeId>,
    gizmo_dragging: bool,
    suppress_click: bool,
}

impl GizmoController {
    pub fn new() -> Self {
        Self {
            selected: None,
            gizmo_dragging: false,
            suppress_click: false,
        }
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_gizmo_dragging(&self) -> bool {
        self.gizmo_dragging
    }

    /// Handles a primary-button press.
    pub fn click(
        &mut self,
        sample: PointerSample,
        graph: &SceneGraph,
        camera: &Camera,
        raycaster: &dyn Raycaster,
        gizmo: &mut dyn TransformGizmo,
    ) {
        self.validate_selection(graph, gizmo);

        // One click after a handle interaction is the handle release
        // arriving as a window click; it must not deselect.
        if self.suppress_click {
            self.suppress_click = false;
            return;
        }

        let hits = raycaster.cast(camera, sample, graph);
        let Some(hit) = hits.first() else {
            if !self.gizmo_dragging {
                self.clear(gizmo);
            }
            return;
        };

        let target = if graph.node(hit.node).is_some_and(|node| node.is_clickable()) {
            Some(hit.node)
        } else {
            // composite groups: the flag may sit on the parent, not the mesh
            graph
                .parent_of(hit.node)
                .filter(|parent| graph.node(*parent).is_some_and(|node| node.is_clickable()))
        };

        if let Some(target) = target {
            debug!("attach gizmo to {:?}", target);
            gizmo.attach(target);
            self.selected = Some(target);
        } else if Some(hit.node) != self.selected && !self.gizmo_dragging {
            self.clear(gizmo);
        }
    }

    /// Consumes the widget's interaction notifications.
    ///
    /// Handle drags pause the orbit rig; the rig is re-enabled when the
    /// drag ends and the next window click is armed for suppression.
    pub fn gizmo_event(&mut self, event: GizmoEvent, camera_rig: &mut dyn CameraInteraction) {
        match event {
            GizmoEvent::DragStarted => {
                self.gizmo_dragging = true;
                camera_rig.set_enabled(false);
            }
            GizmoEvent::DragEnded => {
                self.gizmo_dragging = false;
                camera_rig.set_enabled(true);
                self.suppress_click = true;
            }
        }
    }

    fn clear(&mut self, gizmo: &mut dyn TransformGizmo) {
        if let Some(cleared) = self.selected.take() {
            debug!("detach gizmo from {:?}", cleared);
            gizmo.detach();
        }
    }

    // Selection invariant: detached or re-flagged nodes lose the gizmo.
    fn validate_selection(&mut self, graph: &SceneGraph, gizmo: &mut dyn TransformGizmo) {
        if let Some(selected) = self.selected {
            let eligible = graph.is_attached(selected)
                && graph.node(selected).is_some_and(|node| node.is_clickable());
            if !eligible {
                debug!("selection {:?} no longer eligible, detaching", selected);
                self.clear(gizmo);
            }
        }
    }
}

impl Default for GizmoController {
    fn default() -> Self {
        Self::new()
    }
}
