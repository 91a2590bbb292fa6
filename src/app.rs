//! Windowed demo shell.
//!
//! A thin winit application that owns the scene, the camera and one
//! interaction controller, and routes pointer events into it. There is no
//! renderer behind the window: the surface exists so winit delivers input,
//! and state transitions go to the log instead of the screen. The redraw
//! request at the end of every frame is the "schedule me again" loop; the
//! host dropping it (window close) is the only termination.

use std::sync::Arc;

use log::info;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::camera::{Camera, Viewport};
use crate::interaction::{
    DragController, GizmoController, PointerEvent, PointerTracker, TransformGizmo,
};
use crate::picking::AabbRaycaster;
use crate::scene::{hierarchy, SceneGraph};

/// Which interaction variant the window drives
enum Variant {
    FreeDrag(DragController),
    GizmoAttach {
        controller: GizmoController,
        gizmo: Box<dyn TransformGizmo>,
    },
}

pub struct DemoApp {
    event_loop: Option<EventLoop<()>>,
    state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    title: String,
    graph: SceneGraph,
    camera: Camera,
    raycaster: AabbRaycaster,
    tracker: PointerTracker,
    variant: Variant,
}

impl DemoApp {
    /// Free-drag variant: click to pick, move to drag, click to drop
    pub fn free_drag(title: &str, graph: SceneGraph, camera: Camera) -> Self {
        Self::with_variant(title, graph, camera, Variant::FreeDrag(DragController::new()))
    }

    /// Gizmo-attach variant: click binds `gizmo` to the hit node
    pub fn gizmo_attach(
        title: &str,
        graph: SceneGraph,
        camera: Camera,
        gizmo: Box<dyn TransformGizmo>,
    ) -> Self {
        Self::with_variant(
            title,
            graph,
            camera,
            Variant::GizmoAttach {
                controller: GizmoController::new(),
                gizmo,
            },
        )
    }

    fn with_variant(title: &str, graph: SceneGraph, camera: Camera, variant: Variant) -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        Self {
            event_loop: Some(event_loop),
            state: AppState {
                window: None,
                title: title.to_string(),
                graph,
                camera,
                raycaster: AabbRaycaster,
                tracker: PointerTracker::new(Viewport::default()),
                variant,
            },
        }
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) {
        for line in hierarchy::lines(&self.state.graph, self.state.graph.root()) {
            info!("{}", line);
        }

        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.state)
            .expect("Failed to run event loop");
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            let (width, height) = window_handle.inner_size().into();
            self.tracker.set_viewport(Viewport::new(width, height));
            self.camera.resize_projection(width, height);
            self.window = Some(window_handle);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        match &event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.tracker.set_viewport(Viewport::new(*width, *height));
                self.camera.resize_projection(*width, *height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                // Per-frame step: only the free-drag variant moves things.
                if let Variant::FreeDrag(controller) = &mut self.variant {
                    controller.update(&mut self.graph, &self.camera, &self.raycaster);
                }
            }
            _ => {
                if let Some(pointer_event) = self.tracker.process_event(&event) {
                    self.handle_pointer(pointer_event);
                    window.request_redraw();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

impl AppState {
    fn handle_pointer(&mut self, event: PointerEvent) {
        match (&mut self.variant, event) {
            (Variant::FreeDrag(controller), PointerEvent::Moved(sample)) => {
                controller.pointer_moved(sample);
            }
            (Variant::FreeDrag(controller), PointerEvent::Clicked(sample)) => {
                controller.click(sample, &self.graph, &self.camera, &self.raycaster);
            }
            (Variant::GizmoAttach { controller, gizmo }, PointerEvent::Clicked(sample)) => {
                controller.click(
                    sample,
                    &self.graph,
                    &self.camera,
                    &self.raycaster,
                    gizmo.as_mut(),
                );
            }
            (Variant::GizmoAttach { .. }, PointerEvent::Moved(_)) => {}
        }
    }
}
