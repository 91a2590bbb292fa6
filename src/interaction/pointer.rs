use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, WindowEvent},
};

use crate::camera::Viewport;
use crate::picking::PointerSample;

/// Pointer events the interaction controllers consume
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor moved; carries the fresh NDC sample
    Moved(PointerSample),
    /// Primary button pressed; carries the NDC sample at the press
    Clicked(PointerSample),
}

/// Translates winit window events into normalized pointer events.
///
/// Keeps only the latest cursor position and the current viewport size;
/// samples are recomputed fresh for every event so a click can never see a
/// stale coordinate from before the preceding move.
pub struct PointerTracker {
    viewport: Viewport,
    cursor: Option<PhysicalPosition<f64>>,
}

impl PointerTracker {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cursor: None,
        }
    }

    /// Must be called on window resize so NDC stays in [-1, 1]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(*position);
                Some(PointerEvent::Moved(self.sample(*position)))
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.cursor.map(|position| {
                PointerEvent::Clicked(self.sample(position))
            }),
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            _ => None,
        }
    }

    fn sample(&self, position: PhysicalPosition<f64>) -> PointerSample {
        PointerSample::from_pixels(position.x, position.y, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: winit::event::DeviceId::dummy(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn left_press() -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_click_uses_latest_cursor_position() {
        let mut tracker = PointerTracker::new(Viewport::new(800, 600));

        assert_eq!(
            tracker.process_event(&cursor_moved(400.0, 300.0)),
            Some(PointerEvent::Moved(PointerSample::new(0.0, 0.0)))
        );
        assert_eq!(
            tracker.process_event(&left_press()),
            Some(PointerEvent::Clicked(PointerSample::new(0.0, 0.0)))
        );
    }

    #[test]
    fn test_click_without_cursor_is_ignored() {
        let mut tracker = PointerTracker::new(Viewport::new(800, 600));
        assert_eq!(tracker.process_event(&left_press()), None);
    }

    #[test]
    fn test_release_produces_no_event() {
        let mut tracker = PointerTracker::new(Viewport::new(800, 600));
        let _ = tracker.process_event(&cursor_moved(10.0, 10.0));

        let release = WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Released,
            button: MouseButton::Left,
        };
        assert_eq!(tracker.process_event(&release), None);
    }
}
