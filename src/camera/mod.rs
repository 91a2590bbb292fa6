//! # Camera and Viewport
//!
//! A minimal perspective camera used as the ray-casting collaborator. It
//! owns the view/projection parameters the picker needs and nothing else:
//! orbit/pan mechanics belong to whatever external rig drives `eye` and
//! `target`.

use cgmath::{perspective, Matrix4, Point3, Rad, Vector3, Zero};

/// Perspective camera supplying the view-projection matrix for picking.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Creates a camera at `eye` looking at `target` with a Y-up frame.
    pub fn new(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Rad(std::f32::consts::FRAC_PI_2),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from((self.eye.x, self.eye.y, self.eye.z));
        let target = Point3::from((self.target.x, self.target.y, self.target.z));
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj = perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Updates the projection aspect ratio after a window resize.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 0.0, 30.0), Vector3::zero(), 1.0)
    }
}

/// Current window size in physical pixels, used to normalize pointer
/// coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn test_view_projection_is_invertible() {
        let camera = Camera::default();
        assert!(camera.view_projection_matrix().invert().is_some());
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut camera = Camera::default();
        camera.resize_projection(1600, 800);
        assert_eq!(camera.aspect, 2.0);

        // Zero height must not poison the aspect ratio
        camera.resize_projection(1600, 0);
        assert_eq!(camera.aspect, 2.0);
    }
}
