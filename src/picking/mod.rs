//! # Object Picking System
//!
//! 3D picking via mouse ray-casting: pointer pixels become normalized
//! device coordinates, NDC becomes a world-space ray through the camera,
//! and the ray is tested against the pick volumes of every attached scene
//! node.
//!
//! ## How it works
//!
//! 1. **Mouse to NDC**: [`PointerSample::from_pixels`] rescales pixel
//!    coordinates to `[-1, 1]` on both axes
//! 2. **NDC to Ray**: [`screen_to_ray`] unprojects near/far points through
//!    the inverse view-projection matrix
//! 3. **Ray-Node Intersection**: [`AabbRaycaster`] slab-tests the ray
//!    against each node's world-space bounding box
//! 4. **Ordering**: hits come back sorted nearest-first, which the
//!    interaction controllers rely on
//!
//! ## Usage
//!
//! ```no_run
//! use brae::camera::{Camera, Viewport};
//! use brae::picking::{AabbRaycaster, PointerSample, Raycaster};
//! use brae::scene::SceneGraph;
//!
//! let graph = SceneGraph::new();
//! let camera = Camera::default();
//! let sample = PointerSample::from_pixels(640.0, 400.0, Viewport::new(1280, 800));
//!
//! let raycaster = AabbRaycaster;
//! if let Some(hit) = raycaster.cast(&camera, sample, &graph).first() {
//!     println!("picked {:?} at distance {}", hit.node, hit.distance);
//! }
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};

use crate::camera::{Camera, Viewport};
use crate::scene::{NodeId, SceneGraph};

/// A pointer position in normalized device coordinates.
///
/// Both axes cover `[-1, 1]`; Y points up. Samples are recomputed from raw
/// pixels on every event, never cached across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts raw pixel coordinates (origin top-left, Y down) to NDC
    pub fn from_pixels(pixel_x: f64, pixel_y: f64, viewport: Viewport) -> Self {
        let width = viewport.width.max(1) as f32;
        let height = viewport.height.max(1) as f32;
        Self {
            x: (2.0 * pixel_x as f32) / width - 1.0,
            y: 1.0 - (2.0 * pixel_y as f32) / height,
        }
    }
}

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box used as a node's pick volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half` in each direction
    pub fn from_half_extents(center: Vector3<f32>, half: Vector3<f32>) -> Self {
        Self::new(center - half, center + half)
    }

    /// The box shifted by `offset` (node transforms are translation-only)
    pub fn translate(&self, offset: Vector3<f32>) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Slab-test ray intersection.
    /// Returns the distance to the entry point (or the exit point when the
    /// ray starts inside), or None if the ray misses.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }
}

/// One ray/node intersection record
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Intersected node
    pub node: NodeId,
    /// World-space intersection point
    pub point: Vector3<f32>,
    /// Distance from the ray origin to the intersection point
    pub distance: f32,
}

/// Convert a pointer sample to a world-space ray through the camera
pub fn screen_to_ray(sample: PointerSample, camera: &Camera) -> Ray {
    let view_proj = camera.view_projection_matrix();
    let inv_view_proj = view_proj.invert().unwrap_or(Matrix4::from_scale(1.0));

    // Unproject the sample on the near and far planes
    let near_point = Vector4::new(sample.x, sample.y, -1.0, 1.0);
    let far_point = Vector4::new(sample.x, sample.y, 1.0, 1.0);

    let world_near = inv_view_proj * near_point;
    let world_far = inv_view_proj * far_point;

    let near_3d = Vector3::new(
        world_near.x / world_near.w,
        world_near.y / world_near.w,
        world_near.z / world_near.w,
    );
    let far_3d = Vector3::new(
        world_far.x / world_far.w,
        world_far.y / world_far.w,
        world_far.z / world_far.w,
    );

    Ray::new(near_3d, far_3d - near_3d)
}

/// Ray-intersection service consumed by the interaction controllers.
///
/// Implementations must return hits sorted nearest-first; the controllers'
/// "take the closest" policy depends on it.
pub trait Raycaster {
    fn cast(&self, camera: &Camera, sample: PointerSample, graph: &SceneGraph) -> Vec<Hit>;
}

/// Default raycaster testing every attached node's world-space Aabb.
///
/// Nodes without a pick volume (bare groups, lights) are traversed but
/// never hit. Mesh-accurate intersection is deliberately out of scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbRaycaster;

impl Raycaster for AabbRaycaster {
    fn cast(&self, camera: &Camera, sample: PointerSample, graph: &SceneGraph) -> Vec<Hit> {
        let ray = screen_to_ray(sample, camera);

        let mut hits = Vec::new();
        for id in graph.descendants(graph.root()) {
            let Some(world_aabb) = graph.world_bounds(id) else {
                continue;
            };
            if let Some(distance) = world_aabb.intersect_ray(&ray) {
                hits.push(Hit {
                    node: id,
                    point: ray.point_at(distance),
                    distance,
                });
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
