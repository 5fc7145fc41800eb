//! Camera and idle spin for presenting the cloud.
//!
//! Nothing here touches platform APIs; both front-ends build their uniforms
//! from these matrices.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Camera plus the slow rotation applied to the whole cloud every frame.
#[derive(Clone, Debug, Default)]
pub struct SceneView {
    pub camera: Camera,
    pub spin_x: f32,
    pub spin_y: f32,
}

impl SceneView {
    pub fn new(width: u32, height: u32) -> Self {
        let mut view = Self::default();
        view.set_aspect(width, height);
        view
    }

    /// Follow a resized surface. Zero-sized surfaces (minimized windows) are ignored.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
    }

    pub fn advance(&mut self) {
        self.spin_x += SPIN_X_PER_FRAME;
        self.spin_y += SPIN_Y_PER_FRAME;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.spin_x) * Mat4::from_rotation_y(self.spin_y)
    }

    pub fn model_view_matrix(&self) -> Mat4 {
        self.camera.view_matrix() * self.model_matrix()
    }

    /// View-space edge length of a sprite so that it covers as many pixels as
    /// a size-attenuated point of `size` would (`size * height / 2 / depth`).
    pub fn point_world_size(&self, size: f32) -> f32 {
        size * (self.camera.fovy_radians * 0.5).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_advances_by_fixed_increments() {
        let mut view = SceneView::default();
        for _ in 0..10 {
            view.advance();
        }
        assert!((view.spin_x - 0.01).abs() < 1e-6);
        assert!((view.spin_y - 0.02).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_surface_keeps_aspect() {
        let mut view = SceneView::new(1600, 800);
        assert_eq!(view.camera.aspect, 2.0);
        view.set_aspect(0, 600);
        assert_eq!(view.camera.aspect, 2.0);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let view = SceneView::new(800, 600);
        let clip = view.camera.projection_matrix() * view.model_view_matrix() * glam::Vec4::W;
        assert!((clip.x / clip.w).abs() < 1e-6);
        assert!((clip.y / clip.w).abs() < 1e-6);
        assert!((view.camera.eye.z - CAMERA_Z).abs() < f32::EPSILON);
    }
}
