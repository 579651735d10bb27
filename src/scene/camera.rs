//! Chase camera

use glam::{Mat4, Vec3};

use crate::tuning::CameraRig;

/// Perspective camera following the player
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 5.0, -10.0),
            target: Vec3::new(0.0, 0.0, 10.0),
            up: Vec3::Y,
            fov_y: 75f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Pin the camera behind and above `subject`, looking down the road
    pub fn follow(&mut self, subject: Vec3, rig: &CameraRig) {
        self.eye = Vec3::new(subject.x, rig.height, subject.z - rig.follow_distance);
        self.target = Vec3::new(subject.x, 0.0, subject.z + rig.look_ahead);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// View-projection with world x mirrored.
    ///
    /// Looking down +z in a right-handed frame puts -x on screen right; the
    /// mirror makes lane -1 (steer left) draw on the left.
    pub fn view_projection(&self) -> Mat4 {
        let mirror = Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0));
        mirror * self.projection_matrix() * self.view_matrix()
    }
}
