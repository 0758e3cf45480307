// camera.rs - Perspective camera with yaw/pitch orientation
//
// Right-handed, Y up, looking down -Z at zero yaw. Orientation is
// applied in YXZ order (yaw, then pitch) and NDC depth is GL-style.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use super::Ray;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Vertical field of view, radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32, position: Vec3) -> Self {
        Self {
            fov_y: fov_y_deg.to_radians(),
            aspect,
            near,
            far,
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn orient(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Aspect from surface size; a zero height leaves the aspect unchanged
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 { return; }
        self.aspect = width as f32 / height as f32;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position).inverse()
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// World point to NDC (x, y in [-1, 1] when on screen)
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Ray from the eye through an NDC point on the screen
    pub fn ray(&self, ndc: Vec2) -> Ray {
        let half = (self.fov_y * 0.5).tan();
        let local = Vec3::new(ndc.x * half * self.aspect, ndc.y * half, -1.0);
        Ray::new(self.position, self.rotation() * local)
    }
}
