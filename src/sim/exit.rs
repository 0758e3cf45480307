// exit.rs - Exit control sphere shown in immersive mode
//
// Fixed in world space. Spins only while the pointer is over it.

use glam::Vec3;

use crate::world::Ray;

pub struct ExitControl {
    pub position: Vec3,
    pub radius: f32,
    /// Fixed tilt about X, radians
    pub tilt: f32,
    /// Accumulated spin about Y, radians
    pub spin: f32,
    pub hovered: bool,
    pub visible: bool,
    spin_step: f32,
}

impl ExitControl {
    pub fn new(position: Vec3, radius: f32, tilt: f32, spin_step: f32) -> Self {
        Self {
            position,
            radius,
            tilt,
            spin: 0.0,
            hovered: false,
            visible: false,
            spin_step,
        }
    }

    /// Hidden controls cannot be hit
    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        if !self.visible { return None; }
        ray.hit_sphere(self.position, self.radius)
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hovered = false;
    }

    /// One frame of hover-gated spin
    pub fn step(&mut self) {
        if self.hovered {
            self.spin += self.spin_step;
        }
    }
}
