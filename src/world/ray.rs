// ray.rs - Ray casting against flat tiles and spheres
//
// All hits report the ray parameter t (distance along the unit
// direction). Only hits in front of the origin count.

use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir: dir.normalize_or_zero() }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Where the ray crosses the horizontal plane `y = height`
    #[inline]
    pub fn hit_horizontal(&self, height: f32) -> Option<f32> {
        if self.dir.y.abs() <= f32::EPSILON { return None; }
        let t = (height - self.origin.y) / self.dir.y;
        (t > 0.0).then_some(t)
    }

    /// Hit against a flat, axis-aligned square lying in a horizontal plane
    pub fn hit_square(&self, center: Vec3, half_extent: f32) -> Option<f32> {
        let t = self.hit_horizontal(center.y)?;
        let p = self.at(t);
        let inside = (p.x - center.x).abs() <= half_extent
            && (p.z - center.z).abs() <= half_extent;
        inside.then_some(t)
    }

    /// Nearest hit against a sphere surface
    pub fn hit_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 { return None; }

        let root = disc.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near > 0.0 {
            Some(near)
        } else if far > 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Viewport pixels to normalized device coordinates in [-1, 1], y up
#[inline]
pub fn to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(client_x / w * 2.0 - 1.0, -(client_y / h) * 2.0 + 1.0)
}
