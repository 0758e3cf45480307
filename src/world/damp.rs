// damp.rs - Damped approach toward a target
//
// Each step moves a value a fixed fraction of its remaining distance.
// Once the gap is within epsilon the value snaps onto the target, so
// every ramp comes to rest exactly.

/// Damping factor and snap threshold for one animated scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damping {
    pub factor: f32,
    pub epsilon: f32,
}

impl Damping {
    pub const fn new(factor: f32, epsilon: f32) -> Self {
        Self { factor, epsilon }
    }

    #[inline]
    pub fn step(self, current: f32, target: f32) -> f32 {
        approach(current, target, self.factor, self.epsilon)
    }
}

/// One frame of damped approach from `current` to `target`.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32, epsilon: f32) -> f32 {
    let diff = target - current;
    if diff.abs() > epsilon {
        current + diff * factor
    } else {
        target
    }
}
