// world/ - Geometry and motion math
//
// Pure functions and small value types: rays, the camera, damped motion.
// No scene state lives here.

mod camera;
mod damp;
mod ray;

pub use camera::*;
pub use damp::*;
pub use ray::*;
