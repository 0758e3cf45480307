// config.rs - Scene tunables
//
// Every field has a default, so a JSON override may name any subset.
// Heights and distances are world units; colors are 0xRRGGBB.

use serde::{Deserialize, Serialize};

use crate::error::{FloorError, Result};

/// Largest accepted board edge; keeps the tile arrays allocatable on wasm32
pub const MAX_BOARD_SIZE: usize = 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    // Board
    pub board_size: usize,
    pub tile_size: f32,
    pub floor_height: f32,
    /// How far the reveal floor sits below its tile
    pub reveal_floor_offset: f32,
    pub raise_distance: f32,

    // Motion
    pub height_damping: f32,
    pub height_epsilon: f32,
    pub opacity_damping: f32,
    pub opacity_epsilon: f32,
    /// Board-mode camera yaw, radians per millisecond
    pub yaw_rate: f64,
    /// Exit sphere spin per hovered frame, radians
    pub exit_spin_step: f32,

    // Surface
    pub board_clear_color: u32,
    pub immersive_clear_color: u32,
    pub max_pixel_ratio: f32,

    // Camera
    pub camera_fov: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_position: [f32; 3],

    // Exit control
    pub exit_position: [f32; 3],
    pub exit_radius: f32,
    pub exit_tilt: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            board_size: 120,
            tile_size: 80.0,
            floor_height: -400.0,
            reveal_floor_offset: 1.0,
            raise_distance: 400.0,

            height_damping: 0.1,
            height_epsilon: 1.0,
            opacity_damping: 0.15,
            opacity_epsilon: 0.01,
            yaw_rate: 0.0005 * 0.05,
            exit_spin_step: 0.02,

            board_clear_color: 0xf5f5f5,
            immersive_clear_color: 0xffffff,
            max_pixel_ratio: 2.0,

            camera_fov: 75.0,
            camera_near: 1.0,
            camera_far: 3000.0,
            camera_position: [0.0, -350.0, 0.0],

            exit_position: [100.0, -300.0, -100.0],
            exit_radius: 5.0,
            exit_tilt: std::f32::consts::PI / 11.0,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        fn reject(msg: String) -> Result<()> {
            log::warn!("rejecting scene config: {msg}");
            Err(FloorError::InvalidConfig(msg))
        }

        if self.board_size == 0 {
            return reject("board_size must be at least 1".into());
        }
        if self.board_size > MAX_BOARD_SIZE {
            return reject(format!("board_size must be at most {MAX_BOARD_SIZE}, got {}", self.board_size));
        }
        if !(self.tile_size > 0.0) {
            return reject(format!("tile_size must be positive, got {}", self.tile_size));
        }
        for (name, k) in [("height_damping", self.height_damping), ("opacity_damping", self.opacity_damping)] {
            if !(k > 0.0 && k <= 1.0) {
                return reject(format!("{name} must be in (0, 1], got {k}"));
            }
        }
        for (name, e) in [("height_epsilon", self.height_epsilon), ("opacity_epsilon", self.opacity_epsilon)] {
            if !(e > 0.0) {
                return reject(format!("{name} must be positive, got {e}"));
            }
        }
        if !(self.camera_fov > 0.0 && self.camera_fov < 180.0) {
            return reject(format!("camera_fov must be in (0, 180), got {}", self.camera_fov));
        }
        if !(self.camera_near > 0.0 && self.camera_near < self.camera_far) {
            return reject(format!(
                "camera clip range must satisfy 0 < near < far, got {}..{}",
                self.camera_near, self.camera_far
            ));
        }
        if !(self.exit_radius > 0.0) {
            return reject(format!("exit_radius must be positive, got {}", self.exit_radius));
        }
        if !(self.max_pixel_ratio > 0.0) {
            return reject(format!("max_pixel_ratio must be positive, got {}", self.max_pixel_ratio));
        }
        Ok(())
    }
}
