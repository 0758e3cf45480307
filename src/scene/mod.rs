// scene/ - Static scene description for the host renderer
//
// Everything here is built once at bootstrap: camera lens, fog, lights,
// materials and the exit sphere's texture. The page script reads it as
// JSON and builds its scene graph from it.

mod texture;

pub use texture::*;

use serde::Serialize;

use crate::config::SceneConfig;
use crate::error::Result;

pub const FOG_COLOR: u32 = 0xf0f0f0;
pub const FOG_NEAR: f32 = 500.0;
pub const FOG_FAR: f32 = 2500.0;

pub const LIGHT_TILE_COLOR: u32 = 0xffffff;
pub const DARK_TILE_COLOR: u32 = 0x808080;
pub const REVEAL_FLOOR_COLOR: u32 = 0xd20000;

pub const EXIT_SEGMENTS: u32 = 35;
pub const SHADOW_MAP_SIZE: u32 = 1024;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Lens {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Fog {
    pub color: u32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Light {
    Ambient {
        color: u32,
        intensity: f32,
    },
    Directional {
        color: u32,
        intensity: f32,
        position: [f32; 3],
        cast_shadow: bool,
        shadow_map_size: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    pub size: usize,
    pub tile_size: f32,
    pub light_color: u32,
    pub dark_color: u32,
    pub reveal_color: u32,
    pub double_sided: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExitSphere {
    pub position: [f32; 3],
    pub radius: f32,
    pub segments: u32,
    pub tilt: f32,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub texture_size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneDescriptor {
    pub camera: Lens,
    pub fog: Fog,
    pub lights: Vec<Light>,
    pub board: Board,
    pub exit: ExitSphere,
}

impl SceneDescriptor {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            camera: Lens {
                fov: config.camera_fov,
                near: config.camera_near,
                far: config.camera_far,
                position: config.camera_position,
            },
            fog: Fog { color: FOG_COLOR, near: FOG_NEAR, far: FOG_FAR },
            lights: vec![
                Light::Ambient { color: 0xffffff, intensity: 0.4 },
                Light::Directional {
                    color: 0xffffff,
                    intensity: 0.8,
                    position: [100.0, -200.0, 50.0],
                    cast_shadow: true,
                    shadow_map_size: SHADOW_MAP_SIZE,
                },
            ],
            board: Board {
                size: config.board_size,
                tile_size: config.tile_size,
                light_color: LIGHT_TILE_COLOR,
                dark_color: DARK_TILE_COLOR,
                reveal_color: REVEAL_FLOOR_COLOR,
                double_sided: true,
            },
            exit: ExitSphere {
                position: config.exit_position,
                radius: config.exit_radius,
                segments: EXIT_SEGMENTS,
                tilt: config.exit_tilt,
                cast_shadow: true,
                receive_shadow: true,
                texture_size: EXIT_TEXTURE_SIZE,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
