use wasm_bindgen::prelude::*;

// ============================================================================
// FLOOR WORLD - Chessboard landing scene: tiles, reveal floors, exit sphere
// ============================================================================

pub mod config;
pub mod error;
pub mod render;
pub mod scene;
pub mod sim;
pub mod world;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{init, mount, DEFAULT_CONTAINER_ID};

pub use config::SceneConfig;
pub use error::FloorError;
pub use sim::{Mode, SceneSession};

use image::RgbaImage;
use scene::SceneDescriptor;

#[wasm_bindgen]
pub struct FloorWorld {
    session: SceneSession,
    texture: RgbaImage,
}

impl FloorWorld {
    fn wrap(session: SceneSession) -> Self {
        Self { session, texture: scene::exit_texture() }
    }
}

#[wasm_bindgen]
impl FloorWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self::wrap(SceneSession::with_defaults(width, height, pixel_ratio))
    }

    /// Build from a JSON object overriding any subset of the defaults
    pub fn with_config(json: &str, width: u32, height: u32, pixel_ratio: f32) -> std::result::Result<FloorWorld, JsError> {
        let config = SceneConfig::from_json(json)?;
        Ok(Self::wrap(SceneSession::new(config, width, height, pixel_ratio)?))
    }

    // Input
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) { self.session.pointer_move(client_x, client_y); }
    pub fn click(&mut self, client_x: f32, client_y: f32) { self.session.click(client_x, client_y); }
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) { self.session.resize(width, height, pixel_ratio); }

    pub fn tick(&mut self, now_ms: f64) {
        self.session.tick(now_ms);
    }

    // Mode and surface
    pub fn immersive(&self) -> bool { self.session.mode() == Mode::Immersive }
    pub fn clear_color(&self) -> u32 { self.session.surface().clear_color }
    pub fn grid_visible(&self) -> bool { self.session.grid().visible }
    pub fn surface_width(&self) -> u32 { self.session.surface().width }
    pub fn surface_height(&self) -> u32 { self.session.surface().height }
    pub fn pixel_ratio(&self) -> f32 { self.session.surface().pixel_ratio }

    // Camera
    pub fn aspect(&self) -> f32 { self.session.camera().aspect }
    pub fn camera_yaw(&self) -> f32 { self.session.camera().yaw }
    pub fn camera_pitch(&self) -> f32 { self.session.camera().pitch }
    pub fn camera_x(&self) -> f32 { self.session.camera().position.x }
    pub fn camera_y(&self) -> f32 { self.session.camera().position.y }
    pub fn camera_z(&self) -> f32 { self.session.camera().position.z }

    // Exit control
    pub fn exit_visible(&self) -> bool { self.session.exit().visible }
    pub fn exit_hovered(&self) -> bool { self.session.exit().hovered }
    pub fn exit_spin(&self) -> f32 { self.session.exit().spin }
    pub fn exit_tilt(&self) -> f32 { self.session.exit().tilt }

    // Frame buffers
    pub fn tile_count(&self) -> usize { self.session.grid().len() }
    pub fn floor_count(&self) -> usize { self.session.grid().floors.len() }
    pub fn heights_ptr(&self) -> *const f32 { self.session.encoder().heights_ptr() }
    pub fn opacity_ptr(&self) -> *const f32 { self.session.encoder().opacity_ptr() }
    pub fn visible_ptr(&self) -> *const u8 { self.session.encoder().visible_ptr() }
    pub fn frame(&self) -> u64 { self.session.encoder().frame() }

    // Bootstrap data
    pub fn layout(&self) -> js_sys::Float32Array { js_sys::Float32Array::from(self.session.encoder().layout()) }
    pub fn floor_tiles(&self) -> js_sys::Uint32Array { js_sys::Uint32Array::from(self.session.encoder().floors()) }
    pub fn exit_texture(&self) -> js_sys::Uint8Array { js_sys::Uint8Array::from(self.texture.as_raw().as_slice()) }
    pub fn texture_size(&self) -> u32 { self.texture.width() }

    pub fn scene_json(&self) -> std::result::Result<String, JsError> {
        Ok(SceneDescriptor::from_config(self.session.config()).to_json()?)
    }
}
