// render.rs - Drawing surface state and per-frame output buffers
//
// The page script owns the GL draw. Each frame it reads:
//   heights   f32 per tile         current tile y
//   opacity   f32 per reveal floor current opacity
//   visible   u8 per reveal floor  1 = draw
// and once, at bootstrap:
//   layout    f32 x 3 per tile     x, z, dark (1.0) / light (0.0)
//   floors    u32 per reveal floor owning tile index

use crate::sim::TileGrid;

/// Size, density and clear color of the drawing surface
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    pub clear_color: u32,
    max_pixel_ratio: f32,
}

impl Surface {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32, max_pixel_ratio: f32, clear_color: u32) -> Self {
        let mut surface = Self {
            width,
            height,
            pixel_ratio: 1.0,
            clear_color,
            max_pixel_ratio,
        };
        surface.resize(width, height, device_pixel_ratio);
        surface
    }

    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f32) {
        self.width = width;
        self.height = height;
        self.pixel_ratio = device_pixel_ratio.clamp(f32::MIN_POSITIVE, self.max_pixel_ratio);
    }

    /// Backing-store size in device pixels
    pub fn drawing_buffer(&self) -> (u32, u32) {
        (
            (self.width as f32 * self.pixel_ratio).round() as u32,
            (self.height as f32 * self.pixel_ratio).round() as u32,
        )
    }
}

pub struct FrameEncoder {
    heights: Vec<f32>,
    opacity: Vec<f32>,
    visible: Vec<u8>,
    layout: Vec<f32>,
    floors: Vec<u32>,
    frame: u64,
}

impl FrameEncoder {
    pub fn new(grid: &TileGrid) -> Self {
        let mut layout = Vec::with_capacity(grid.len() * 3);
        for idx in 0..grid.len() {
            layout.extend_from_slice(&[grid.x[idx], grid.z[idx], if grid.dark[idx] { 1.0 } else { 0.0 }]);
        }

        let mut encoder = Self {
            heights: vec![0.0; grid.len()],
            opacity: vec![0.0; grid.floors.len()],
            visible: vec![0; grid.floors.len()],
            layout,
            floors: grid.floors.tile.iter().map(|&t| t as u32).collect(),
            frame: 0,
        };
        encoder.encode(grid);
        encoder.frame = 0;
        encoder
    }

    /// Snapshot the animated state of the board
    pub fn encode(&mut self, grid: &TileGrid) {
        self.heights.copy_from_slice(&grid.y);
        self.opacity.copy_from_slice(&grid.floors.opacity);
        for (out, &v) in self.visible.iter_mut().zip(&grid.floors.visible) {
            *out = v as u8;
        }
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn heights(&self) -> &[f32] { &self.heights }
    pub fn opacity(&self) -> &[f32] { &self.opacity }
    pub fn visible(&self) -> &[u8] { &self.visible }
    pub fn layout(&self) -> &[f32] { &self.layout }
    pub fn floors(&self) -> &[u32] { &self.floors }

    // Accessors for WASM
    pub fn heights_ptr(&self) -> *const f32 { self.heights.as_ptr() }
    pub fn opacity_ptr(&self) -> *const f32 { self.opacity.as_ptr() }
    pub fn visible_ptr(&self) -> *const u8 { self.visible.as_ptr() }
}
