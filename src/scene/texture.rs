// texture.rs - Chessboard texture wrapped around the exit sphere
//
// 12 x 12 white/grey cells with one grey cell painted red.

use image::{Rgba, RgbaImage};

pub const EXIT_TEXTURE_SIZE: u32 = 128;
pub const EXIT_TEXTURE_CELLS: u32 = 12;
/// Cell (column, row) painted red
pub const EXIT_TEXTURE_MARK: (u32, u32) = (2, 5);

const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const GREY: Rgba<u8> = Rgba([0x80, 0x80, 0x80, 0xff]);
const RED: Rgba<u8> = Rgba([0xff, 0x00, 0x00, 0xff]);

pub fn checker_texture(size: u32, cells: u32, mark: (u32, u32)) -> RgbaImage {
    let cells = cells.max(1);
    let cell = size as f32 / cells as f32;

    RgbaImage::from_fn(size, size, |px, py| {
        let cx = ((px as f32 / cell) as u32).min(cells - 1);
        let cy = ((py as f32 / cell) as u32).min(cells - 1);
        if (cx, cy) == mark {
            RED
        } else if (cx + cy) % 2 == 0 {
            WHITE
        } else {
            GREY
        }
    })
}

pub fn exit_texture() -> RgbaImage {
    checker_texture(EXIT_TEXTURE_SIZE, EXIT_TEXTURE_CELLS, EXIT_TEXTURE_MARK)
}
