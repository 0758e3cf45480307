// pick.rs - Nearest-hit ray picking over the board
//
// Every tile is a candidate; a reveal floor only while it is shown.
// The smallest ray parameter wins.

use glam::Vec3;

use super::TileGrid;
use crate::world::Ray;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridHit {
    Tile(usize),
    Floor(usize),
}

/// Keep the candidate with the smallest distance
pub fn nearest<T>(hits: impl IntoIterator<Item = (T, f32)>) -> Option<(T, f32)> {
    hits.into_iter().min_by(|a, b| a.1.total_cmp(&b.1))
}

impl TileGrid {
    pub fn pick(&self, ray: &Ray) -> Option<GridHit> {
        let half = self.tile_size() * 0.5;

        let tiles = (0..self.len()).filter_map(|idx| {
            let center = Vec3::new(self.x[idx], self.y[idx], self.z[idx]);
            ray.hit_square(center, half).map(|t| (GridHit::Tile(idx), t))
        });

        let floors = (0..self.floors.len())
            .filter(|&f| self.floors.visible[f])
            .filter_map(|f| {
                ray.hit_square(self.floor_position(f), half).map(|t| (GridHit::Floor(f), t))
            });

        nearest(tiles.chain(floors)).map(|(hit, _)| hit)
    }
}
