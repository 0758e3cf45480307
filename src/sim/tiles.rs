// tiles.rs - Checkerboard tiles and their reveal floors
//
// Structure-of-Arrays layout, one slot per tile, row-major over (i, j).
// Dark tiles ((i + j) odd) each own one reveal floor directly beneath
// them; the floor refers back to its tile by index.

use glam::Vec3;

use crate::world::Damping;

pub struct RevealFloors {
    /// Owning tile index
    pub tile: Vec<usize>,
    pub y: Vec<f32>,
    pub opacity: Vec<f32>,
    pub target: Vec<f32>,
    pub visible: Vec<bool>,
}

impl RevealFloors {
    fn with_capacity(n: usize) -> Self {
        Self {
            tile: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            opacity: Vec::with_capacity(n),
            target: Vec::with_capacity(n),
            visible: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.tile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_empty()
    }

    fn push(&mut self, tile: usize, y: f32) -> usize {
        self.tile.push(tile);
        self.y.push(y);
        self.opacity.push(0.0);
        self.target.push(0.0);
        self.visible.push(false);
        self.tile.len() - 1
    }
}

pub struct TileGrid {
    n: usize,
    size: f32,

    // Tiles (SoA)
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub original: Vec<f32>,
    pub target: Vec<f32>,
    pub dark: Vec<bool>,
    pub raised: Vec<bool>,
    floor: Vec<Option<usize>>,

    pub floors: RevealFloors,

    /// Visibility of the whole board (the scene-graph group root)
    pub visible: bool,
}

impl TileGrid {
    pub fn new(n: usize, size: f32, floor_height: f32, floor_offset: f32) -> Self {
        let count = n * n;
        let mut grid = Self {
            n,
            size,
            x: Vec::with_capacity(count),
            y: Vec::with_capacity(count),
            z: Vec::with_capacity(count),
            original: Vec::with_capacity(count),
            target: Vec::with_capacity(count),
            dark: Vec::with_capacity(count),
            raised: Vec::with_capacity(count),
            floor: Vec::with_capacity(count),
            floors: RevealFloors::with_capacity(count / 2 + 1),
            visible: true,
        };

        let half = n as f32 / 2.0;
        for i in 0..n {
            for j in 0..n {
                let idx = grid.x.len();
                let dark = (i + j) % 2 == 1;

                grid.x.push((i as f32 - half) * size);
                grid.y.push(floor_height);
                grid.z.push((j as f32 - half) * size);
                grid.original.push(floor_height);
                grid.target.push(floor_height);
                grid.dark.push(dark);
                grid.raised.push(false);

                let floor = dark.then(|| grid.floors.push(idx, floor_height - floor_offset));
                grid.floor.push(floor);
            }
        }

        log::info!("built {n}x{n} board: {} tiles, {} reveal floors", grid.len(), grid.floors.len());
        grid
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn tile_size(&self) -> f32 {
        self.size
    }

    /// Tile index for grid coordinates, `None` off the board
    pub fn index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.n && j < self.n).then(|| i * self.n + j)
    }

    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.n, idx % self.n)
    }

    pub fn position(&self, idx: usize) -> Vec3 {
        Vec3::new(self.x[idx], self.y[idx], self.z[idx])
    }

    pub fn floor_position(&self, floor: usize) -> Vec3 {
        let tile = self.floors.tile[floor];
        Vec3::new(self.x[tile], self.floors.y[floor], self.z[tile])
    }

    /// Reveal floor owned by a tile; light tiles have none
    pub fn floor_of(&self, idx: usize) -> Option<usize> {
        self.floor[idx]
    }

    pub fn set_target_height(&mut self, idx: usize, height: f32) {
        self.target[idx] = height;
    }

    pub fn set_target_opacity(&mut self, floor: usize, opacity: f32) {
        self.floors.target[floor] = opacity;
    }

    /// Lift a tile and start fading its reveal floor in
    pub fn raise(&mut self, idx: usize, distance: f32) {
        self.set_target_height(idx, self.original[idx] + distance);
        self.raised[idx] = true;
        if let Some(f) = self.floor[idx] {
            self.floors.visible[f] = true;
            self.set_target_opacity(f, 1.0);
        }
        log::debug!("raise tile {:?}", self.coords(idx));
    }

    /// Send a tile back to rest and start fading its reveal floor out
    pub fn lower(&mut self, idx: usize) {
        self.set_target_height(idx, self.original[idx]);
        self.raised[idx] = false;
        if let Some(f) = self.floor[idx] {
            self.set_target_opacity(f, 0.0);
        }
        log::debug!("lower tile {:?}", self.coords(idx));
    }

    /// Put every tile at rest and every reveal floor out of sight, without animating
    pub fn reset(&mut self) {
        self.y.copy_from_slice(&self.original);
        self.target.copy_from_slice(&self.original);
        self.raised.fill(false);
        self.floors.opacity.fill(0.0);
        self.floors.target.fill(0.0);
        self.floors.visible.fill(false);
    }

    pub fn raised_count(&self) -> usize {
        self.raised.iter().filter(|&&r| r).count()
    }

    /// Advance every height and opacity ramp by one frame
    pub fn step(&mut self, height: Damping, opacity: Damping) {
        for (y, &target) in self.y.iter_mut().zip(&self.target) {
            *y = height.step(*y, target);
        }

        let floors = &mut self.floors;
        for f in 0..floors.len() {
            let o = opacity.step(floors.opacity[f], floors.target[f]);
            floors.opacity[f] = o;
            floors.visible[f] = o > opacity.epsilon;
        }
    }
}
