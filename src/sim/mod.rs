// sim/ - Scene session: interaction, mode switching, per-frame update
//
// One `SceneSession` owns every piece of mutable state. Input handlers
// and the frame loop take it explicitly; nothing is global.

mod exit;
mod mode;
mod pick;
mod tiles;

pub use exit::ExitControl;
pub use mode::{Mode, ModeState};
pub use pick::{GridHit, nearest};
pub use tiles::{RevealFloors, TileGrid};

use glam::{Vec2, Vec3};

use crate::config::SceneConfig;
use crate::error::Result;
use crate::render::{FrameEncoder, Surface};
use crate::world::{Camera, Damping, to_ndc};

pub struct SceneSession {
    config: SceneConfig,

    camera: Camera,
    surface: Surface,

    // Entities
    grid: TileGrid,
    exit: ExitControl,
    state: ModeState,

    // Ramps
    height: Damping,
    opacity: Damping,

    // Output
    encoder: FrameEncoder,

    started_at: Option<f64>,
}

impl SceneSession {
    /// Validate the config, then build the scene
    pub fn new(config: SceneConfig, width: u32, height: u32, device_pixel_ratio: f32) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, width, height, device_pixel_ratio))
    }

    pub fn with_defaults(width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        Self::build(SceneConfig::default(), width, height, device_pixel_ratio)
    }

    fn build(config: SceneConfig, width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        let [cx, cy, cz] = config.camera_position;
        let mut camera = Camera::new(
            config.camera_fov,
            1.0,
            config.camera_near,
            config.camera_far,
            Vec3::new(cx, cy, cz),
        );
        camera.set_viewport(width, height);

        let surface = Surface::new(
            width,
            height,
            device_pixel_ratio,
            config.max_pixel_ratio,
            config.board_clear_color,
        );

        let grid = TileGrid::new(
            config.board_size,
            config.tile_size,
            config.floor_height,
            config.reveal_floor_offset,
        );

        let [ex, ey, ez] = config.exit_position;
        let exit = ExitControl::new(
            Vec3::new(ex, ey, ez),
            config.exit_radius,
            config.exit_tilt,
            config.exit_spin_step,
        );

        let encoder = FrameEncoder::new(&grid);

        log::info!("scene session ready ({width}x{height} @ {:.2}x)", surface.pixel_ratio);

        Self {
            height: Damping::new(config.height_damping, config.height_epsilon),
            opacity: Damping::new(config.opacity_damping, config.opacity_epsilon),
            config,
            camera,
            surface,
            grid,
            exit,
            state: ModeState::default(),
            encoder,
            started_at: None,
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let ndc = self.ndc(client_x, client_y);
        self.pointer_move_ndc(ndc);
    }

    pub fn click(&mut self, client_x: f32, client_y: f32) {
        let ndc = self.ndc(client_x, client_y);
        self.click_ndc(ndc);
    }

    pub fn pointer_move_ndc(&mut self, ndc: Vec2) {
        let ray = self.camera.ray(ndc);

        if self.state.is_immersive() {
            self.exit.hovered = self.exit.hit(&ray).is_some();
            return;
        }

        let Some(raised) = self.state.raised else { return };
        let on_own_floor = match self.grid.pick(&ray) {
            Some(GridHit::Floor(f)) => self.grid.floors.tile[f] == raised,
            _ => false,
        };
        if !on_own_floor {
            self.grid.lower(raised);
            self.state.raised = None;
        }
    }

    pub fn click_ndc(&mut self, ndc: Vec2) {
        let ray = self.camera.ray(ndc);

        if self.state.is_immersive() {
            if self.exit.hit(&ray).is_some() {
                self.exit_immersive();
            }
            return;
        }

        match self.grid.pick(&ray) {
            Some(GridHit::Floor(f)) => {
                // Hide before the mode switch so it never flashes on return.
                self.grid.floors.visible[f] = false;
                self.enter_immersive();
            }
            Some(GridHit::Tile(idx)) if self.grid.dark[idx] => {
                if let Some(prev) = self.state.raised {
                    if prev != idx {
                        self.grid.lower(prev);
                    }
                }
                self.grid.raise(idx, self.config.raise_distance);
                self.state.raised = Some(idx);
            }
            _ => {}
        }
    }

    /// Surface size changed; takes effect on the next frame
    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f32) {
        self.camera.set_viewport(width, height);
        self.surface.resize(width, height, device_pixel_ratio);
    }

    // ------------------------------------------------------------------
    // Mode transitions
    // ------------------------------------------------------------------

    fn enter_immersive(&mut self) {
        self.state.mode = Mode::Immersive;
        self.grid.visible = false;
        self.surface.clear_color = self.config.immersive_clear_color;
        self.exit.show();

        let [x, y, z] = self.config.camera_position;
        self.camera.position = Vec3::new(x, y, z);
        self.camera.orient(0.0, 0.0);

        // The tile stays where it is; it is simply no longer drawn.
        if let Some(idx) = self.state.raised.take() {
            self.grid.raised[idx] = false;
        }
        log::debug!("mode -> immersive");
    }

    fn exit_immersive(&mut self) {
        self.state.mode = Mode::Board;
        self.surface.clear_color = self.config.board_clear_color;
        self.grid.visible = true;
        self.exit.hide();
        self.grid.reset();
        self.state.raised = None;
        log::debug!("mode -> board");
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Advance one display frame; `now_ms` is wall-clock milliseconds
    pub fn tick(&mut self, now_ms: f64) {
        let started = *self.started_at.get_or_insert(now_ms);

        match self.state.mode {
            Mode::Board => {
                let elapsed = (now_ms - started).max(0.0);
                let yaw = (elapsed * self.config.yaw_rate).rem_euclid(std::f64::consts::TAU);
                self.camera.orient(yaw as f32, 0.0);
                self.grid.step(self.height, self.opacity);
            }
            Mode::Immersive => {
                self.camera.orient(0.0, 0.0);
                self.exit.step();
            }
        }

        self.encoder.encode(&self.grid);
    }

    fn ndc(&self, client_x: f32, client_y: f32) -> Vec2 {
        to_ndc(client_x, client_y, self.surface.width as f32, self.surface.height as f32)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &SceneConfig { &self.config }
    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn surface(&self) -> &Surface { &self.surface }
    pub fn grid(&self) -> &TileGrid { &self.grid }
    pub fn exit(&self) -> &ExitControl { &self.exit }
    pub fn encoder(&self) -> &FrameEncoder { &self.encoder }
    pub fn mode(&self) -> Mode { self.state.mode }
    pub fn raised_tile(&self) -> Option<usize> { self.state.raised }
}
