// mode.rs - Session mode and the raised-tile reference
//
// Holds no entities. `raised` is an index into the tile grid and is
// cleared without touching the tile itself.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Interactive board, auto-rotating camera
    #[default]
    Board,
    /// Board hidden, camera pinned, exit control shown
    Immersive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeState {
    pub mode: Mode,
    pub raised: Option<usize>,
}

impl ModeState {
    pub fn is_immersive(&self) -> bool {
        self.mode == Mode::Immersive
    }
}
