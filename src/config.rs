use std::time::Duration;

use crate::consts::{DEFAULT_FPS, DEFAULT_HOLD_SECS, DEFAULT_LIFE};

/// Runtime-tunable knobs. Field size and speeds are fixed in `consts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Target frame rate of the play loop.
    pub fps: u32,
    /// Life at the start of play.
    pub initial_life: u32,
    /// Real time the clear / game-over screen stays up.
    pub hold: Duration,
    /// Frames a movement key stays held after its last press or repeat,
    /// for terminals that never report key release. Covers the usual
    /// 250-500 ms delay before key repeat starts.
    pub hold_window: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            initial_life: DEFAULT_LIFE,
            hold: Duration::from_secs(DEFAULT_HOLD_SECS),
            hold_window: 25,
        }
    }
}
