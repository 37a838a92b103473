//! Bird Shooter: a small real-time arcade game.
//!
//! Core modules:
//! - `geometry`: integer rectangles, bounds checks, direction vectors
//! - `assets`: sprites, text labels and the built-in image catalog
//! - `entities`: pure game data (player, beams, explosions, life)
//! - `compute`: pure per-frame update functions
//! - `session`: title / play / terminal state machine and the frame loop
//! - `scene`, `input`, `clock`: the narrow seams to presentation, keys and time

pub mod assets;
pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod session;

pub use config::GameConfig;
pub use error::GameError;

/// Fixed game constants.
pub mod consts {
    /// Field dimensions in display units.
    pub const FIELD_WIDTH: i32 = 1100;
    pub const FIELD_HEIGHT: i32 = 650;

    /// Player displacement per frame per held key.
    pub const PLAYER_SPEED: i32 = 10;
    /// Beam travel per frame along its unit velocity.
    pub const BEAM_SPEED: f32 = 10.0;

    /// Player spawn point (rect centre).
    pub const PLAYER_START: (i32, i32) = (900, 400);

    pub const DEFAULT_FPS: u32 = 50;
    pub const DEFAULT_LIFE: u32 = 10;
    pub const DEFAULT_HOLD_SECS: u64 = 5;

    /// Frames an explosion stays on screen after a hit.
    pub const HIT_EXPLOSION_LIFE: i32 = 50;
    /// Frames per explosion animation frame.
    pub const EXPLOSION_FLICKER: i32 = 10;

    /// Life label centre.
    pub const LIFE_LABEL_CENTER: (i32, i32) = (100, FIELD_HEIGHT - 50);
    pub const LIFE_LABEL_COLOR: (u8, u8, u8) = (100, 255, 255);
    pub const LIFE_FONT_SIZE: u16 = 30;

    pub const TITLE_FONT_SIZE: u16 = 50;
    pub const BANNER_FONT_SIZE: u16 = 100;
    /// Alpha of the translucent overlay on title and terminal screens.
    pub const OVERLAY_ALPHA: u8 = 128;
}
