//! What each screen draws, and in which order.
//!
//! The actual output device sits behind `Presenter`; this module only
//! decides the back-to-front sequence for every screen.

use crate::assets::{Assets, Font, Label, Sprite};
use crate::consts::{BANNER_FONT_SIZE, FIELD_HEIGHT, FIELD_WIDTH, OVERLAY_ALPHA, TITLE_FONT_SIZE};
use crate::entities::PlayState;
use crate::error::GameError;
use crate::session::Outcome;

const WHITE: (u8, u8, u8) = (255, 255, 255);

pub const TITLE_CAPTION: &str = "Bird Shooter";
pub const PLAY_CAPTION: &str = "Bird Shooter: Battle";

pub const TITLE_LINES: [&str; 5] = [
    "Game Start : Esc",
    "Move : W A S D / arrow keys",
    "Attack : Enter",
    "Debug : 1 damage  2 clear  3 over",
    "Quit : Q",
];

pub trait Presenter {
    fn set_caption(&mut self, caption: &str) -> Result<(), GameError>;

    /// Start a new frame from a blank surface.
    fn clear(&mut self) -> Result<(), GameError>;

    /// Draw `sprite` with its top-left corner at `at`, in field units.
    fn blit(&mut self, sprite: &Sprite, at: (i32, i32)) -> Result<(), GameError>;

    fn blit_label(&mut self, label: &Label, at: (i32, i32)) -> Result<(), GameError>;

    /// Darken everything drawn so far by a translucent black layer.
    fn shade(&mut self, alpha: u8) -> Result<(), GameError>;

    /// Show the finished frame.
    fn update(&mut self) -> Result<(), GameError>;
}

pub fn draw_title<P: Presenter>(out: &mut P, assets: &Assets) -> Result<(), GameError> {
    out.set_caption(TITLE_CAPTION)?;
    out.clear()?;
    out.blit(&assets.background, (0, 0))?;
    out.shade(OVERLAY_ALPHA)?;

    let font = Font::new(TITLE_FONT_SIZE);
    let x = FIELD_WIDTH / 2 - 450;
    for (i, line) in TITLE_LINES.iter().enumerate() {
        let y = FIELD_HEIGHT / 2 - 100 + 50 * i as i32;
        out.blit_label(&font.render(line, WHITE), (x, y))?;
    }
    out.update()
}

/// Background, player, life, beams, explosions; always back to front.
pub fn draw_play<P: Presenter>(
    out: &mut P,
    state: &PlayState,
    assets: &Assets,
) -> Result<(), GameError> {
    out.clear()?;
    out.blit(&assets.background, (0, 0))?;
    out.blit(state.player.image(), state.player.rect.top_left())?;

    let label = state.life.label();
    out.blit_label(&label, state.life.label_position(&label))?;

    for beam in &state.beams {
        out.blit(&beam.sprite, beam.rect.top_left())?;
    }
    for explosion in &state.explosions {
        out.blit(explosion.image(), explosion.rect.top_left())?;
    }
    out.update()
}

/// Overlay on top of whatever the last play frame left on screen.
pub fn draw_finished<P: Presenter>(
    out: &mut P,
    outcome: Outcome,
    assets: &Assets,
) -> Result<(), GameError> {
    let banner = match outcome {
        Outcome::Clear => "Game Clear",
        Outcome::Over => "Game Over",
    };
    let mid_y = FIELD_HEIGHT / 2;

    out.shade(OVERLAY_ALPHA)?;
    let text = Font::new(BANNER_FONT_SIZE).render(banner, WHITE);
    out.blit_label(&text, (FIELD_WIDTH / 2 - 200, mid_y))?;
    out.blit(&assets.bird_crying, (FIELD_WIDTH / 2 - 270, mid_y))?;
    out.blit(&assets.bird_crying, (FIELD_WIDTH / 2 + 200, mid_y))?;
    out.update()
}
