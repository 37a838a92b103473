//! Pure game-logic functions.
//!
//! Every update takes an immutable reference to the current state and
//! returns a brand-new value. Entities that leave the field or run out of
//! time are dropped while the new collection is built, never removed from
//! the one being iterated.

use log::{debug, trace};

use crate::assets::{Assets, Font};
use crate::config::GameConfig;
use crate::consts::{
    BEAM_SPEED, EXPLOSION_FLICKER, FIELD_HEIGHT, FIELD_WIDTH, HIT_EXPLOSION_LIFE,
    LIFE_FONT_SIZE, LIFE_LABEL_CENTER, LIFE_LABEL_COLOR, PLAYER_SPEED, PLAYER_START,
};
use crate::entities::{Beam, Direction, Explosion, Life, PlayState, Player, SpriteTable};
use crate::geometry::{in_bounds, Rect};
use crate::input::HeldKeys;

fn fully_in_field(rect: &Rect) -> bool {
    in_bounds(rect, FIELD_WIDTH, FIELD_HEIGHT) == (true, true)
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the player's facing table from the two bird images.
///
/// The side image covers left and right; the front image, mirrored and
/// turned in 45° steps, covers the vertical and diagonal facings.
pub fn player_sprites(assets: &Assets) -> SpriteTable {
    let side = assets.bird_side.transform(0.0, 0.8);
    let side_flipped = side.mirror(true, false);
    let front = assets.bird_front.transform(0.0, 0.9);
    let front_flipped = front.mirror(true, false);

    SpriteTable::new([
        side,                               // Right
        front_flipped.transform(45.0, 0.9), // UpRight
        front_flipped.transform(90.0, 0.9), // Up
        front.transform(-45.0, 0.9),        // UpLeft
        side_flipped,                       // Left
        front.transform(45.0, 0.9),         // DownLeft
        front_flipped.transform(-90.0, 0.9), // Down
        front_flipped.transform(-45.0, 0.9), // DownRight
    ])
}

/// Player facing right, centred on `center`.
pub fn spawn_player(assets: &Assets, center: (i32, i32)) -> Player {
    let sprites = player_sprites(assets);
    let direction = Direction::Right;
    Player {
        rect: Rect::centered_at(center, sprites.get(direction).size()),
        direction,
        sprites,
        speed: PLAYER_SPEED,
    }
}

pub fn new_life(value: u32) -> Life {
    Life {
        value,
        font: Font::new(LIFE_FONT_SIZE),
        color: LIFE_LABEL_COLOR,
        center: LIFE_LABEL_CENTER,
    }
}

/// Fresh state for the start of active play.
pub fn new_play_state(assets: &Assets, config: &GameConfig) -> PlayState {
    PlayState {
        player: spawn_player(assets, PLAYER_START),
        beams: Vec::new(),
        explosions: Vec::new(),
        life: new_life(config.initial_life),
        frame: 0,
    }
}

/// A beam leaving `player` along its current facing.
///
/// The facing is turned into an angle and back, so diagonal beams get a unit
/// velocity and travel at the same speed as straight ones. The beam starts
/// centred on the firer's edge in the direction of travel.
pub fn spawn_beam(player: &Player, assets: &Assets) -> Beam {
    let (dx, dy) = player.direction.components();
    let angle = (-dy as f32).atan2(dx as f32).to_degrees();
    let sprite = assets.beam.transform(angle, 1.0);
    let radians = angle.to_radians();
    let velocity = (radians.cos(), -radians.sin());

    let (cx, cy) = player.rect.center();
    let center = (
        cx + (player.rect.w as f32 / 2.0 * velocity.0).round() as i32,
        cy + (player.rect.h as f32 / 2.0 * velocity.1).round() as i32,
    );
    Beam {
        rect: Rect::centered_at(center, sprite.size()),
        origin: center,
        velocity,
        speed: BEAM_SPEED,
        travelled: 0,
        sprite,
    }
}

/// An explosion centred on `target`, lasting `life` frames.
pub fn spawn_explosion(target: &Rect, life: i32, assets: &Assets) -> Explosion {
    let image = assets.explosion;
    Explosion {
        rect: Rect::centered_at(target.center(), image.size()),
        life,
        frames: [image, image.mirror(true, true)],
        frame: 0,
    }
}

// ── Input-driven transitions ──────────────────────────────────────────────────

/// Move by the held keys, or not at all.
///
/// A move that would push the rect past any field edge is undone as a whole.
/// Facing follows any non-zero key sum, even one that was undone; a zero sum
/// keeps the previous facing.
pub fn move_player(player: &Player, held: HeldKeys) -> Player {
    let (sx, sy) = held.displacement();
    let moved = player.rect.translated(player.speed * sx, player.speed * sy);
    let rect = if fully_in_field(&moved) { moved } else { player.rect };
    let direction = Direction::from_components(sx, sy).unwrap_or(player.direction);
    Player { rect, direction, ..*player }
}

pub fn player_fire(state: &PlayState, assets: &Assets) -> PlayState {
    let beam = spawn_beam(&state.player, assets);
    debug!(
        "frame {}: fire {:?} from {:?}",
        state.frame, state.player.direction, beam.rect
    );
    let mut beams = state.beams.clone();
    beams.push(beam);
    PlayState { beams, ..state.clone() }
}

/// One point of damage, shown as an explosion on the player.
pub fn damage_player(state: &PlayState, assets: &Assets) -> PlayState {
    let life = Life { value: state.life.value.saturating_sub(1), ..state.life };
    debug!("frame {}: player hit, life {}", state.frame, life.value);
    let mut explosions = state.explosions.clone();
    explosions.push(spawn_explosion(&state.player.rect, HIT_EXPLOSION_LIFE, assets));
    PlayState { life, explosions, ..state.clone() }
}

// ── Per-frame advance ─────────────────────────────────────────────────────────

/// Move every beam one frame; beams leaving the field are gone.
///
/// Positions are measured from the spawn point, so rounding to whole units
/// never accumulates and diagonal beams keep full speed.
pub fn advance_beams(beams: &[Beam]) -> Vec<Beam> {
    beams
        .iter()
        .filter_map(|beam| {
            let next = beam.advanced();
            fully_in_field(&next.rect).then_some(next)
        })
        .collect()
}

/// Burn one frame of every explosion; expired ones are gone.
pub fn advance_explosions(explosions: &[Explosion]) -> Vec<Explosion> {
    explosions
        .iter()
        .filter_map(|explosion| {
            let life = explosion.life - 1;
            if life < 0 {
                return None;
            }
            let frame = life.div_euclid(EXPLOSION_FLICKER).rem_euclid(2) as usize;
            Some(Explosion { life, frame, ..*explosion })
        })
        .collect()
}

/// Advance the simulation by one frame.
pub fn tick(state: &PlayState, held: HeldKeys) -> PlayState {
    let frame = state.frame + 1;
    let player = move_player(&state.player, held);
    let beams = advance_beams(&state.beams);
    let explosions = advance_explosions(&state.explosions);
    trace!(
        "frame {frame}: player {:?}, {} beams, {} explosions",
        player.rect,
        beams.len(),
        explosions.len()
    );
    PlayState { player, beams, explosions, life: state.life, frame }
}
