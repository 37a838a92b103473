//! Game entity types. Pure data; the update rules live in `compute`.

use crate::assets::{Font, Label, Rgb, Sprite};
use crate::geometry::Rect;

// ── Facing ────────────────────────────────────────────────────────────────────

/// The eight player facings, in screen orientation (y grows downwards).
///
/// Discriminants follow the heading octant, counter-clockwise from east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// `(dx, dy)` with each component in {-1, 0, +1}.
    pub fn components(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::UpRight => (1, -1),
            Direction::Up => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (-1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Facing for a displacement's sign vector; `None` when it is zero.
    pub fn from_components(dx: i32, dy: i32) -> Option<Direction> {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Direction::Right),
            (1, -1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, 1) => Some(Direction::DownLeft),
            (0, 1) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    pub fn octant(self) -> usize {
        self as usize
    }
}

/// One sprite per facing, built once when the player is created.
#[derive(Clone, Copy, Debug)]
pub struct SpriteTable {
    sprites: [Sprite; 8],
}

impl SpriteTable {
    pub fn new(sprites: [Sprite; 8]) -> Self {
        Self { sprites }
    }

    pub fn get(&self, direction: Direction) -> &Sprite {
        &self.sprites[direction as usize]
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub rect: Rect,
    /// Last non-zero movement; kept while idle.
    pub direction: Direction,
    pub sprites: SpriteTable,
    pub speed: i32,
}

impl Player {
    pub fn image(&self) -> &Sprite {
        self.sprites.get(self.direction)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Beam {
    /// Derived from `origin` and `travelled`; rounded fresh every frame.
    pub rect: Rect,
    /// Centre at spawn.
    pub origin: (i32, i32),
    /// Unit vector fixed at spawn, screen orientation.
    pub velocity: (f32, f32),
    /// Field units per frame along `velocity`.
    pub speed: f32,
    /// Frames since spawn.
    pub travelled: u32,
    pub sprite: Sprite,
}

impl Beam {
    /// Exact centre after `travelled` frames, before rounding.
    pub fn position(&self) -> (f32, f32) {
        let distance = self.speed * self.travelled as f32;
        (
            self.origin.0 as f32 + distance * self.velocity.0,
            self.origin.1 as f32 + distance * self.velocity.1,
        )
    }

    /// The beam one frame further along, rect re-derived from its position.
    pub fn advanced(&self) -> Beam {
        let next = Beam { travelled: self.travelled + 1, ..*self };
        let (x, y) = next.position();
        let center = (x.round() as i32, y.round() as i32);
        Beam { rect: Rect::centered_at(center, self.rect.size()), ..next }
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// A timed two-frame flicker; gone once `life` drops below zero.
#[derive(Clone, Copy, Debug)]
pub struct Explosion {
    pub rect: Rect,
    pub life: i32,
    pub frames: [Sprite; 2],
    /// Index into `frames` currently on display.
    pub frame: usize,
}

impl Explosion {
    pub fn image(&self) -> &Sprite {
        &self.frames[self.frame]
    }
}

// ── Life ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Life {
    pub value: u32,
    pub font: Font,
    pub color: Rgb,
    pub center: (i32, i32),
}

impl Life {
    /// Re-render the label from the current value.
    pub fn label(&self) -> Label {
        self.font.render(&format!("Life {}", self.value), self.color)
    }

    /// Top-left position that centres `label` on the tracker's anchor.
    pub fn label_position(&self, label: &Label) -> (i32, i32) {
        Rect::centered_at(self.center, (label.width, label.height)).top_left()
    }

    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }
}

// ── Play state ────────────────────────────────────────────────────────────────

/// Everything live during active play. Cloneable so the pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct PlayState {
    pub player: Player,
    pub beams: Vec<Beam>,
    pub explosions: Vec<Explosion>,
    pub life: Life,
    pub frame: u64,
}
