//! Image and text handles.
//!
//! A `Sprite` is an opaque image: a bounding box in field units plus the
//! heading of whatever it depicts. Rotation and mirroring update both, the
//! way an affine image transform would, so the presentation layer can pick
//! a matching glyph. Transforms run when entities are built, never per frame.

use log::{debug, info};

use crate::error::GameError;

pub type Rgb = (u8, u8, u8);

/// Glyphs used by a text-cell presenter to draw a sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyphs {
    /// Same glyph whatever the heading.
    Plain(char),
    /// One glyph per heading octant, counter-clockwise from east.
    Oriented([char; 8]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    /// Heading of the depicted figure, y axis pointing up.
    pub facing: (f32, f32),
    pub glyphs: Glyphs,
    pub color: Rgb,
}

impl Sprite {
    /// Rotate counter-clockwise by `degrees` and scale by `scale`.
    ///
    /// The bounding box grows to enclose the rotated image.
    pub fn transform(&self, degrees: f32, scale: f32) -> Sprite {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let width = (self.width * cos.abs() + self.height * sin.abs()) * scale;
        let height = (self.width * sin.abs() + self.height * cos.abs()) * scale;
        let (fx, fy) = self.facing;
        Sprite {
            width,
            height,
            facing: (fx * cos - fy * sin, fx * sin + fy * cos),
            ..*self
        }
    }

    pub fn mirror(&self, horizontal: bool, vertical: bool) -> Sprite {
        let (mut fx, mut fy) = self.facing;
        if horizontal {
            fx = -fx;
        }
        if vertical {
            fy = -fy;
        }
        Sprite { facing: (fx, fy), ..*self }
    }

    /// Pixel-grid size, rounded to whole field units.
    pub fn size(&self) -> (i32, i32) {
        (self.width.round() as i32, self.height.round() as i32)
    }

    /// Heading quantized to 0..8, counter-clockwise from east.
    pub fn octant(&self) -> usize {
        let degrees = self.facing.1.atan2(self.facing.0).to_degrees();
        ((degrees / 45.0).round() as i32).rem_euclid(8) as usize
    }

    pub fn glyph(&self) -> char {
        match self.glyphs {
            Glyphs::Plain(c) => c,
            Glyphs::Oriented(set) => set[self.octant()],
        }
    }
}

// ── Text ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    pub size: u16,
}

/// Rendered text, ready to be presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub color: Rgb,
    pub width: i32,
    pub height: i32,
}

impl Font {
    pub fn new(size: u16) -> Self {
        Self { size }
    }

    pub fn render(&self, text: &str, color: Rgb) -> Label {
        let size = i32::from(self.size);
        Label {
            text: text.to_string(),
            color,
            width: text.chars().count() as i32 * size / 2,
            height: size,
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

pub trait ImageLoader {
    fn load_image(&self, name: &str) -> Result<Sprite, GameError>;
}

const ARROWS: [char; 8] = ['▶', '◥', '▲', '◤', '◀', '◣', '▼', '◢'];
const EAST: (f32, f32) = (1.0, 0.0);
const WEST: (f32, f32) = (-1.0, 0.0);

/// Images compiled into the binary.
const CATALOG: &[Sprite] = &[
    Sprite {
        name: "bird_side",
        width: 90.0,
        height: 80.0,
        facing: EAST,
        glyphs: Glyphs::Oriented(ARROWS),
        color: (255, 220, 80),
    },
    Sprite {
        name: "bird_front",
        width: 80.0,
        height: 90.0,
        facing: WEST,
        glyphs: Glyphs::Oriented(ARROWS),
        color: (255, 200, 60),
    },
    Sprite {
        name: "beam",
        width: 50.0,
        height: 14.0,
        facing: EAST,
        glyphs: Glyphs::Oriented(['━', '╱', '┃', '╲', '━', '╱', '┃', '╲']),
        color: (80, 220, 255),
    },
    Sprite {
        name: "explosion",
        width: 100.0,
        height: 90.0,
        facing: EAST,
        glyphs: Glyphs::Oriented(['✹', '✹', '✸', '✸', '✸', '✸', '✹', '✹']),
        color: (255, 120, 40),
    },
    Sprite {
        name: "bird_crying",
        width: 80.0,
        height: 80.0,
        facing: WEST,
        glyphs: Glyphs::Plain('☹'),
        color: (160, 200, 255),
    },
    Sprite {
        name: "background",
        width: 1024.0,
        height: 576.0,
        facing: EAST,
        glyphs: Glyphs::Plain('·'),
        color: (50, 70, 50),
    },
];

#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCatalog;

impl ImageLoader for BuiltinCatalog {
    fn load_image(&self, name: &str) -> Result<Sprite, GameError> {
        debug!("loading image '{name}'");
        CATALOG
            .iter()
            .find(|sprite| sprite.name == name)
            .copied()
            .ok_or_else(|| GameError::AssetNotFound { name: name.to_string() })
    }
}

/// Every base image the game needs, loaded once at startup.
#[derive(Clone, Copy, Debug)]
pub struct Assets {
    pub background: Sprite,
    pub bird_side: Sprite,
    pub bird_front: Sprite,
    pub beam: Sprite,
    pub explosion: Sprite,
    pub bird_crying: Sprite,
}

impl Assets {
    pub fn load(loader: &impl ImageLoader) -> Result<Self, GameError> {
        let assets = Self {
            background: loader.load_image("background")?,
            bird_side: loader.load_image("bird_side")?,
            bird_front: loader.load_image("bird_front")?,
            beam: loader.load_image("beam")?,
            explosion: loader.load_image("explosion")?,
            bird_crying: loader.load_image("bird_crying")?,
        };
        info!("assets loaded");
        Ok(assets)
    }
}
