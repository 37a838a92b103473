//! Field geometry: integer rectangles and the two pure helpers every
//! entity leans on.

use crate::error::GameError;

/// Axis-aligned box with a top-left origin, in field units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w`×`h` rect whose centre lands on `center`.
    pub fn centered_at(center: (i32, i32), (w, h): (i32, i32)) -> Self {
        Self { x: center.0 - w / 2, y: center.1 - h / 2, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn top_left(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    /// Same size, shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

/// Per-axis containment in a `width`×`height` field: `(horizontal, vertical)`.
///
/// An axis is in bounds when neither edge on that axis crosses the field
/// boundary. Callers test the axes separately or together as they need.
pub fn in_bounds(rect: &Rect, width: i32, height: i32) -> (bool, bool) {
    let horizontal = rect.left() >= 0 && rect.right() <= width;
    let vertical = rect.top() >= 0 && rect.bottom() <= height;
    (horizontal, vertical)
}

/// Unit vector from `origin`'s centre to `target`'s centre.
pub fn direction_to(origin: &Rect, target: &Rect) -> Result<(f32, f32), GameError> {
    let (ox, oy) = origin.center();
    let (tx, ty) = target.center();
    let dx = (tx - ox) as f32;
    let dy = (ty - oy) as f32;
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        return Err(GameError::DegenerateGeometry { at: (ox, oy) });
    }
    Ok((dx / norm, dy / norm))
}
