//! Terminal rendering. Nothing else in the game writes to the terminal.
//!
//! The 1100×650 field is scaled onto whatever cell grid the terminal has.
//! Frames are composed in an off-screen cell buffer so the translucent
//! overlay can dim what is already drawn, then flushed row by row.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use bird_shooter::assets::{Label, Rgb, Sprite};
use bird_shooter::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use bird_shooter::scene::Presenter;
use bird_shooter::GameError;

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
}

const BLANK: Cell = Cell { ch: ' ', fg: (0, 0, 0) };

pub struct TerminalPresenter<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, (cols, rows): (u16, u16)) -> Self {
        Self {
            out,
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    fn col(&self, x: i32) -> i32 {
        (x * i32::from(self.cols)).div_euclid(FIELD_WIDTH)
    }

    fn row(&self, y: i32) -> i32 {
        (y * i32::from(self.rows)).div_euclid(FIELD_HEIGHT)
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= i32::from(self.cols) || row >= i32::from(self.rows) {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = cell;
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb { r: color.0, g: color.1, b: color.2 }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn set_caption(&mut self, caption: &str) -> Result<(), GameError> {
        self.out.queue(terminal::SetTitle(caption))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), GameError> {
        let (cols, rows) = terminal::size()?;
        if (cols, rows) != (self.cols, self.rows) {
            self.cols = cols;
            self.rows = rows;
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        self.cells = vec![BLANK; cols as usize * rows as usize];
        Ok(())
    }

    /// Fill every cell the sprite's box covers, at least one.
    fn blit(&mut self, sprite: &Sprite, (x, y): (i32, i32)) -> Result<(), GameError> {
        let (w, h) = sprite.size();
        let (c0, r0) = (self.col(x), self.row(y));
        let c1 = self.col(x + w).max(c0 + 1);
        let r1 = self.row(y + h).max(r0 + 1);
        let cell = Cell { ch: sprite.glyph(), fg: sprite.color };
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, cell);
            }
        }
        Ok(())
    }

    /// One line of text on the label's middle row.
    fn blit_label(&mut self, label: &Label, (x, y): (i32, i32)) -> Result<(), GameError> {
        let row = self.row(y + label.height / 2);
        let col = self.col(x);
        for (i, ch) in label.text.chars().enumerate() {
            self.put(col + i as i32, row, Cell { ch, fg: label.color });
        }
        Ok(())
    }

    fn shade(&mut self, alpha: u8) -> Result<(), GameError> {
        let keep = 255 - u16::from(alpha);
        let dim = |c: u8| (u16::from(c) * keep / 255) as u8;
        for cell in &mut self.cells {
            cell.fg = (dim(cell.fg.0), dim(cell.fg.1), dim(cell.fg.2));
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), GameError> {
        let cols = self.cols as usize;
        for (row, line) in self.cells.chunks(cols.max(1)).enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            let mut color = None;
            for cell in line {
                if color != Some(cell.fg) {
                    self.out.queue(style::SetForegroundColor(rgb(cell.fg)))?;
                    color = Some(cell.fg);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}
