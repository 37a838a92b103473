//! Keyboard model.
//!
//! The game sees one `FrameInput` per frame: the set of movement keys
//! currently held plus the discrete events that arrived since the last poll.
//! `KeyboardInput` builds it from raw crossterm events.

use std::collections::HashMap;
use std::sync::mpsc::{self, TryRecvError};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [MoveKey::Up, MoveKey::Down, MoveKey::Left, MoveKey::Right];

    /// Unit displacement, screen orientation.
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveKey::Up => (0, -1),
            MoveKey::Down => (0, 1),
            MoveKey::Left => (-1, 0),
            MoveKey::Right => (1, 0),
        }
    }
}

/// Movement keys held during a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: MoveKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Up => self.up = held,
            MoveKey::Down => self.down = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Up => self.up,
            MoveKey::Down => self.down,
            MoveKey::Left => self.left,
            MoveKey::Right => self.right,
        }
    }

    /// Sum of the unit vectors of every held key. Opposing keys cancel.
    pub fn displacement(&self) -> (i32, i32) {
        MoveKey::ALL
            .iter()
            .filter(|key| self.is_held(**key))
            .map(|key| key.delta())
            .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Leaves the title screen.
    Confirm,
    Fire,
    /// Debug: lose one life.
    DebugDamage,
    /// Debug: jump straight to the clear screen.
    DebugClear,
    /// Debug: jump straight to the game-over screen.
    DebugOver,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub held: HeldKeys,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_events(events: &[InputEvent]) -> Self {
        Self { held: HeldKeys::none(), events: events.to_vec() }
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}

pub trait InputSource {
    /// Everything that happened since the previous poll. Never blocks.
    fn poll(&mut self) -> FrameInput;
}

// ── Key mapping ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Move(MoveKey),
    Event(InputEvent),
}

pub fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    let action = match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Event(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Event(InputEvent::Quit),
        KeyCode::Esc => KeyAction::Event(InputEvent::Confirm),
        KeyCode::Enter => KeyAction::Event(InputEvent::Fire),
        KeyCode::Char('1') => KeyAction::Event(InputEvent::DebugDamage),
        KeyCode::Char('2') => KeyAction::Event(InputEvent::DebugClear),
        KeyCode::Char('3') => KeyAction::Event(InputEvent::DebugOver),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Move(MoveKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Move(MoveKey::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Move(MoveKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Move(MoveKey::Right)
        }
        _ => return None,
    };
    Some(action)
}

// ── Terminal keyboard ─────────────────────────────────────────────────────────

/// Held-key tracking over a stream of terminal key events.
///
/// Terminals with keyboard enhancement report `Press`/`Repeat`/`Release`, so
/// a key is dropped on release. Classic terminals only repeat `Press` while a
/// key is down; there a key counts as held while its last press is at most
/// `hold_window` frames old. The window must outlast the OS delay before the
/// first repeat, or a held key stalls between the press and the repeats.
pub struct KeyboardInput {
    rx: mpsc::Receiver<Event>,
    key_frame: HashMap<MoveKey, u64>,
    frame: u64,
    hold_window: u64,
}

impl KeyboardInput {
    pub fn new(rx: mpsc::Receiver<Event>, hold_window: u64) -> Self {
        Self { rx, key_frame: HashMap::new(), frame: 0, hold_window }
    }

    fn is_held(&self, key: MoveKey) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> FrameInput {
        self.frame += 1;
        let mut events = Vec::new();

        loop {
            let event = match self.rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("keyboard reader stopped, treating as quit");
                    events.push(InputEvent::Quit);
                    break;
                }
            };
            let Event::Key(KeyEvent { code, modifiers, kind, .. }) = event else {
                continue;
            };
            let Some(action) = translate_key(code, modifiers) else {
                continue;
            };
            match (kind, action) {
                (KeyEventKind::Press, KeyAction::Event(ev)) => events.push(ev),
                (KeyEventKind::Press | KeyEventKind::Repeat, KeyAction::Move(key)) => {
                    self.key_frame.insert(key, self.frame);
                }
                (KeyEventKind::Release, KeyAction::Move(key)) => {
                    self.key_frame.remove(&key);
                }
                _ => {}
            }
        }

        let mut held = HeldKeys::none();
        for key in MoveKey::ALL {
            held.set(key, self.is_held(key));
        }
        if !events.is_empty() {
            trace!("frame {}: events {:?}", self.frame, events);
        }
        FrameInput { held, events }
    }
}
