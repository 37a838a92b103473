//! Session flow: title → play → clear / game over.
//!
//! `step` is the pure transition function; `Game` owns the collaborators
//! and drives step, draw and clock once per frame on a single thread.

use log::{debug, info};

use crate::assets::Assets;
use crate::clock::FrameClock;
use crate::compute::{damage_player, new_play_state, player_fire, tick};
use crate::config::GameConfig;
use crate::entities::PlayState;
use crate::error::GameError;
use crate::input::{FrameInput, InputEvent, InputSource};
use crate::scene::{draw_finished, draw_play, draw_title, Presenter, PLAY_CAPTION};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clear,
    Over,
}

#[derive(Clone, Debug)]
pub enum Screen {
    Title,
    Playing(PlayState),
    Finished(Outcome),
}

/// Result of one `step`.
#[derive(Clone, Debug)]
pub enum Flow {
    Continue(Screen),
    Quit,
}

/// How a whole session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Finished(Outcome),
}

// ── Transitions (pure) ────────────────────────────────────────────────────────

/// Advance `screen` by one frame of `input`.
///
/// Quit wins over everything else that arrived in the same frame.
pub fn step(screen: &Screen, input: &FrameInput, assets: &Assets, config: &GameConfig) -> Flow {
    if input.quit_requested() {
        return Flow::Quit;
    }
    let next = match screen {
        Screen::Title => {
            if input.events.contains(&InputEvent::Confirm) {
                Screen::Playing(new_play_state(assets, config))
            } else {
                Screen::Title
            }
        }
        Screen::Playing(state) => play_frame(state, input, assets),
        Screen::Finished(outcome) => Screen::Finished(*outcome),
    };
    Flow::Continue(next)
}

/// Handle the frame's events in arrival order, then simulate.
///
/// A transition to a finished screen ends the frame on the spot: nothing is
/// simulated or drawn for it.
fn play_frame(state: &PlayState, input: &FrameInput, assets: &Assets) -> Screen {
    let mut state = state.clone();
    for event in &input.events {
        match event {
            InputEvent::Fire => state = player_fire(&state, assets),
            InputEvent::DebugDamage => {
                state = damage_player(&state, assets);
                if state.life.is_depleted() {
                    return Screen::Finished(Outcome::Over);
                }
            }
            InputEvent::DebugClear => return Screen::Finished(Outcome::Clear),
            InputEvent::DebugOver => return Screen::Finished(Outcome::Over),
            InputEvent::Quit | InputEvent::Confirm => {}
        }
    }
    Screen::Playing(tick(&state, input.held))
}

// ── Frame loop ────────────────────────────────────────────────────────────────

pub struct Game<P, I, C> {
    presenter: P,
    input: I,
    clock: C,
    assets: Assets,
    config: GameConfig,
}

impl<P: Presenter, I: InputSource, C: FrameClock> Game<P, I, C> {
    pub fn new(presenter: P, input: I, clock: C, assets: Assets, config: GameConfig) -> Self {
        Self { presenter, input, clock, assets, config }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run one session from the title screen until it ends.
    pub fn run(&mut self) -> Result<SessionEnd, GameError> {
        info!("title screen");
        draw_title(&mut self.presenter, &self.assets)?;
        let mut screen = Screen::Title;

        loop {
            if let Screen::Finished(outcome) = screen {
                info!("session finished: {outcome:?}");
                draw_finished(&mut self.presenter, outcome, &self.assets)?;
                self.clock.hold(self.config.hold);
                return Ok(SessionEnd::Finished(outcome));
            }

            let input = self.input.poll();
            let next = match step(&screen, &input, &self.assets, &self.config) {
                Flow::Continue(next) => next,
                Flow::Quit => {
                    info!("quit requested");
                    return Ok(SessionEnd::Quit);
                }
            };

            if let (Screen::Title, Screen::Playing(_)) = (&screen, &next) {
                info!("play started");
                self.presenter.set_caption(PLAY_CAPTION)?;
            }
            if let Screen::Playing(state) = &next {
                draw_play(&mut self.presenter, state, &self.assets)?;
            }

            screen = next;
            if let Screen::Playing(state) = &screen {
                if state.frame % u64::from(self.config.fps.max(1)) == 0 {
                    debug!("frame {}: life {}", state.frame, state.life.value);
                }
            }
            if !matches!(screen, Screen::Finished(_)) {
                self.clock.tick(self.config.fps);
            }
        }
    }
}
