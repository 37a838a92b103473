mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use bird_shooter::assets::{Assets, BuiltinCatalog};
use bird_shooter::clock::SystemClock;
use bird_shooter::consts::{DEFAULT_FPS, DEFAULT_HOLD_SECS, DEFAULT_LIFE};
use bird_shooter::input::KeyboardInput;
use bird_shooter::session::{Game, SessionEnd};
use bird_shooter::GameConfig;

use display::TerminalPresenter;

#[derive(Parser)]
#[command(name = "bird_shooter")]
#[command(about = "Move a bird around the field and shoot beams")]
struct Args {
    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Starting life
    #[arg(long, default_value_t = DEFAULT_LIFE, value_parser = clap::value_parser!(u32).range(1..))]
    life: u32,

    /// Seconds the clear / game-over screen stays up
    #[arg(long, default_value_t = DEFAULT_HOLD_SECS)]
    hold_secs: u64,

    /// Write logs here (filter with RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            fps: self.fps,
            initial_life: self.life,
            hold: Duration::from_secs(self.hold_secs),
            ..GameConfig::default()
        }
    }
}

/// The terminal is in raw mode while playing, so logs only ever go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    log::info!("Bird Shooter starting...");

    // Missing images are fatal; report them before touching the terminal.
    let assets = Assets::load(&BuiltinCatalog).context("loading game assets")?;
    let config = args.config();

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // game loop is gone
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, rx, assets, config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match result? {
        SessionEnd::Quit => log::info!("player quit"),
        SessionEnd::Finished(outcome) => log::info!("game ended: {outcome:?}"),
    }
    Ok(())
}

fn run<W: Write>(
    out: &mut W,
    rx: mpsc::Receiver<Event>,
    assets: Assets,
    config: GameConfig,
) -> Result<SessionEnd> {
    let presenter = TerminalPresenter::new(out, terminal::size()?);
    let input = KeyboardInput::new(rx, config.hold_window);
    let mut game = Game::new(presenter, input, SystemClock::new(), assets, config);
    let end = game.run().context("game loop failed")?;
    Ok(end)
}
