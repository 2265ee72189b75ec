mod display;

use std::error::Error;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    style::Print,
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use catch_game::compute::{new_game, restart, tick, toggle_pause};
use catch_game::entities::{GameEvent, GameState, GameStatus};
use catch_game::input::{Command, KeyTracker};
use catch_game::render::render;
use catch_game::GameConfig;

use display::TerminalSurface;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

const BELL: &str = "\x07";

// ── Bootstrap ─────────────────────────────────────────────────────────────────

/// Log to a file: stdout and stderr belong to the alternate screen.
fn init_logging() {
    let path = std::env::var_os("CATCH_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("catch_game.log"));
    let Ok(file) = File::create(&path) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// `--config <path>` wins over `CATCH_CONFIG`; otherwise defaults.
fn load_config() -> Result<GameConfig, catch_game::ConfigError> {
    let args = std::env::args().skip(1);
    match GameConfig::path_from_args(args, std::env::var_os("CATCH_CONFIG"))? {
        Some(path) => GameConfig::load(&path),
        None => Ok(GameConfig::default()),
    }
}

// ── Cues ──────────────────────────────────────────────────────────────────────

/// Fire-and-forget presentation of tick side effects.  The bell is only
/// queued; it goes out with the next frame flush.
fn announce<W: Write>(out: &mut W, event: GameEvent) -> std::io::Result<()> {
    match event {
        GameEvent::Clap { score } => {
            log::info!("👏 Clap! ({})", score);
            out.queue(Print(BELL))?;
        }
        GameEvent::ObstacleHit => {
            log::info!("😱 Oh no!");
            out.queue(Print(BELL))?;
        }
        GameEvent::ThemeChanged { .. } | GameEvent::ItemCaught | GameEvent::GiantCaught => {}
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: key events are folded into a `KeyTracker` as they arrive;
/// each frame samples one held-key snapshot and feeds it to `tick`, so
/// holding a direction key moves the paddle every frame.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new();
    let mut surface = TerminalSurface::new(state.width(), state.height());
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match keys.handle(key, frame) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Restart) if state.status == GameStatus::GameOver => {
                    restart(state);
                    keys.clear();
                }
                Some(Command::TogglePause) => toggle_pause(state),
                Some(Command::Restart) | None => {}
            }
        }

        for event in tick(state, keys.held(frame), &mut rng) {
            announce(out, event)?;
        }

        let (cols, rows) = terminal::size()?;
        surface.begin_frame(cols, rows);
        render(state, &mut surface);
        surface.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    // Misconfiguration is fatal and reported before touching the terminal.
    let config = load_config()?;
    let mut state = new_game(config)?;
    log::info!(
        "Starting: {}x{} playfield, {} themes",
        state.width(),
        state.height(),
        state.config.themes.len()
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("Exiting (high score {})", state.high_score);
    result?;
    Ok(())
}
