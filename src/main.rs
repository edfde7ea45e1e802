//! Neon Runner entry point
//!
//! Owns everything the simulation deliberately doesn't: terminal setup,
//! input sampling, the fixed-rate frame clock, rendering, and high-score
//! persistence. The sim is driven once per frame through [`tick`].

mod display;

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use neon_runner::consts::TICK_RATE;
use neon_runner::sim::{GameState, TickInput, TickOutcome, tick};
use neon_runner::{HighScoreStore, Tuning};

/// One simulation tick per frame
const FRAME: Duration = Duration::from_micros(1_000_000 / TICK_RATE as u64);

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate keeps refreshing the timestamp while the key is
/// physically down.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: a `key_frame` map records the frame of the last press/repeat
/// event per key; per-frame freshness checks turn that into held-state
/// snapshots. Jump is the rising edge of held (a fresh press), slide is the
/// plain held state, and start/pause/restart are one-shot events the sim
/// ignores in the wrong phase.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let store = HighScoreStore::new();
    let mut state = GameState::new(time_seed(), Tuning::default());
    state.high_score = store.load();
    let mut saved_high = state.high_score;

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut jump_was_held = false;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut input = TickInput::default();
        let mut quit = false;

        // Drain all pending input events (non-blocking)
        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => quit = true,
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            quit = true;
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => input.pause = true,
                        KeyCode::Char('r') | KeyCode::Char('R') => input.restart = true,
                        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => input.start = true,
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so the key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // Held snapshots for this tick
        let jump_held = is_held(&key_frame, &KeyCode::Char(' '), frame)
            || is_held(&key_frame, &KeyCode::Up, frame);
        input.jump = jump_held && !jump_was_held;
        jump_was_held = jump_held;
        input.slide = is_held(&key_frame, &KeyCode::Down, frame)
            || is_held(&key_frame, &KeyCode::Char('s'), frame)
            || is_held(&key_frame, &KeyCode::Char('S'), frame);

        let outcome = tick(&mut state, &input);
        if outcome == TickOutcome::Collided && state.high_score > saved_high {
            store.save(state.high_score);
            saved_high = state.high_score;
        }

        display::render(out, &state)?;

        // Quit exits after the current frame has rendered
        if quit {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Neon Runner starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads, sending them through a
    // channel so the game loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
