use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use crossing_game::compute::{countdown_tick, handle_input, init_state, spawn_enemy, spawn_interval, tick};
use crossing_game::config::GameConfig;
use crossing_game::display;
use crossing_game::entities::{Direction, GameState, GameStatus};
use crossing_game::storage::{self, HighScoreReport};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS
const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Config file looked up in the working directory; absent → stock settings.
const CONFIG_FILE: &str = "crossing_game.ron";

fn key_direction(code: &KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: Option<u32>,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  ROAD  CROSSING  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if let Some(best) = high_score {
        let hs_str = format!("Best Score: {}", best);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    let lines: &[&str] = &[
        "Reach the water at the top to score a point.",
        "A bug running you over costs a point and sends",
        "you back to the start.  Score before time runs out!",
    ];
    for (i, line) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(line.chars().count() as u16 / 2),
            cy.saturating_sub(3) + i as u16,
        ))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(*line))?;
    }

    let hint = "ENTER : Start   ← ↑ → ↓ : Move   Q : Quit";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 2,
    ))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print(hint))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// All simulation time lives in this loop: the measured per-frame delta
/// drives enemy movement, while the spawn deadline and the one-second
/// countdown are wall-clock deadlines checked each frame.  Once the state
/// goes `GameOver` the deadlines are simply no longer consulted, so no
/// timer can ever touch a finished game.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();

    let mut next_spawn = Instant::now() + spawn_interval(&state.config, &mut rng);
    let mut next_countdown = Instant::now() + COUNTDOWN_TICK;
    let mut last_frame = Instant::now();
    let mut high_view: Option<HighScoreReport> = None;

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(true);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                KeyCode::Char('r') | KeyCode::Char('R')
                    if state.status == GameStatus::GameOver =>
                {
                    return Ok(false);
                }
                code => {
                    // Unrecognized keys are no-ops; handle_input ignores
                    // everything once the game is over
                    if let Some(direction) = key_direction(&code) {
                        *state = handle_input(state, direction);
                    }
                }
            }
        }

        if state.status == GameStatus::Playing {
            // Spawn deadline, self-rearming with a fresh random interval
            while frame_start >= next_spawn {
                *state = spawn_enemy(state, &mut rng);
                next_spawn += spawn_interval(&state.config, &mut rng);
            }

            // One-second countdown tick
            while frame_start >= next_countdown {
                *state = countdown_tick(state);
                next_countdown += COUNTDOWN_TICK;
            }

            *state = tick(state, dt);

            // Settle the high score exactly once, on the terminal transition
            if state.status == GameStatus::GameOver {
                high_view = Some(storage::settle_high_score(
                    &storage::default_path(),
                    state.scoreboard.score,
                ));
            }
        }

        display::render(out, state, high_view.as_ref())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE));

    loop {
        let high_score = storage::load_high_score(&storage::default_path());
        match show_menu(out, rx, high_score)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let mut state = init_state(config.clone());
                let quit = game_loop(out, &mut state, rx)?;
                if quit {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    Ok(())
}
