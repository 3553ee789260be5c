/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  The pixel-based playfield is mapped to
/// character cells at 10 px per column, one terminal row per lane.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{Enemy, GameState, GameStatus};
use crate::storage::HighScoreReport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_TIMER: Color = Color::Cyan;
const C_HUD_TIMER_LOW: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_GOAL: Color = Color::DarkCyan;
const C_ROAD: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Horizontal pixels represented by one terminal column.
const PX_PER_COL: i32 = 10;
/// Left edge of the playfield border.
const X0: u16 = 2;
/// Terminal row of the HUD.
const HUD_ROW: u16 = 0;
/// Terminal row of the top border; lanes start one below.
const PLAY_TOP: u16 = 1;

fn interior_width(state: &GameState) -> i32 {
    state.grid.width() / PX_PER_COL
}

/// Terminal row of lane `index`.
fn lane_row(index: usize) -> u16 {
    PLAY_TOP + 1 + index as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `high` is only present once the game is over.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    high: Option<&HighScoreReport>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state)?;
    draw_lanes(out, state)?;

    for enemy in &state.enemies {
        draw_enemy(out, state, enemy)?;
    }
    draw_player(out, state)?;

    draw_hud(out, state)?;
    draw_controls_hint(out, state)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, high)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, lane_row(state.grid.rows.len()) + 2))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = interior_width(state) as usize;
    let lanes = state.grid.rows.len();

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(X0, PLAY_TOP))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    for lane in 0..lanes {
        let row = lane_row(lane);
        out.queue(cursor::MoveTo(X0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(X0 + 1 + w as u16, row))?;
        out.queue(Print("│"))?;
    }

    out.queue(cursor::MoveTo(X0, lane_row(lanes)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    Ok(())
}

// ── Lane backgrounds ──────────────────────────────────────────────────────────

fn draw_lanes<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = interior_width(state) as usize;

    // Winning lane reads as water; enemy lanes as road
    out.queue(cursor::MoveTo(X0 + 1, lane_row(state.grid.winning_row)))?;
    out.queue(style::SetForegroundColor(C_GOAL))?;
    out.queue(Print("~".repeat(w)))?;

    out.queue(style::SetForegroundColor(C_ROAD))?;
    for &lane in &state.grid.enemy_rows {
        out.queue(cursor::MoveTo(X0 + 1, lane_row(lane)))?;
        out.queue(Print("‧".repeat(w)))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = interior_width(state) as u16;

    // Score — left
    out.queue(cursor::MoveTo(X0, HUD_ROW))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.scoreboard.score)))?;

    // Countdown — right, red for the last ten seconds
    let timer_text = format!("Time: {:>3}", state.scoreboard.timer);
    let color = if state.scoreboard.timer <= 10 {
        C_HUD_TIMER_LOW
    } else {
        C_HUD_TIMER
    };
    let rx = X0 + 2 + w - timer_text.chars().count() as u16;
    out.queue(cursor::MoveTo(rx, HUD_ROW))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(&timer_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (px, _) = state.player_pixel();
    let col = X0 as i32 + 1 + px / PX_PER_COL;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col as u16, lane_row(state.player.row)))?;
    out.queue(Print(" @ "))?;
    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    state: &GameState,
    enemy: &Enemy,
) -> std::io::Result<()> {
    // Off-screen spawns stay invisible until they enter the playfield
    let Some(lane) = state.grid.rows.iter().position(|&r| r == enemy.y) else {
        return Ok(());
    };
    let sprite = "<##>";
    let w = interior_width(state);
    let start = enemy.x as i32 / PX_PER_COL;

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for (i, ch) in sprite.chars().enumerate() {
        let col = start + i as i32;
        if col < 0 || col >= w {
            continue;
        }
        out.queue(cursor::MoveTo(X0 + 1 + col as u16, lane_row(lane)))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

// ── Controls hint (below the playfield) ───────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(X0, lane_row(state.grid.rows.len()) + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ → ↓ : Move   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    high: Option<&HighScoreReport>,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.scoreboard.score);
    let high_line = match high {
        Some(h) if h.new_record => "★ New High Score! ★".to_string(),
        Some(h) => format!("Best Score: {}", h.best),
        None => String::new(),
    };
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    TIME'S  UP    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        (&high_line, Color::Cyan),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = X0 + 1 + interior_width(state) as u16 / 2;
    let start_row = PLAY_TOP + 1;

    for (i, (msg, color)) in lines.iter().enumerate() {
        if msg.is_empty() {
            continue;
        }
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
