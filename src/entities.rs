/// All game entity types — pure data, no logic.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Fixed lane geometry in pixel coordinates.  Static for the game's lifetime:
/// built once at init and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Horizontal pixel position of each column.
    pub columns: Vec<i32>,
    /// Vertical pixel position of each row (lane).
    pub rows: Vec<i32>,
    /// Row indices enemies travel along (a subset of `rows`).
    pub enemy_rows: Vec<usize>,
    /// Player start cell.
    pub start_col: usize,
    pub start_row: usize,
    /// Reaching this row index scores a point and resets the player.
    pub winning_row: usize,
    /// Width of one lane cell in pixels.
    pub cell_width: i32,
}

impl Grid {
    /// Total playfield width in pixels; enemies past this are off-screen.
    pub fn width(&self) -> i32 {
        self.columns.len() as i32 * self.cell_width
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

/// A horizontally moving obstacle.  `x` is continuous so per-frame movement
/// scales with the elapsed-time delta; `y` is always one of the enemy-row
/// pixel values.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: i32,
    /// Pixels per second, randomized at spawn.
    pub speed: f32,
}

/// The grid-bound avatar.  Position is held as cell indices; the pixel
/// position is derived from the grid on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub col: usize,
    pub row: usize,
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    /// Seconds remaining until game over.
    pub timer: u32,
}

impl Scoreboard {
    pub fn increase(&self) -> Scoreboard {
        Scoreboard { score: self.score + 1, ..*self }
    }

    /// Score never goes negative — decreasing from 0 stays 0.
    pub fn decrease(&self) -> Scoreboard {
        Scoreboard { score: self.score.saturating_sub(1), ..*self }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    /// The active set: currently on-screen enemies.
    pub enemies: Vec<Enemy>,
    pub scoreboard: Scoreboard,
    pub status: GameStatus,
    /// Seconds left on the goal-confirmation window, when one is armed.
    /// `None` means no award is pending.
    pub pending_goal: Option<f32>,
    pub config: GameConfig,
}

impl GameState {
    /// Player pixel position derived from grid indices.
    pub fn player_pixel(&self) -> (i32, i32) {
        (self.grid.columns[self.player.col], self.grid.rows[self.player.row])
    }
}
