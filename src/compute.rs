/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG, so a seeded
/// RNG makes every transition deterministic for tests.

use std::time::Duration;

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Direction, Enemy, GameState, GameStatus, Grid, Player, Scoreboard};

/// Enemies spawn this far off the left edge.
const SPAWN_X: f32 = -100.0;

/// Horizontal overlap (in pixels) that counts as a collision.
const COLLISION_TOLERANCE: f32 = 40.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The classic 5x6 playfield: five 100px columns, six lanes, enemies on the
/// middle three, player starting bottom-center, goal at the top.
pub fn default_grid() -> Grid {
    Grid {
        columns: vec![0, 100, 200, 300, 400],
        rows: vec![-20, 60, 140, 220, 300, 380],
        enemy_rows: vec![1, 2, 3],
        start_col: 2,
        start_row: 5,
        winning_row: 0,
        cell_width: 100,
    }
}

/// Build the initial game state for a fresh round.
pub fn init_state(config: GameConfig) -> GameState {
    let grid = default_grid();
    let player = Player {
        col: grid.start_col,
        row: grid.start_row,
    };
    GameState {
        grid,
        player,
        enemies: Vec::new(),
        scoreboard: Scoreboard {
            score: 0,
            // A configured zero-length countdown clamps to one second so a
            // fresh game never starts already showing Time: 0
            timer: config.countdown_start.max(1),
        },
        status: GameStatus::Playing,
        pending_goal: None,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Move the player one grid cell, clamped at the edges (a press past the
/// boundary is a no-op).  Reaching the winning row either awards the point
/// immediately or arms the confirmation window, per config.
pub fn handle_input(state: &GameState, direction: Direction) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let Player { mut col, mut row } = state.player;
    match direction {
        Direction::Left => col = col.saturating_sub(1),
        Direction::Up => row = row.saturating_sub(1),
        Direction::Right => col = (col + 1).min(state.grid.columns.len() - 1),
        Direction::Down => row = (row + 1).min(state.grid.rows.len() - 1),
    }

    let moved = GameState {
        player: Player { col, row },
        ..state.clone()
    };
    evaluate_goal(&moved)
}

/// Award or arm the goal when the player stands on the winning row.
/// A window already armed is never re-armed, so one crossing scores once.
fn evaluate_goal(state: &GameState) -> GameState {
    if state.player.row != state.grid.winning_row || state.pending_goal.is_some() {
        return state.clone();
    }
    if state.config.goal_delay_ms == 0 {
        award_goal(state)
    } else {
        GameState {
            pending_goal: Some(state.config.goal_delay_secs()),
            ..state.clone()
        }
    }
}

/// Score the point and send the player back to the start cell.
fn award_goal(state: &GameState) -> GameState {
    GameState {
        scoreboard: state.scoreboard.increase(),
        player: start_player(&state.grid),
        pending_goal: None,
        ..state.clone()
    }
}

fn start_player(grid: &Grid) -> Player {
    Player {
        col: grid.start_col,
        row: grid.start_row,
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Create one enemy on a uniformly random enemy row, off-screen left, with a
/// speed drawn from the configured range.
pub fn spawn_enemy(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let row = state.grid.enemy_rows[rng.gen_range(0..state.grid.enemy_rows.len())];
    let (min_speed, max_speed) = state.config.enemy_speed;
    // Degenerate configured ranges (min >= max) collapse to a fixed value
    // rather than panicking mid-game
    let speed = if min_speed < max_speed {
        rng.gen_range(min_speed..max_speed)
    } else {
        min_speed
    };
    let enemy = Enemy {
        x: SPAWN_X,
        y: state.grid.rows[row],
        speed,
    };
    let mut enemies = state.enemies.clone();
    enemies.push(enemy);
    GameState {
        enemies,
        ..state.clone()
    }
}

/// Pick the delay until the next spawn, uniform over the configured range.
/// A range with `min >= max` is treated as a fixed interval.
pub fn spawn_interval(config: &GameConfig, rng: &mut impl Rng) -> Duration {
    let (min_ms, max_ms) = config.spawn_interval_ms;
    let ms = if min_ms < max_ms {
        rng.gen_range(min_ms..max_ms)
    } else {
        min_ms
    };
    Duration::from_millis(ms)
}

// ── Per-frame tick (pure) ────────────────────────────────────────────────────

/// Advance the simulation by one frame of `dt` seconds: move every enemy,
/// drop the ones that left the playfield, resolve collisions against the
/// player, and drain the goal-confirmation window.
pub fn tick(state: &GameState, dt: f32) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    // ── 1. Move enemies; purge the ones past the right edge ─────────────────
    let width = state.grid.width() as f32;
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .filter_map(|e| {
            let new_x = e.x + e.speed * dt;
            if new_x > width {
                None
            } else {
                Some(Enemy { x: new_x, ..*e })
            }
        })
        .collect();

    // ── 2. Collision: enemy ↔ player ─────────────────────────────────────────
    let (px, py) = state.player_pixel();
    let hit = enemies
        .iter()
        .any(|e| e.y == py && (e.x - px as f32).abs() < COLLISION_TOLERANCE);

    let (scoreboard, player, pending_goal) = if hit {
        // A hit also cancels any armed goal window, so a crossing followed by
        // a collision can never double-process.
        (
            state.scoreboard.decrease(),
            start_player(&state.grid),
            None,
        )
    } else {
        (
            state.scoreboard.clone(),
            state.player.clone(),
            state.pending_goal,
        )
    };

    // ── 3. Drain the goal-confirmation window ────────────────────────────────
    let ticked = GameState {
        enemies,
        scoreboard,
        player,
        pending_goal,
        ..state.clone()
    };
    match ticked.pending_goal {
        Some(remaining) => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                award_goal(&ticked)
            } else {
                GameState {
                    pending_goal: Some(remaining),
                    ..ticked
                }
            }
        }
        None => ticked,
    }
}

// ── Countdown (one call per wall-clock second) ───────────────────────────────

/// Decrement the countdown by one second; hitting zero is the terminal
/// transition to `GameOver`.  Further calls are no-ops, so the timer can
/// never go negative and a finished game is never mutated again.
pub fn countdown_tick(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let timer = state.scoreboard.timer.saturating_sub(1);
    GameState {
        scoreboard: Scoreboard {
            timer,
            ..state.scoreboard
        },
        status: if timer == 0 {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        },
        ..state.clone()
    }
}
