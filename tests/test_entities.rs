use crossing_game::compute::{default_grid, init_state};
use crossing_game::config::GameConfig;
use crossing_game::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(Direction::Left, Direction::Left);
    assert_ne!(Direction::Left, Direction::Right);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);

    // Clone must produce an equal value
    let dir = Direction::Up;
    assert_eq!(dir, Direction::Up);
    assert_eq!(GameStatus::GameOver.clone(), GameStatus::GameOver);
}

#[test]
fn grid_width_from_columns() {
    let grid = default_grid();
    assert_eq!(grid.columns.len(), 5);
    assert_eq!(grid.cell_width, 100);
    assert_eq!(grid.width(), 500);
}

#[test]
fn grid_enemy_rows_are_valid_indices() {
    let grid = default_grid();
    for &row in &grid.enemy_rows {
        assert!(row < grid.rows.len());
        assert_ne!(row, grid.winning_row);
    }
}

#[test]
fn scoreboard_increase_and_decrease() {
    let sb = Scoreboard { score: 1, timer: 30 };
    assert_eq!(sb.increase().score, 2);
    assert_eq!(sb.decrease().score, 0);
    // Timer is untouched by score adjustments
    assert_eq!(sb.increase().timer, 30);
}

#[test]
fn scoreboard_decrease_floors_at_zero() {
    let sb = Scoreboard { score: 0, timer: 30 };
    assert_eq!(sb.decrease().score, 0);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(GameConfig::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.col = 0;
    cloned.scoreboard.score = 999;
    cloned.enemies.push(Enemy { x: 5.0, y: 60, speed: 250.0 });

    assert_eq!(original.player.col, 2);
    assert_eq!(original.scoreboard.score, 0);
    assert!(original.enemies.is_empty());
}

#[test]
fn player_pixel_follows_grid_indices() {
    let mut s = init_state(GameConfig::default());
    s.player = Player { col: 0, row: 2 };
    assert_eq!(s.player_pixel(), (0, 140));
    s.player = Player { col: 4, row: 0 };
    assert_eq!(s.player_pixel(), (400, -20));
}
