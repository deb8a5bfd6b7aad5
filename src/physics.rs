//! Ball movement, wall and paddle bounces, and the win check.
//!
//! Positions are always moved first; the collision tests then look one tick
//! ahead from the moved position and only flip velocity signs. A bounce
//! therefore takes effect on the following tick, and the ball is drawn inside
//! the wall or paddle column for one frame.

use std::fmt;

use log::{debug, trace};

use crate::{
    object::GameObject,
    state::{Board, GameState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

pub fn advance<'a>(objects: impl IntoIterator<Item = &'a mut GameObject>) {
    for object in objects {
        object.row += object.vel_row;
        object.col += object.vel_col;
    }
}

pub fn collide_with_wall(ball: &GameObject, board: Board) -> bool {
    let next_row = ball.row + ball.vel_row;
    next_row < 0 || next_row >= board.height
}

pub fn collide_with_paddle(ball: &GameObject, paddle: &GameObject) -> bool {
    let next_col = ball.col + ball.vel_col;
    let crosses_column = if ball.col < paddle.col {
        next_col >= paddle.col
    } else {
        next_col <= paddle.col
    };

    crosses_column && ball.row >= paddle.row && ball.row < paddle.row + paddle.height()
}

/// One physics step: move everything, then reflect the ball for next tick.
pub fn step(state: &mut GameState) {
    advance(state.objects_mut());

    let ball = &state.ball;
    let wall = collide_with_wall(ball, state.board);
    let paddle =
        collide_with_paddle(ball, &state.player1) || collide_with_paddle(ball, &state.player2);

    if wall {
        state.ball.vel_row = -state.ball.vel_row;
        debug!("ball bounced off wall at row {}", state.ball.row);
    }
    if paddle {
        state.ball.vel_col = -state.ball.vel_col;
        debug!(
            "ball bounced off paddle at ({}, {})",
            state.ball.row, state.ball.col
        );
    }

    trace!(
        "ball at ({}, {}) moving ({}, {})",
        state.ball.row,
        state.ball.col,
        state.ball.vel_row,
        state.ball.vel_col
    );
}

/// `None` while the ball is still between the two edges.
pub fn winner(state: &GameState) -> Option<Player> {
    if state.ball.col < 0 {
        Some(Player::Two)
    } else if state.ball.col >= state.board.width {
        Some(Player::One)
    } else {
        None
    }
}

pub fn is_game_over(state: &GameState) -> bool {
    winner(state).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: Board = Board {
        width: 80,
        height: 24,
    };

    fn state_80x24() -> GameState {
        GameState::new(BOARD, 4, (1, 2))
    }

    #[test]
    fn advance_leaves_stationary_objects_alone() {
        let mut paddle = GameObject::paddle(7, 3, 4);
        for _ in 0..10 {
            advance([&mut paddle]);
        }
        assert_eq!((paddle.row, paddle.col), (7, 3));
    }

    #[test]
    fn advance_moves_by_velocity() {
        let mut ball = GameObject::ball(5, 5, (-1, 3));
        advance([&mut ball]);
        assert_eq!((ball.row, ball.col), (4, 8));
    }

    #[test]
    fn wall_hit_when_leaving_top_or_bottom() {
        let above = GameObject::ball(-1, 10, (-1, 2));
        assert!(collide_with_wall(&above, BOARD));

        let below = GameObject::ball(24, 10, (1, 2));
        assert!(collide_with_wall(&below, BOARD));

        let at_edge = GameObject::ball(23, 10, (1, 2));
        assert!(collide_with_wall(&at_edge, BOARD));
    }

    #[test]
    fn no_wall_hit_inside_moving_inward() {
        let ball = GameObject::ball(1, 10, (1, 2));
        assert!(!collide_with_wall(&ball, BOARD));

        let ball = GameObject::ball(22, 10, (-1, 2));
        assert!(!collide_with_wall(&ball, BOARD));
    }

    #[test]
    fn paddle_hit_from_the_left_uses_projected_column() {
        let paddle = GameObject::paddle(10, 79, 4);

        let short = GameObject::ball(11, 76, (0, 2));
        assert!(!collide_with_paddle(&short, &paddle));

        let reaches = GameObject::ball(11, 77, (0, 2));
        assert!(collide_with_paddle(&reaches, &paddle));

        let crosses = GameObject::ball(11, 78, (0, 2));
        assert!(collide_with_paddle(&crosses, &paddle));
    }

    #[test]
    fn paddle_hit_from_the_right_uses_projected_column() {
        let paddle = GameObject::paddle(10, 0, 4);

        let short = GameObject::ball(12, 3, (0, -2));
        assert!(!collide_with_paddle(&short, &paddle));

        let reaches = GameObject::ball(12, 2, (0, -2));
        assert!(collide_with_paddle(&reaches, &paddle));

        let crosses = GameObject::ball(12, 1, (0, -2));
        assert!(collide_with_paddle(&crosses, &paddle));
    }

    #[test]
    fn paddle_miss_outside_its_rows() {
        let paddle = GameObject::paddle(10, 79, 4);

        let above = GameObject::ball(9, 78, (0, 2));
        assert!(!collide_with_paddle(&above, &paddle));

        let below = GameObject::ball(14, 78, (0, 2));
        assert!(!collide_with_paddle(&below, &paddle));

        let last_row = GameObject::ball(13, 78, (0, 2));
        assert!(collide_with_paddle(&last_row, &paddle));
    }

    #[test]
    fn step_moves_first_and_reflects_for_next_tick() {
        let mut state = state_80x24();
        state.ball = GameObject::ball(22, 40, (1, 2));

        step(&mut state);
        assert_eq!((state.ball.row, state.ball.col), (23, 42));
        assert_eq!(state.ball.vel_row, -1);

        step(&mut state);
        assert_eq!((state.ball.row, state.ball.col), (22, 44));
    }

    #[test]
    fn step_keeps_speed_magnitude() {
        let mut state = state_80x24();
        for _ in 0..19 {
            step(&mut state);
            assert_eq!(state.ball.vel_row.abs(), 1);
            assert_eq!(state.ball.vel_col.abs(), 2);
        }
    }

    #[test]
    fn step_flips_column_velocity_once_for_paddle() {
        let mut state = state_80x24();
        state.player2.row = 12;
        state.ball = GameObject::ball(14, 76, (1, 2));

        step(&mut state);
        assert_eq!((state.ball.row, state.ball.col), (15, 78));
        assert_eq!(state.ball.vel_col, -2);

        step(&mut state);
        assert_eq!(state.ball.col, 76);
    }

    #[test]
    fn winner_by_ball_column() {
        let mut state = state_80x24();

        for col in [0, 40, 79] {
            state.ball.col = col;
            assert_eq!(winner(&state), None);
            assert!(!is_game_over(&state));
        }

        state.ball.col = -1;
        assert_eq!(winner(&state), Some(Player::Two));

        state.ball.col = 80;
        assert_eq!(winner(&state), Some(Player::One));
        assert!(is_game_over(&state));
    }

    #[test]
    fn player_names() {
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Player::Two.to_string(), "Player 2");
    }
}
