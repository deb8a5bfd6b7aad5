use log::debug;

use crate::{input::InputAction, object::GameObject};

/// Playing field dimensions, taken from the display once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }
}

/// What the loop should do after an input action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub player1: GameObject,
    pub player2: GameObject,
    pub ball: GameObject,
}

impl GameState {
    /// Paddles centred vertically on each edge, ball in the middle of the board.
    pub fn new(board: Board, paddle_height: i32, ball_velocity: (i32, i32)) -> Self {
        let paddle_start = board.height / 2 - paddle_height / 2;

        Self {
            board,
            player1: GameObject::paddle(paddle_start, 0, paddle_height),
            player2: GameObject::paddle(paddle_start, board.width - 1, paddle_height),
            ball: GameObject::ball(board.height / 2, board.width / 2, ball_velocity),
        }
    }

    /// Draw order: left paddle, right paddle, ball.
    pub fn objects(&self) -> [&GameObject; 3] {
        [&self.player1, &self.player2, &self.ball]
    }

    pub fn objects_mut(&mut self) -> [&mut GameObject; 3] {
        [&mut self.player1, &mut self.player2, &mut self.ball]
    }

    pub fn apply_input(&mut self, action: Option<InputAction>) -> Control {
        let Some(action) = action else {
            return Control::Continue;
        };

        match action {
            InputAction::Quit => return Control::Quit,
            InputAction::Player1Up => self.move_paddle(Side::Left, -1),
            InputAction::Player1Down => self.move_paddle(Side::Left, 1),
            InputAction::Player2Up => self.move_paddle(Side::Right, -1),
            InputAction::Player2Down => self.move_paddle(Side::Right, 1),
        }
        Control::Continue
    }

    fn move_paddle(&mut self, side: Side, step: i32) {
        let board_height = self.board.height;
        let paddle = match side {
            Side::Left => &mut self.player1,
            Side::Right => &mut self.player2,
        };

        let allowed = if step < 0 {
            paddle.row > 0
        } else {
            paddle.row + paddle.height() < board_height
        };

        if allowed {
            paddle.row += step;
            debug!("{:?} paddle moved to row {}", side, paddle.row);
        }
    }
}
