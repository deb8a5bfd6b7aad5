pub const PADDLE_GLYPH: char = '\u{2588}';
pub const BALL_GLYPH: char = '\u{25CF}';

/// Anything that sits on the board: the two paddles and the ball.
///
/// Rows grow downwards and columns grow to the right, both in grid cells.
/// Paddles keep a zero velocity and are moved directly by input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameObject {
    pub row: i32,
    pub col: i32,
    pub vel_row: i32,
    pub vel_col: i32,
    width: i32,
    height: i32,
    glyph: char,
}

impl GameObject {
    pub fn paddle(row: i32, col: i32, height: i32) -> Self {
        Self {
            row,
            col,
            vel_row: 0,
            vel_col: 0,
            width: 1,
            height: height.max(1),
            glyph: PADDLE_GLYPH,
        }
    }

    pub fn ball(row: i32, col: i32, velocity: (i32, i32)) -> Self {
        Self {
            row,
            col,
            vel_row: velocity.0,
            vel_col: velocity.1,
            width: 1,
            height: 1,
            glyph: BALL_GLYPH,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }
}
