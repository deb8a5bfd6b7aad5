use std::thread::sleep;

use anyhow::Result;
use log::{debug, info};

use crate::{
    config::Config,
    helpers::{draw_object, print_centered, print_string},
    input::InputSource,
    physics::{self, Player},
    state::{Board, Control, GameState},
    surface::Surface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Running,
    GameOver(Player),
    Terminated,
}

/// How a finished game ended. Both are a clean exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Player),
    Quit,
}

pub struct Game<S: Surface, I: InputSource> {
    config: Config,
    state: GameState,
    surface: S,
    input: I,
    phase: Phase,
    ticks: u64,
    debug_line: String,
}

impl<S: Surface, I: InputSource> Game<S, I> {
    /// Lay out paddles and ball on a board the size of `surface`.
    pub fn new(config: Config, surface: S, input: I) -> Self {
        let (width, height) = surface.size();
        let board = Board::new(width, height);
        let state = GameState::new(board, config.paddle_height, config.ball_velocity);
        info!("new game on a {}x{} board", board.width, board.height);

        Self {
            config,
            state,
            surface,
            input,
            phase: Phase::Init,
            ticks: 0,
            debug_line: String::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Text drawn at the top-left corner on every frame.
    pub fn set_debug_line(&mut self, line: impl Into<String>) {
        self.debug_line = line.into();
    }

    /// Play until someone wins or quits, then release the surface.
    ///
    /// The surface is shut down on every path out of here, errors included.
    pub fn run(&mut self) -> Result<Outcome> {
        let result = self.play();
        let shutdown = self.surface.shutdown();
        self.phase = Phase::Terminated;

        let outcome = result?;
        shutdown?;
        Ok(outcome)
    }

    fn play(&mut self) -> Result<Outcome> {
        self.phase = Phase::Running;

        let outcome = loop {
            if let Some(winner) = physics::winner(&self.state) {
                break Outcome::Won(winner);
            }
            if self.tick()? == Control::Quit {
                break Outcome::Quit;
            }
            sleep(self.config.tick);
        };

        match outcome {
            Outcome::Won(winner) => {
                info!("{} wins after {} ticks", winner, self.ticks);
                self.phase = Phase::GameOver(winner);
                self.show_game_over(winner)?;
                sleep(self.config.game_over_hold);
            }
            Outcome::Quit => info!("quit after {} ticks", self.ticks),
        }

        Ok(outcome)
    }

    /// One frame: at most one input, a physics step, and a redraw.
    ///
    /// Returns `Control::Quit` without touching the board if the input was a
    /// quit request.
    pub fn tick(&mut self) -> Result<Control> {
        let action = self.input.poll();
        if let Some(action) = action {
            debug!("tick {}: {:?}", self.ticks, action);
        }
        if self.state.apply_input(action) == Control::Quit {
            return Ok(Control::Quit);
        }

        physics::step(&mut self.state);
        self.ticks += 1;

        if self.config.debug_overlay {
            let ball = &self.state.ball;
            self.debug_line = format!(
                "tick {} ball ({}, {}) vel ({}, {})",
                self.ticks, ball.row, ball.col, ball.vel_row, ball.vel_col
            );
        }

        self.render()?;
        Ok(Control::Continue)
    }

    fn render(&mut self) -> Result<()> {
        self.surface.clear();
        print_string(&mut self.surface, 0, 0, &self.debug_line);
        for object in self.state.objects() {
            draw_object(&mut self.surface, object);
        }
        self.surface.flush()
    }

    fn show_game_over(&mut self, winner: Player) -> Result<()> {
        let Board { width, height } = self.state.board;
        print_centered(&mut self.surface, height / 2 - 1, width / 2, "Game Over!");
        print_centered(
            &mut self.surface,
            height / 2,
            width / 2,
            &format!("{} Wins!", winner),
        );
        self.surface.flush()
    }
}
