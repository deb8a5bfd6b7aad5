//! Two-player Pong on a terminal character grid.
//!
//! [`game::Game`] owns the board and drives it at a fixed tick, pulling key
//! presses from an [`input::InputSource`] and drawing to a
//! [`surface::Surface`].

pub mod config;
pub mod game;
pub mod helpers;
pub mod input;
pub mod object;
pub mod physics;
pub mod state;
pub mod surface;
