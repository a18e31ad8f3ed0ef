#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! Facelet model and quarter-turn engine for the 3x3x3 cube.
//!
//! A [`CubeState`] is an immutable value made of six [`FaceGrid`]s. Every
//! operation returns a new state, so callers are free to keep old states
//! around as history.

mod color;
mod engine;
mod grid;
mod moves;
mod scramble;
mod session;
mod state;

pub use color::{Color, Face};
pub use grid::{Direction, FaceGrid, Strip};
pub use moves::{Move, MoveParseError, MoveSequence, parse_sequence};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, random_move, random_move_with, scramble, scramble_with};
pub use session::Session;
pub use state::{CubeState, MalformedStateError};
