use log::{debug, info};

use crate::{CubeState, Move, MoveParseError, parse_sequence, scramble};

/// The cube a player is currently working on, along with what they did to
/// it.
///
/// The engine itself never looks at a session; it only sees the
/// [`CubeState`] values passed through it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: CubeState,
    history: Vec<Move>,
    move_count: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Every move since the last reset, including the scramble moves of the
    /// last shuffle.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Moves performed by the player. Scramble moves are not counted.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Perform one move and return the new state.
    pub fn perform(&mut self, move_: Move) -> &CubeState {
        let was_solved = self.state.is_solved();
        self.state = self.state.apply_move(move_);
        self.history.push(move_);
        self.move_count += 1;
        debug!("Performed {move_}, {} moves so far", self.move_count);

        if !was_solved && self.state.is_solved() {
            info!("Solved in {} moves", self.move_count);
        }

        &self.state
    }

    /// Parse and perform a whitespace separated move sequence.
    ///
    /// # Errors
    ///
    /// If any token is invalid. No move is performed in that case.
    pub fn perform_token(&mut self, token: &str) -> Result<&CubeState, MoveParseError> {
        for move_ in parse_sequence(token)? {
            self.perform(move_);
        }
        Ok(&self.state)
    }

    /// Go back to a solved cube with an empty history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the cube with a fresh scramble of `length` moves. The history is
    /// replaced by the scramble and the move count starts over.
    pub fn shuffle(&mut self, length: usize) -> &[Move] {
        let (state, moves) = scramble(length);
        self.state = state;
        self.history = moves;
        self.move_count = 0;
        &self.history
    }
}
