use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{Direction, Face};

/// A quarter turn of one face: `F`, `F'`, `B`, `B'`, and so on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move token")]
    Empty,
    #[error("Unknown face `{0}`, expected one of F B U D L R")]
    UnknownFace(char),
    #[error("Unknown move modifier `{0}`, only `'` is supported")]
    UnknownModifier(String),
}

impl Move {
    /// All twelve quarter turns.
    pub const ALL: [Self; 12] = {
        use Direction::*;
        use Face::*;
        let faces = [Front, Back, Right, Left, Up, Down];

        let mut out = [Move::new(Front, Clockwise); 12];
        let mut i = 0;
        while i < faces.len() {
            out[2 * i] = Move::new(faces[i], Clockwise);
            out[2 * i + 1] = Move::new(faces[i], CounterClockwise);
            i += 1;
        }
        out
    };

    pub const fn new(face: Face, direction: Direction) -> Self {
        Move { face, direction }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Move::new(self.face, self.direction.reversed())
    }

    /// A human readable description, e.g. "Front face clockwise".
    pub fn description(self) -> String {
        let direction = match self.direction {
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counter-clockwise",
        };
        format!("{} face {direction}", self.face.name())
    }

    /// Map a key press to a move. Lowercase face letters turn clockwise and
    /// uppercase (shifted) ones turn counter-clockwise.
    pub fn from_key(key: char) -> Option<Self> {
        let face = Face::from_letter(key.to_ascii_uppercase())?;
        let direction = if key.is_ascii_uppercase() {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        };
        Some(Move::new(face, direction))
    }

    /// The key that [`Move::from_key`] maps to this move.
    pub fn key(self) -> char {
        match self.direction {
            Direction::Clockwise => self.face.letter().to_ascii_lowercase(),
            Direction::CounterClockwise => self.face.letter(),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars.next().ok_or(MoveParseError::Empty)?;
        let face = Face::from_letter(letter).ok_or(MoveParseError::UnknownFace(letter))?;

        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" | "′" | "’" => Direction::CounterClockwise,
            modifier => return Err(MoveParseError::UnknownModifier(modifier.to_owned())),
        };

        Ok(Move::new(face, direction))
    }
}

/// Parse a whitespace separated list of moves such as `"R U R' U'"`.
///
/// # Errors
///
/// If any token is not one of the twelve moves. Nothing is returned for the
/// valid tokens in that case.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, MoveParseError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Displays a list of moves separated by spaces.
pub struct MoveSequence<'a>(pub &'a [Move]);

impl Display for MoveSequence<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_moves_are_distinct() {
        assert!(Move::ALL.iter().all_unique());
        assert_eq!(
            MoveSequence(&Move::ALL).to_string(),
            "F F' B B' R R' L L' U U' D D'"
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for move_ in Move::ALL {
            assert_eq!(move_.to_string().parse::<Move>(), Ok(move_));
        }
        assert_eq!(
            "R′".parse::<Move>(),
            Ok(Move::new(Face::Right, Direction::CounterClockwise))
        );
        assert_eq!(
            "U’".parse::<Move>(),
            Ok(Move::new(Face::Up, Direction::CounterClockwise))
        );
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        assert_eq!("".parse::<Move>(), Err(MoveParseError::Empty));
        assert_eq!("X".parse::<Move>(), Err(MoveParseError::UnknownFace('X')));
        assert_eq!("f".parse::<Move>(), Err(MoveParseError::UnknownFace('f')));
        assert_eq!(
            "R2".parse::<Move>(),
            Err(MoveParseError::UnknownModifier("2".to_owned()))
        );
        assert_eq!(
            parse_sequence("R U X"),
            Err(MoveParseError::UnknownFace('X'))
        );
    }

    #[test]
    fn test_parse_sequence() {
        let moves = parse_sequence("  R U\tR' U' ").unwrap();
        assert_eq!(MoveSequence(&moves).to_string(), "R U R' U'");
        assert_eq!(parse_sequence(""), Ok(vec![]));
    }

    #[test]
    fn test_inverse() {
        for move_ in Move::ALL {
            assert_ne!(move_.inverse(), move_);
            assert_eq!(move_.inverse().inverse(), move_);
            assert_eq!(move_.inverse().face, move_.face);
        }
        assert_eq!("F".parse::<Move>().unwrap().inverse().to_string(), "F'");
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            Move::from_key('f'),
            Some(Move::new(Face::Front, Direction::Clockwise))
        );
        assert_eq!(
            Move::from_key('D'),
            Some(Move::new(Face::Down, Direction::CounterClockwise))
        );
        assert_eq!(Move::from_key('x'), None);
        assert_eq!(Move::from_key('1'), None);
        for move_ in Move::ALL {
            assert_eq!(Move::from_key(move_.key()), Some(move_));
        }
    }

    #[test]
    fn test_description() {
        assert_eq!(
            "L'".parse::<Move>().unwrap().description(),
            "Left face counter-clockwise"
        );
        assert_eq!(
            "U".parse::<Move>().unwrap().description(),
            "Up face clockwise"
        );
    }
}
