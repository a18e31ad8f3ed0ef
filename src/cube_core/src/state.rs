use std::{fmt::Display, ops::Index, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{Color, Face, FaceGrid};

/// The number of facelets of each color on any reachable cube.
const FACELETS_PER_COLOR: usize = 9;

/// The full facelet assignment of a cube: one grid per face.
///
/// This is a plain value. Moves return a new state and never modify the one
/// they were given.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    grids: [FaceGrid; 6],
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MalformedStateError {
    #[error("Expected {expected} facelets but got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Unknown facelet color `{0}`, expected one of R O W Y G B")]
    UnknownColor(char),
    #[error("Expected 9 {color} facelets but got {count}")]
    WrongColorCount { color: Color, count: usize },
}

impl CubeState {
    /// The canonical solved cube.
    pub fn solved() -> Self {
        CubeState {
            grids: Face::ALL.map(|face| FaceGrid::filled(face.solved_color())),
        }
    }

    /// Build a state from grids given in [`Face::ALL`] order.
    ///
    /// # Errors
    ///
    /// If any color does not appear exactly nine times.
    pub fn from_grids(grids: [FaceGrid; 6]) -> Result<Self, MalformedStateError> {
        let state = CubeState { grids };
        let counts = state.color_counts();
        for color in Color::ALL {
            let count = counts[color as usize];
            if count != FACELETS_PER_COLOR {
                return Err(MalformedStateError::WrongColorCount { color, count });
            }
        }
        Ok(state)
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.grids[face as usize]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.grids[face as usize]
    }

    /// How many facelets of each color there are, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.grids.iter().flat_map(FaceGrid::facelets) {
            counts[color as usize] += 1;
        }
        counts
    }

    /// Whether every face is a single color. The orientation of the whole
    /// cube does not matter.
    pub fn is_solved(&self) -> bool {
        self.grids.iter().all(FaceGrid::is_monochrome)
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

impl Index<Face> for CubeState {
    type Output = FaceGrid;

    fn index(&self, index: Face) -> &Self::Output {
        self.face(index)
    }
}

/// Parses 54 color letters, nine per face in [`Face::ALL`] order and
/// row-major within a face. Whitespace is ignored.
impl FromStr for CubeState {
    type Err = MalformedStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors: Vec<Color> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Color::from_letter(c).ok_or(MalformedStateError::UnknownColor(c)))
            .collect::<Result<_, _>>()?;

        if colors.len() != Face::ALL.len() * 9 {
            return Err(MalformedStateError::WrongLength {
                expected: Face::ALL.len() * 9,
                actual: colors.len(),
            });
        }

        let mut grids = [FaceGrid::filled(Color::Red); 6];
        for (grid, facelets) in grids.iter_mut().zip(colors.chunks_exact(9)) {
            let mut rows = [[Color::Red; 3]; 3];
            for (row, three) in rows.iter_mut().zip(facelets.chunks_exact(3)) {
                row.copy_from_slice(three);
            }
            *grid = FaceGrid::new(rows);
        }

        CubeState::from_grids(grids)
    }
}

impl Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces = self
            .grids
            .iter()
            .map(|grid| grid.facelets().map(Color::letter).collect::<String>())
            .join(" ");
        write!(f, "{faces}")
    }
}
