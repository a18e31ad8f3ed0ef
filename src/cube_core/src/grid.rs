//! The 3x3 grid of facelets belonging to one face.
//!
//! Every grid is read as seen from outside the cube, looking at the
//! center, with row 0 at the top and column 0 at the left:
//!
//! | Face  | Row 0 borders | Column 0 borders |
//! |-------|---------------|------------------|
//! | Front | Up            | Left             |
//! | Right | Up            | Front            |
//! | Back  | Up            | Right            |
//! | Left  | Up            | Back             |
//! | Up    | Back          | Left             |
//! | Down  | Front         | Left             |
//!
//! With sub-cube coordinates `x, y, z` in `0..3` (x towards Right, y towards
//! Up, z towards Front) the facelet of each face is `front[2 - y][x]`,
//! `back[2 - y][2 - x]`, `right[2 - y][2 - z]`, `left[2 - y][z]`,
//! `up[z][x]` and `down[2 - z][x]`.

use std::ops::Index;

use crate::Color;

/// The direction of a quarter turn, as seen from outside the turning face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A line of three facelets on a grid. Rows are indexed by column and columns
/// are indexed by row.
///
/// The contained index must be below 3.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strip {
    Row(usize),
    Column(usize),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid([[Color; 3]; 3]);

impl FaceGrid {
    pub const fn new(rows: [[Color; 3]; 3]) -> Self {
        FaceGrid(rows)
    }

    /// A grid with all nine facelets set to `color`.
    pub const fn filled(color: Color) -> Self {
        FaceGrid([[color; 3]; 3])
    }

    pub fn rows(&self) -> &[[Color; 3]; 3] {
        &self.0
    }

    /// Iterate over the facelets in row-major order.
    pub fn facelets(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Rotate the grid a quarter turn.
    ///
    /// Clockwise, the facelet at `(i, j)` ends up at `(j, 2 - i)`;
    /// counter-clockwise it ends up at `(2 - j, i)`.
    #[must_use]
    pub fn rotated(&self, direction: Direction) -> Self {
        let mut out = *self;
        for (i, row) in self.0.iter().enumerate() {
            for (j, &color) in row.iter().enumerate() {
                match direction {
                    Direction::Clockwise => out.0[j][2 - i] = color,
                    Direction::CounterClockwise => out.0[2 - j][i] = color,
                }
            }
        }
        out
    }

    /// Whether all nine facelets equal the one at `(0, 0)`.
    pub fn is_monochrome(&self) -> bool {
        let first = self.0[0][0];
        self.facelets().all(|color| color == first)
    }

    /// Read the three facelets of `strip` in its native index order.
    pub fn strip(&self, strip: Strip) -> [Color; 3] {
        match strip {
            Strip::Row(row) => self.0[row],
            Strip::Column(col) => [self.0[0][col], self.0[1][col], self.0[2][col]],
        }
    }

    pub(crate) fn set_strip(&mut self, strip: Strip, values: [Color; 3]) {
        match strip {
            Strip::Row(row) => self.0[row] = values,
            Strip::Column(col) => {
                for (row, value) in values.into_iter().enumerate() {
                    self.0[row][col] = value;
                }
            }
        }
    }
}

impl Index<(usize, usize)> for FaceGrid {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}
