//! Quarter turns as data.
//!
//! Each face has one entry describing its clockwise turn as four strip
//! copies around its perimeter. The counter-clockwise turn runs the same
//! copies backwards, so only six cycles are spelled out.

use crate::{
    CubeState, Direction, Face, Move,
    Strip::{self, Column, Row},
};

/// Copy the strip `from` into the strip `to` of the next face along the
/// perimeter. When `reversed`, index `k` of `to` receives index `2 - k` of
/// `from`.
#[derive(Debug, Copy, Clone)]
struct StripCopy {
    from: (Face, Strip),
    to: (Face, Strip),
    reversed: bool,
}

const fn copy(from: (Face, Strip), to: (Face, Strip), reversed: bool) -> StripCopy {
    StripCopy { from, to, reversed }
}

/// The clockwise perimeter cycle of each face, indexed by `Face as usize`.
const CLOCKWISE_CYCLES: [[StripCopy; 4]; 6] = {
    use Face::*;

    let cycles = [
        (
            Front,
            [
                copy((Up, Row(2)), (Right, Column(0)), false),
                copy((Right, Column(0)), (Down, Row(0)), true),
                copy((Down, Row(0)), (Left, Column(2)), false),
                copy((Left, Column(2)), (Up, Row(2)), true),
            ],
        ),
        (
            Back,
            [
                copy((Up, Row(0)), (Left, Column(0)), true),
                copy((Left, Column(0)), (Down, Row(2)), false),
                copy((Down, Row(2)), (Right, Column(2)), true),
                copy((Right, Column(2)), (Up, Row(0)), false),
            ],
        ),
        (
            Up,
            [
                copy((Front, Row(0)), (Left, Row(0)), false),
                copy((Left, Row(0)), (Back, Row(0)), false),
                copy((Back, Row(0)), (Right, Row(0)), false),
                copy((Right, Row(0)), (Front, Row(0)), false),
            ],
        ),
        (
            Down,
            [
                copy((Front, Row(2)), (Right, Row(2)), false),
                copy((Right, Row(2)), (Back, Row(2)), false),
                copy((Back, Row(2)), (Left, Row(2)), false),
                copy((Left, Row(2)), (Front, Row(2)), false),
            ],
        ),
        (
            Left,
            [
                copy((Up, Column(0)), (Front, Column(0)), false),
                copy((Front, Column(0)), (Down, Column(0)), false),
                copy((Down, Column(0)), (Back, Column(2)), true),
                copy((Back, Column(2)), (Up, Column(0)), true),
            ],
        ),
        (
            Right,
            [
                copy((Front, Column(2)), (Up, Column(2)), false),
                copy((Up, Column(2)), (Back, Column(0)), true),
                copy((Back, Column(0)), (Down, Column(2)), true),
                copy((Down, Column(2)), (Front, Column(2)), false),
            ],
        ),
    ];

    let mut out = [cycles[0].1; 6];
    let mut i = 0;
    while i < cycles.len() {
        // Keep the table in `Face::ALL` order
        assert!(cycles[i].0 as usize == i);
        out[i] = cycles[i].1;
        i += 1;
    }
    out
};

impl Move {
    /// The four strip copies performed by this move.
    fn strip_copies(self) -> [StripCopy; 4] {
        let cycle = CLOCKWISE_CYCLES[self.face as usize];
        match self.direction {
            Direction::Clockwise => cycle,
            Direction::CounterClockwise => cycle.map(|StripCopy { from, to, reversed }| {
                StripCopy {
                    from: to,
                    to: from,
                    reversed,
                }
            }),
        }
    }
}

impl CubeState {
    /// Apply one quarter turn and return the resulting state.
    #[must_use]
    pub fn apply_move(&self, move_: Move) -> CubeState {
        let mut out = *self;

        *out.face_mut(move_.face) = self[move_.face].rotated(move_.direction);

        // Sources are always read from `self`, so no copy observes another
        // copy's write.
        for StripCopy { from, to, reversed } in move_.strip_copies() {
            let mut values = self[from.0].strip(from.1);
            if reversed {
                values.reverse();
            }
            out.face_mut(to.0).set_strip(to.1, values);
        }

        out
    }

    /// Apply `moves` in order.
    #[must_use]
    pub fn apply_moves<'a>(&self, moves: impl IntoIterator<Item = &'a Move>) -> CubeState {
        moves
            .into_iter()
            .fold(*self, |state, &move_| state.apply_move(move_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color::*, FaceGrid};

    #[test]
    fn test_cycles_touch_each_neighbor_once() {
        for face in Face::ALL {
            let cycle = CLOCKWISE_CYCLES[face as usize];
            for (i, strip_copy) in cycle.iter().enumerate() {
                assert_ne!(strip_copy.from.0, face);
                assert_ne!(strip_copy.to.0, face);
                // Each destination is the source of the next copy
                assert_eq!(strip_copy.to, cycle[(i + 1) % 4].from);
            }
            assert_eq!(cycle.iter().filter(|c| c.reversed).count() % 2, 0);
        }
    }

    #[test]
    fn test_front_turn_on_solved() {
        let solved = CubeState::solved();
        let turned = solved.apply_move("F".parse().unwrap());

        assert_eq!(turned[Face::Front], FaceGrid::filled(Red));
        assert_eq!(turned[Face::Back], FaceGrid::filled(Orange));
        assert_eq!(
            turned[Face::Up],
            FaceGrid::new([[White, White, White], [White, White, White], [Green, Green, Green]])
        );
        assert_eq!(
            turned[Face::Right],
            FaceGrid::new([[White, Blue, Blue], [White, Blue, Blue], [White, Blue, Blue]])
        );
        assert_eq!(
            turned[Face::Down],
            FaceGrid::new([[Blue, Blue, Blue], [Yellow, Yellow, Yellow], [Yellow, Yellow, Yellow]])
        );
        assert_eq!(
            turned[Face::Left],
            FaceGrid::new([[Green, Green, Yellow], [Green, Green, Yellow], [Green, Green, Yellow]])
        );

        // The input is left untouched
        assert!(solved.is_solved());
        assert!(!turned.is_solved());
    }

    #[test]
    fn test_front_turn_after_right_turn() {
        let after_r = CubeState::solved().apply_move("R".parse().unwrap());
        assert_eq!(
            after_r.to_string(),
            "RRYRRYRRY WOOWOOWOO WWRWWRWWR YYOYYOYYO GGGGGGGGG BBBBBBBBB"
        );

        let after_rf = after_r.apply_move("F".parse().unwrap());
        assert_eq!(
            after_rf.to_string(),
            "RRRRRRYYY WOOWOOWOO WWRWWRGGG BBBYYOYYO GGYGGYGGO WBBWBBRBB"
        );

        let undone = after_rf.apply_move("F'".parse().unwrap());
        assert_eq!(undone, after_r);
    }

    #[test]
    fn test_up_turn_moves_front_to_left() {
        let turned = CubeState::solved().apply_move("U".parse().unwrap());
        assert_eq!(turned[Face::Left].strip(Row(0)), [Red; 3]);
        assert_eq!(turned[Face::Back].strip(Row(0)), [Green; 3]);
        assert_eq!(turned[Face::Right].strip(Row(0)), [Orange; 3]);
        assert_eq!(turned[Face::Front].strip(Row(0)), [Blue; 3]);
    }
}
