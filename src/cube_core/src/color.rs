use std::fmt::Display;

/// The color of a single facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Orange,
    White,
    Yellow,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [Red, Orange, White, Yellow, Green, Blue];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The single-letter symbol used in facelet strings.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_uppercase() {
            'R' => Color::Red,
            'O' => Color::Orange,
            'W' => Color::White,
            'Y' => Color::Yellow,
            'G' => Color::Green,
            'B' => Color::Blue,
            _ => return None,
        })
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the six faces of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Up,
    Down,
    Left,
    Right,
}

impl Face {
    /// Every face, in the order used for facelet strings and
    /// [`CubeState::from_grids`](crate::CubeState::from_grids).
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Front, Back, Up, Down, Left, Right];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color every facelet of this face has in the solved state.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Green,
            Face::Right => Color::Blue,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'F' => Face::Front,
            'B' => Face::Back,
            'U' => Face::Up,
            'D' => Face::Down,
            'L' => Face::Left,
            'R' => Face::Right,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Right => "Right",
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_solved_colors_are_a_bijection() {
        let colors = Face::ALL.map(Face::solved_color);
        assert!(colors.iter().all_unique());
        assert_eq!(colors.len(), Color::ALL.len());
    }

    #[test]
    fn test_letters_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
        }
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Color::from_letter('x'), None);
        assert_eq!(Face::from_letter('f'), None);
    }
}
