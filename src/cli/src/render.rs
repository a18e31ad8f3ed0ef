use std::fmt::Write;

use cube_core::{Color, CubeState, Face};
use owo_colors::OwoColorize;

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Red => (255, 0, 0),
        Color::Orange => (255, 165, 0),
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 255, 0),
        Color::Green => (0, 255, 0),
        Color::Blue => (0, 0, 255),
    }
}

fn sticker(color: Color, unicode: bool) -> String {
    let (r, g, b) = rgb(color);
    if unicode {
        "██".truecolor(r, g, b).to_string()
    } else {
        format!("{} ", color.letter().truecolor(r, g, b).bold())
    }
}

/// Draw the cube unfolded around the front face:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
pub fn net(state: &CubeState, unicode: bool) -> String {
    let blank = "      ";
    let mut out = String::new();

    let row = |face: Face, row: usize| -> String {
        state[face].rows()[row]
            .iter()
            .map(|&color| sticker(color, unicode))
            .collect()
    };

    for r in 0..3 {
        let _ = writeln!(out, "{blank} {}", row(Face::Up, r));
    }
    for r in 0..3 {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            row(Face::Left, r),
            row(Face::Front, r),
            row(Face::Right, r),
            row(Face::Back, r)
        );
    }
    for r in 0..3 {
        let _ = writeln!(out, "{blank} {}", row(Face::Down, r));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_has_nine_lines() {
        let net = net(&CubeState::solved(), false);
        assert_eq!(net.lines().count(), 9);
        assert!(net.contains('W'));
        assert!(net.contains('Y'));
    }
}
