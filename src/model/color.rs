//! Element display colors.
//!
//! A small CPK-style palette covering the elements the synthetic systems and
//! typical biomolecular structures produce. Anything else falls back to
//! [`Color::NEUTRAL`].

use serde::{Deserialize, Serialize};

/// RGB display color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Gray used for unrecognized elements.
    pub const NEUTRAL: Color = Color::new(0.5, 0.5, 0.5);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Looks up the palette color for an element symbol.
///
/// Matching is case-insensitive on the trimmed symbol. Returns `None` for
/// symbols outside the palette so callers can decide how to report them.
pub fn element_color(symbol: &str) -> Option<Color> {
    let symbol = symbol.trim();
    let color = match symbol.to_ascii_uppercase().as_str() {
        "H" => Color::new(1.0, 1.0, 1.0),
        "C" => Color::new(0.5, 0.5, 0.5),
        "N" => Color::new(0.0, 0.0, 1.0),
        "O" => Color::new(1.0, 0.0, 0.0),
        "S" => Color::new(1.0, 1.0, 0.0),
        "P" => Color::new(1.0, 0.5, 0.0),
        "AU" => Color::new(1.0, 0.84, 0.0),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_elements_resolve() {
        assert_eq!(element_color("O"), Some(Color::new(1.0, 0.0, 0.0)));
        assert_eq!(element_color("H"), Some(Color::new(1.0, 1.0, 1.0)));
        assert_eq!(element_color("Au"), Some(Color::new(1.0, 0.84, 0.0)));
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(element_color(" n "), element_color("N"));
        assert_eq!(element_color("AU"), element_color("Au"));
    }

    #[test]
    fn unknown_element_has_no_entry() {
        assert_eq!(element_color("Xx"), None);
        assert_eq!(element_color(""), None);
    }

    #[test]
    fn palette_channels_are_normalized() {
        for symbol in ["H", "C", "N", "O", "S", "P", "Au"] {
            let c = element_color(symbol).expect("palette entry");
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
