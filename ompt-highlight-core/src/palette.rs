//! The eight-color palette mapping semantic categories to terminal colors.

use std::str::FromStr;

/// Semantic category assigned to a pattern-row character.
///
/// Doubles as the palette index, so the discriminants are load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Empty fields, filler dots, anything unclassified.
    Default = 0,
    /// Note names (`C-5`, `F#3`, ...).
    Note = 1,
    /// Instrument/sample numbers.
    Instrument = 2,
    /// Volume-affecting commands.
    Volume = 3,
    /// Panning commands.
    Panning = 4,
    /// Pitch/portamento commands.
    Pitch = 5,
    /// Global/misc effects (tempo, pattern jumps, ...).
    Global = 6,
    /// The `|` channel separator itself.
    Separator = 7,
}

impl Category {
    /// Number of categories, and therefore palette slots.
    pub const COUNT: usize = 8;
}

/// Highest terminal color value a palette slot may hold.
///
/// 0..=7 are the standard-intensity colors, 8..=15 the bright ones
/// (Discord only renders 0..=7).
pub const MAX_COLOR: u8 = 15;

/// Terminal colors for output, one slot per [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([u8; Category::COUNT]);

/// Built-in palette used when none (or a malformed one) is supplied.
///
/// Slot order: Default, Note, Instrument, Volume, Panning, Pitch, Global,
/// Separator. Immutable — a working palette is built fresh per invocation.
pub const DEFAULT_PALETTE: Palette = Palette([7, 5, 4, 2, 6, 3, 1, 7]);

impl Palette {
    /// Color value (0..=15) for the given category.
    pub fn color(&self, category: Category) -> u8 {
        self.0[category as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

/// Errors from parsing a user-supplied palette spec.
///
/// The CLI recovers from all of these by falling back to
/// [`DEFAULT_PALETTE`]; the variants exist so the failure can be reported
/// precisely.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// The spec did not contain exactly eight comma-separated entries.
    #[error("expected {expected} comma-separated colors, got {0}", expected = Category::COUNT)]
    WrongCount(usize),
    /// An entry was not a non-negative integer.
    #[error("'{0}' is not a valid color number")]
    NotANumber(String),
    /// An entry parsed but exceeds [`MAX_COLOR`].
    #[error("color {0} is out of range (0-{MAX_COLOR})")]
    OutOfRange(u8),
}

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse `"X,X,X,X,X,X,X,X"` with each value in 0..=15.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != Category::COUNT {
            return Err(PaletteError::WrongCount(parts.len()));
        }
        let mut colors = [0u8; Category::COUNT];
        for (slot, part) in colors.iter_mut().zip(&parts) {
            let value: u8 = part
                .trim()
                .parse()
                .map_err(|_| PaletteError::NotANumber(part.trim().to_string()))?;
            if value > MAX_COLOR {
                return Err(PaletteError::OutOfRange(value));
            }
            *slot = value;
        }
        Ok(Palette(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_values() {
        let p = Palette::default();
        assert_eq!(p.color(Category::Default), 7);
        assert_eq!(p.color(Category::Note), 5);
        assert_eq!(p.color(Category::Instrument), 4);
        assert_eq!(p.color(Category::Volume), 2);
        assert_eq!(p.color(Category::Panning), 6);
        assert_eq!(p.color(Category::Pitch), 3);
        assert_eq!(p.color(Category::Global), 1);
        assert_eq!(p.color(Category::Separator), 7);
    }

    #[test]
    fn test_parse_default_spec_matches_builtin() {
        let parsed: Palette = "7,5,4,2,6,3,1,7".parse().expect("valid spec");
        assert_eq!(parsed, DEFAULT_PALETTE);
    }

    #[test]
    fn test_parse_accepts_bright_colors() {
        let parsed: Palette = "15,13,12,10,14,11,9,8".parse().expect("valid spec");
        assert_eq!(parsed.color(Category::Default), 15);
        assert_eq!(parsed.color(Category::Separator), 8);
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        assert_eq!(
            "1,2,3".parse::<Palette>(),
            Err(PaletteError::WrongCount(3))
        );
        assert_eq!(
            "1,2,3,4,5,6,7,8,9".parse::<Palette>(),
            Err(PaletteError::WrongCount(9))
        );
        assert_eq!("".parse::<Palette>(), Err(PaletteError::WrongCount(1)));
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(
            "7,5,4,x,6,3,1,7".parse::<Palette>(),
            Err(PaletteError::NotANumber("x".to_string()))
        );
        assert_eq!(
            "7,5,4,-2,6,3,1,7".parse::<Palette>(),
            Err(PaletteError::NotANumber("-2".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            "16,5,4,2,6,3,1,7".parse::<Palette>(),
            Err(PaletteError::OutOfRange(16))
        );
    }
}
