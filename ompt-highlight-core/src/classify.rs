//! Column-position classification of pattern-row characters.
//!
//! Within a channel, OpenMPT's textual layout is fixed-width: three note
//! characters, two instrument digits, a three-character volume command,
//! then effect commands of three characters each. The offsets below are
//! those exact column positions, counted from the `|` separator, and must
//! not be re-derived.

use crate::format::FormatFamily;
use crate::palette::Category;

/// Offset of the channel separator itself within the column cycle.
pub const SEPARATOR_OFFSET: usize = 0;
/// Offset of the first note character (note name spans offsets 1..=3).
pub const NOTE_OFFSET: usize = 1;
/// Offset of the first instrument digit (two digits wide).
pub const INSTRUMENT_OFFSET: usize = 4;
/// Offset of the volume command letter (letter plus two parameter digits).
pub const VOLUME_OFFSET: usize = 6;
/// Offset of the first effect command character.
pub const EFFECT_OFFSET: usize = 9;
/// Width of one effect group: command character plus two parameter digits.
pub const EFFECT_GROUP_WIDTH: usize = 3;

/// Characters that render an empty note column (including note off/cut/fade
/// markers, which OpenMPT draws as `===`, `~~~` and `^^^`).
const NOTE_BLANKS: [char; 5] = [' ', '.', '=', '~', '^'];

/// Classify one character by its offset within the current column cycle.
///
/// Pure and deterministic: the same (character, offset, family) triple
/// always yields the same result. Returns `None` for offsets that carry no
/// classification of their own — parameter digits inherit the category of
/// the command letter that opened their field.
pub fn classify(c: char, offset: usize, family: FormatFamily) -> Option<Category> {
    match offset {
        SEPARATOR_OFFSET => Some(Category::Separator),
        NOTE_OFFSET => Some(if NOTE_BLANKS.contains(&c) {
            Category::Default
        } else {
            Category::Note
        }),
        INSTRUMENT_OFFSET => Some(if c == ' ' || c == '.' {
            Category::Default
        } else {
            Category::Instrument
        }),
        VOLUME_OFFSET => Some(volume_category(c)),
        o if o >= EFFECT_OFFSET && o.is_multiple_of(EFFECT_GROUP_WIDTH) => {
            Some(effect_category(c, family))
        }
        _ => None,
    }
}

/// Volume-column command letters (lowercase, case-sensitive; shared by all
/// formats).
fn volume_category(c: char) -> Category {
    match c {
        'a' | 'b' | 'c' | 'd' | 'v' => Category::Volume,
        'l' | 'p' | 'r' => Category::Panning,
        'e' | 'f' | 'g' | 'h' | 'u' => Category::Pitch,
        _ => Category::Default,
    }
}

/// Effect-column command characters, per format family.
fn effect_category(c: char, family: FormatFamily) -> Category {
    match family {
        FormatFamily::SFamily => match c {
            'D' | 'K' | 'L' | 'M' | 'N' | 'R' => Category::Volume,
            'P' | 'X' | 'Y' => Category::Panning,
            'E' | 'F' | 'G' | 'H' | 'U' => Category::Pitch,
            'A' | 'B' | 'C' | 'T' | 'V' | 'W' => Category::Global,
            _ => Category::Default,
        },
        FormatFamily::MFamily => match c {
            '5' | '6' | '7' | 'A' | 'C' => Category::Volume,
            '8' | 'P' | 'Y' => Category::Panning,
            '1' | '2' | '3' | '4' | 'X' => Category::Pitch,
            'B' | 'D' | 'F' | 'G' | 'H' => Category::Global,
            _ => Category::Default,
        },
    }
}
