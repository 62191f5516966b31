//! The colorizer engine: one forward scan emitting minimal SGR switches.

use crate::classify::{EFFECT_GROUP_WIDTH, EFFECT_OFFSET, SEPARATOR_OFFSET, classify};
use crate::error::HighlightError;
use crate::format::detect_format;
use crate::palette::Palette;
use crate::sgr::{decolorize, push_sgr};

/// Channel separator literal in pattern rows.
pub const SEPARATOR: char = '|';

/// Placeholder character OpenMPT uses for empty fields.
const FILLER: char = '.';
/// What a filler inside a non-empty effect group is rewritten to.
const FILLER_DIGIT: char = '0';

/// Opening fence for chat clients that render ANSI inside code blocks.
const FENCE_OPEN: &str = "```ansi\n";
/// Closing fence.
const FENCE_CLOSE: &str = "```";

/// Position within the repeating column cycle of a pattern row.
///
/// `None` means the scan is outside any row (before the first `|` of the
/// input, e.g. in the header line); `Some(n)` is the offset since the most
/// recent separator. A row may contain many separators, one per channel,
/// each restarting the cycle.
#[derive(Debug, Default)]
struct ScanCursor {
    column: Option<usize>,
}

impl ScanCursor {
    /// Enter (or re-enter) a column cycle at the separator.
    fn reset(&mut self) {
        self.column = Some(SEPARATOR_OFFSET);
    }

    /// Advance one character; a no-op outside a row.
    fn advance(&mut self) {
        if let Some(column) = self.column.as_mut() {
            *column += 1;
        }
    }
}

/// Colorize an OpenMPT pattern dump, or strip its colors in reverse mode.
///
/// Any SGR codes already present are stripped first, so feeding the
/// function its own output produces byte-identical results. The input must
/// carry the OpenMPT clipboard header and a recognized format tag; on
/// failure nothing is produced (no partial output).
///
/// In reverse mode the stripped text is returned as-is and `wrap` is
/// ignored. Otherwise the text is re-colored with `palette` and, when
/// `wrap` is set, enclosed in a ```` ```ansi ```` code fence.
///
/// One intentional text change besides the escape codes: a `.` parameter
/// digit inside an effect group whose command character is not itself `.`
/// is rewritten to `0`, so non-empty effect commands do not show
/// blank-looking parameters.
pub fn classify_and_colorize(
    text: &str,
    palette: &Palette,
    reverse: bool,
    wrap: bool,
) -> Result<String, HighlightError> {
    let plain = decolorize(text);
    let family = detect_format(&plain)?;
    log::debug!("colorizing {} chars as {family:?}", plain.len());

    if reverse {
        return Ok(plain);
    }

    let mut out = String::with_capacity(plain.len() * 2);
    let mut cursor = ScanCursor::default();
    // Color resolved for the character under the cursor. Unclassified
    // characters keep the previous resolution, so parameter digits inherit
    // their command letter's color.
    let mut current: Option<u8> = None;
    // Last color actually emitted; `None` guarantees the first resolved
    // color always produces a code.
    let mut active: Option<u8> = None;
    // Command character of the effect group the cursor is inside.
    let mut group_command = FILLER;

    for mut c in plain.chars() {
        if c == SEPARATOR {
            cursor.reset();
        }
        if let Some(offset) = cursor.column {
            if offset >= EFFECT_OFFSET {
                if offset.is_multiple_of(EFFECT_GROUP_WIDTH) {
                    group_command = c;
                } else if c == FILLER && group_command != FILLER {
                    c = FILLER_DIGIT;
                }
            }
            if let Some(category) = classify(c, offset, family) {
                current = Some(palette.color(category));
            }
        }
        if current != active {
            if let Some(color) = current {
                push_sgr(&mut out, color);
            }
            active = current;
        }
        out.push(c);
        cursor.advance();
    }

    if wrap {
        return Ok(format!("{FENCE_OPEN}{out}{FENCE_CLOSE}"));
    }
    Ok(out)
}
