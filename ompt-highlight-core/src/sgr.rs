//! SGR escape sequence emission and stripping.

use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

/// First color value mapped to the bright/high-intensity SGR range.
const BRIGHT_BASE: u8 = 8;
/// SGR parameter for standard-intensity foreground color 0 (`ESC[30m`).
const FG_STANDARD: u8 = 30;
/// SGR parameter for bright foreground color 8 (`ESC[90m`).
const FG_BRIGHT: u8 = 90;

/// Matches one SGR sequence: `ESC [ <n> (; <n>)* m`.
fn re_sgr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\x1b\[\d+(?:;\d+)*m")
            .expect("re_sgr: pattern is valid and should always compile")
    })
}

/// Strip every SGR escape sequence, leaving all other characters untouched
/// and in their original order.
///
/// Idempotent: stripping already-stripped text is a no-op. This runs before
/// every colorization pass so that re-running the tool on its own output
/// never double-escapes, and it is the whole of reverse mode.
pub fn decolorize(text: &str) -> String {
    re_sgr().replace_all(text, "").into_owned()
}

/// Append the "set foreground" SGR sequence for a color value in 0..=15.
///
/// 0..=7 map to the standard-intensity parameters 30..=37, 8..=15 to the
/// bright parameters 90..=97. The emitted form is exactly what
/// [`decolorize`] strips.
pub fn push_sgr(out: &mut String, color: u8) {
    let param = if color < BRIGHT_BASE {
        FG_STANDARD + color
    } else {
        FG_BRIGHT + (color - BRIGHT_BASE)
    };
    // Writing into a String cannot fail.
    let _ = write!(out, "\u{1b}[{param}m");
}
