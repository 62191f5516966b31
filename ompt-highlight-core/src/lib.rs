//! Core highlighting engine for OpenMPT pattern clipboard dumps.
//!
//! OpenMPT ("ModPlug Tracker") copies pattern data to the clipboard as
//! column-aligned plain text. This crate turns such a dump into the same
//! text with ANSI SGR color codes inserted, so notes, instruments, volume
//! commands and effect commands become visually distinguishable in a
//! terminal or in chat clients that render ANSI inside code blocks.
//!
//! The crate is pure text-in/text-out — no clipboard, no stdio, no flags.
//! The CLI shell in the `ompt-highlight` binary crate handles all I/O.
//!
//! # Sub-modules
//!
//! - [`format`] — clipboard header check and format-family detection
//! - [`classify`] — per-character column-offset classification
//! - [`colorize`] — the single-pass colorizer engine and code-fence wrap
//! - [`sgr`] — SGR code emission and stripping (the decolorizer)
//! - [`palette`] — the eight-color palette and its `FromStr` parsing
//!
//! # Example
//!
//! ```
//! use ompt_highlight_core::{classify_and_colorize, Palette};
//!
//! let dump = "ModPlug Tracker MOD\n|C-501v40A12\n";
//! let colored = classify_and_colorize(dump, &Palette::default(), false, false)
//!     .expect("valid OpenMPT pattern data");
//! assert!(colored.contains('\u{1b}'));
//! ```

pub mod classify;
pub mod colorize;
pub mod error;
pub mod format;
pub mod palette;
pub mod sgr;

pub use colorize::classify_and_colorize;
pub use error::HighlightError;
pub use format::FormatFamily;
pub use palette::{Category, DEFAULT_PALETTE, Palette, PaletteError};
pub use sgr::decolorize;
