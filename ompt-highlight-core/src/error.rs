//! Typed error variants for the highlighting core.

/// Errors produced by the colorization path.
///
/// Palette parsing has its own error type ([`crate::palette::PaletteError`])
/// because the caller recovers from it locally by substituting the default
/// palette; an invalid input format aborts the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    /// The input does not begin with the OpenMPT clipboard header followed
    /// by a recognized 3-character format tag.
    #[error("input does not contain OpenMPT pattern data")]
    InvalidInputFormat,
}
