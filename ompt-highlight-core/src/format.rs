//! OpenMPT clipboard header check and format-family detection.

use crate::error::HighlightError;

/// Literal prefix OpenMPT puts on every pattern clipboard dump.
pub const HEADER: &str = "ModPlug Tracker ";

/// Length of the format tag immediately following the header.
const TAG_LEN: usize = 3;

/// Tags sharing the MOD/XM effect-letter conventions.
const FORMATS_M: [&str; 2] = ["MOD", " XM"];
/// Tags sharing the S3M/IT/MPTM effect-letter conventions.
const FORMATS_S: [&str; 3] = ["S3M", " IT", "MPT"];

/// Grouping of tracker export formats that share one
/// effect-letter-to-category table.
///
/// Determined once per input from the format tag; immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    /// MOD and XM exports (numeric ProTracker-style effect commands).
    MFamily,
    /// S3M, IT and MPTM exports (lettered effect commands).
    SFamily,
}

/// Check the clipboard header and classify the 3-character format tag.
///
/// Fails with [`HighlightError::InvalidInputFormat`] when the input is too
/// short, does not start with [`HEADER`], or carries an unknown tag. The
/// caller must abort the colorization path entirely on failure.
pub fn detect_format(text: &str) -> Result<FormatFamily, HighlightError> {
    let tag = text
        .strip_prefix(HEADER)
        .and_then(|rest| rest.get(..TAG_LEN))
        .ok_or(HighlightError::InvalidInputFormat)?;

    if FORMATS_M.contains(&tag) {
        Ok(FormatFamily::MFamily)
    } else if FORMATS_S.contains(&tag) {
        Ok(FormatFamily::SFamily)
    } else {
        log::debug!("unrecognized format tag {tag:?}");
        Err(HighlightError::InvalidInputFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_m_family_tags() {
        assert_eq!(
            detect_format("ModPlug Tracker MOD\n|..."),
            Ok(FormatFamily::MFamily)
        );
        // XM's tag is " XM" — note the leading space.
        assert_eq!(
            detect_format("ModPlug Tracker  XM\n|..."),
            Ok(FormatFamily::MFamily)
        );
    }

    #[test]
    fn test_s_family_tags() {
        assert_eq!(
            detect_format("ModPlug Tracker S3M\n"),
            Ok(FormatFamily::SFamily)
        );
        assert_eq!(
            detect_format("ModPlug Tracker  IT\n"),
            Ok(FormatFamily::SFamily)
        );
        assert_eq!(
            detect_format("ModPlug Tracker MPT\n"),
            Ok(FormatFamily::SFamily)
        );
    }

    #[test]
    fn test_rejects_unknown_tag() {
        assert_eq!(
            detect_format("ModPlug Tracker 669\n"),
            Err(HighlightError::InvalidInputFormat)
        );
    }

    #[test]
    fn test_rejects_missing_header() {
        assert_eq!(
            detect_format("some random text"),
            Err(HighlightError::InvalidInputFormat)
        );
    }

    #[test]
    fn test_rejects_empty_and_short_input() {
        assert_eq!(detect_format(""), Err(HighlightError::InvalidInputFormat));
        assert_eq!(
            detect_format("ModPlug"),
            Err(HighlightError::InvalidInputFormat)
        );
        // Header present but tag truncated.
        assert_eq!(
            detect_format("ModPlug Tracker S3"),
            Err(HighlightError::InvalidInputFormat)
        );
    }
}
