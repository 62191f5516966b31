//! Input/output sinks: the OS clipboard and the standard streams.
//!
//! These are the thin I/O wrappers around the core; failures are surfaced,
//! never retried.

use std::fmt;
use std::io::{self, BufRead, Write};

/// Where the raw pattern text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Clipboard,
    Stdin,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Clipboard => write!(f, "Clipboard"),
            InputSource::Stdin => write!(f, "STDIN"),
        }
    }
}

/// Where the final text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSink {
    Clipboard,
    Stdout,
}

/// Errors from reading or writing a text sink.
#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    /// The input source could not be read at all.
    #[error("unable to read {0}")]
    InputUnavailable(InputSource),
    /// The clipboard rejected the output text.
    #[error("unable to write to clipboard: {0}")]
    ClipboardWrite(String),
    /// Stdout write failed (e.g. broken pipe).
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Read the full input text.
///
/// Stdin is consumed to EOF with each line rejoined newline-terminated, so
/// the colorizer always sees `\n` line endings regardless of platform.
pub fn read_text(source: InputSource) -> Result<String, PipeError> {
    match source {
        InputSource::Stdin => {
            let mut data = String::new();
            for line in io::stdin().lock().lines() {
                let line = line.map_err(|e| {
                    log::error!("stdin read failed: {e}");
                    PipeError::InputUnavailable(source)
                })?;
                data.push_str(&line);
                data.push('\n');
            }
            Ok(data)
        }
        InputSource::Clipboard => {
            let mut clipboard = arboard::Clipboard::new().map_err(|e| {
                log::error!("clipboard unavailable: {e}");
                PipeError::InputUnavailable(source)
            })?;
            clipboard.get_text().map_err(|e| {
                log::error!("clipboard read failed: {e}");
                PipeError::InputUnavailable(source)
            })
        }
    }
}

/// Deliver the final text to the chosen sink.
pub fn write_text(sink: OutputSink, text: &str) -> Result<(), PipeError> {
    match sink {
        OutputSink::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        OutputSink::Clipboard => {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| PipeError::ClipboardWrite(e.to_string()))?;
            clipboard
                .set_text(text.to_string())
                .map_err(|e| PipeError::ClipboardWrite(e.to_string()))?;
            // On X11 the selection is served by this process; give the
            // clipboard manager a moment to take it over before we exit.
            #[cfg(target_os = "linux")]
            std::thread::sleep(std::time::Duration::from_millis(100));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display_names_match_reports() {
        assert_eq!(InputSource::Clipboard.to_string(), "Clipboard");
        assert_eq!(InputSource::Stdin.to_string(), "STDIN");
    }

    #[test]
    fn test_input_unavailable_message() {
        let e = PipeError::InputUnavailable(InputSource::Clipboard);
        assert_eq!(e.to_string(), "unable to read Clipboard");
    }
}
