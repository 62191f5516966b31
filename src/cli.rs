//! Command-line interface for ompt-highlight.
//!
//! This module handles CLI argument parsing and resolving the flags into
//! the runtime options consumed by `main`.

use clap::Parser;
use ompt_highlight_core::Palette;

use crate::pipe::{InputSource, OutputSink};

/// ompt-highlight - ANSI syntax highlighter for OpenMPT pattern data
#[derive(Debug, Parser)]
#[command(name = "ompt-highlight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read input from stdin instead of the clipboard
    #[arg(short = 'i', long = "stdin")]
    pub stdin: bool,

    /// Write output to stdout instead of the clipboard
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Wrap output in a Markdown ```ansi code block (for Discord; does
    /// nothing in reverse mode)
    #[arg(short = 'd', long = "markdown")]
    pub markdown: bool,

    /// Reverse mode - remove syntax highlighting instead of adding it
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Eight comma-separated colors, each 0 to 15 (Discord only renders
    /// 0 to 7), in the order
    /// Default,Note,Instrument,Volume,Panning,Pitch,Global,ChannelSeparator.
    /// Default: 7,5,4,2,6,3,1,7
    #[arg(value_name = "COLORS")]
    pub colors: Option<String>,
}

/// Runtime options resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// Where the raw pattern text comes from.
    pub source: InputSource,
    /// Where the final text goes.
    pub sink: OutputSink,
    /// Wrap output in a ```ansi code block.
    pub markdown: bool,
    /// Strip highlighting instead of adding it.
    pub reverse: bool,
    /// Working palette for this invocation.
    pub palette: Palette,
}

impl RuntimeOptions {
    /// Resolve parsed flags, falling back to the default palette when the
    /// color spec is malformed.
    pub fn from_cli(cli: Cli) -> Self {
        let source = if cli.stdin {
            InputSource::Stdin
        } else {
            InputSource::Clipboard
        };
        let sink = if cli.stdout {
            OutputSink::Stdout
        } else {
            OutputSink::Clipboard
        };

        let palette = match cli.colors.as_deref().map(str::parse::<Palette>) {
            None => Palette::default(),
            Some(Ok(palette)) => palette,
            Some(Err(e)) => {
                log::debug!("palette spec rejected: {e}");
                // Suppressed in stdout mode so piped output stays clean.
                if sink != OutputSink::Stdout {
                    eprintln!("Colors not provided properly. Default colors will be used.");
                }
                Palette::default()
            }
        };

        Self {
            source,
            sink,
            markdown: cli.markdown,
            reverse: cli.reverse,
            palette,
        }
    }
}

/// Parse the process arguments into runtime options.
pub fn process_cli() -> RuntimeOptions {
    RuntimeOptions::from_cli(Cli::parse())
}
