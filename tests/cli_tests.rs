//! Tests for CLI flag parsing and runtime-option resolution.

use clap::Parser;
use ompt_highlight::cli::{Cli, RuntimeOptions};
use ompt_highlight::pipe::{InputSource, OutputSink};
use ompt_highlight_core::Palette;

fn options(args: &[&str]) -> RuntimeOptions {
    let mut argv = vec!["ompt-highlight"];
    argv.extend_from_slice(args);
    RuntimeOptions::from_cli(Cli::parse_from(argv))
}

#[test]
fn test_defaults_use_clipboard_both_ways() {
    let opts = options(&[]);
    assert_eq!(opts.source, InputSource::Clipboard);
    assert_eq!(opts.sink, OutputSink::Clipboard);
    assert!(!opts.markdown);
    assert!(!opts.reverse);
    assert_eq!(opts.palette, Palette::default());
}

#[test]
fn test_short_flags() {
    let opts = options(&["-i", "-o", "-d", "-r"]);
    assert_eq!(opts.source, InputSource::Stdin);
    assert_eq!(opts.sink, OutputSink::Stdout);
    assert!(opts.markdown);
    assert!(opts.reverse);
}

#[test]
fn test_long_flags() {
    let opts = options(&["--stdin", "--stdout", "--markdown", "--reverse"]);
    assert_eq!(opts.source, InputSource::Stdin);
    assert_eq!(opts.sink, OutputSink::Stdout);
    assert!(opts.markdown);
    assert!(opts.reverse);
}

#[test]
fn test_valid_palette_argument() {
    let opts = options(&["-o", "15,13,12,10,14,11,9,15"]);
    let expected: Palette = "15,13,12,10,14,11,9,15".parse().expect("valid spec");
    assert_eq!(opts.palette, expected);
}

#[test]
fn test_malformed_palette_falls_back_to_default() {
    // Wrong count, junk values, and out-of-range all behave exactly like
    // omitting the argument.
    for bad in ["1,2,3", "a,b,c,d,e,f,g,h", "16,5,4,2,6,3,1,7"] {
        let opts = options(&["-o", bad]);
        assert_eq!(opts.palette, Palette::default(), "spec {bad:?}");
    }
}

#[test]
fn test_flags_combine_with_palette_argument() {
    let opts = options(&["-i", "-d", "7,5,4,2,6,3,1,7"]);
    assert_eq!(opts.source, InputSource::Stdin);
    assert!(opts.markdown);
    assert_eq!(opts.palette, Palette::default());
}
