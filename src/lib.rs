//! CLI shell around [`ompt_highlight_core`]: argument parsing, clipboard
//! and stdio plumbing, logging.
//!
//! Everything with algorithmic content lives in the core crate; this crate
//! only decides where text comes from, where it goes, and how failures are
//! reported.

pub mod cli;
pub mod debug;
pub mod pipe;
