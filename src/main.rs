use ompt_highlight::cli;
use ompt_highlight::debug;
use ompt_highlight::pipe;
use ompt_highlight_core::{HighlightError, classify_and_colorize};

/// Exit code when the input source could not be read.
const EXIT_INPUT_UNAVAILABLE: i32 = 1;
/// Exit code when the input is not OpenMPT pattern data.
const EXIT_INVALID_FORMAT: i32 = 2;

fn main() {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = cli::process_cli();
    debug::init_logging();

    log::debug!("resolved options: {options:?}");

    let data = match pipe::read_text(options.source) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ompt-highlight: {e}");
            std::process::exit(EXIT_INPUT_UNAVAILABLE);
        }
    };

    let result = match classify_and_colorize(
        &data,
        &options.palette,
        options.reverse,
        options.markdown,
    ) {
        Ok(result) => result,
        Err(HighlightError::InvalidInputFormat) => {
            eprintln!("{} does not contain OpenMPT pattern data.", options.source);
            std::process::exit(EXIT_INVALID_FORMAT);
        }
    };

    if let Err(e) = pipe::write_text(options.sink, &result) {
        eprintln!("ompt-highlight: {e}");
        std::process::exit(EXIT_INPUT_UNAVAILABLE);
    }
}
