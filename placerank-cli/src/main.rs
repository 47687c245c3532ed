//! Entry point for the `placerank` command-line interface.
#![forbid(unsafe_code)]

use placerank_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "The binary reports fatal errors on stderr"
)]
fn main() {
    match placerank_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("placerank: {err}");
            std::process::exit(1);
        }
    }
}
