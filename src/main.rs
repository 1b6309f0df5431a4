//! Spriterot - Command-line tool for rotating sprite strips

use std::process::ExitCode;

use spriterot::cli;

fn main() -> ExitCode {
    cli::run()
}
