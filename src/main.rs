//! texcrush - recompress every `*_<kind>.png` texture in a directory
//!
//! Usage: texcrush <albedo|normal|orm> <path> [prefixes...]

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    texcrush::cli::run_consolidated()
}
