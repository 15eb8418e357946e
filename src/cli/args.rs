//! Command-line argument parsing for the `calculator` binary

use clap::{Parser, error::ErrorKind};
use std::ffi::OsString;

/// Calculator - adds two integers
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "calculator")]
pub struct Args {
    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,

    /// The two integers to add
    #[arg(value_name = "INT", allow_hyphen_values = true, trailing_var_arg = true)]
    pub operands: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an explicit iterator.
///
/// Operands may start with a hyphen, so `-abc` reaches operand parsing
/// instead of being read as a flag. Help and version requests exit as usual.
/// Any other argument error yields an empty operand list so the caller
/// prints the usage line and exits normally.
pub fn parse_args_from<I, T>(args: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => Args::default(),
    }
}
