#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use calculator::{cli, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Print the sum, a parse error or the usage line
    cli::execute_command(&args, &mut std::io::stdout().lock())
}
