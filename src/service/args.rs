//! Command-line argument parsing for the `calculator-svc` binary

use clap::Parser;
use std::net::SocketAddr;

/// Calculator service - integer addition over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "calculator-svc")]
pub struct ServiceArgs {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Address to listen on
    #[arg(short = 'l', long, default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,
}

/// Parse command line arguments
pub fn parse_args() -> ServiceArgs {
    ServiceArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_address() {
        let args = ServiceArgs::try_parse_from(["calculator-svc"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.listen.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_listen_address() {
        assert!(ServiceArgs::try_parse_from(["calculator-svc", "--listen", "nowhere"]).is_err());
    }
}
