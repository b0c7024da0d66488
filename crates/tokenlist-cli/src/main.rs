//! Token List CLI
//!
//! Regenerates `tokenlist-mainnet.json` from the per-token sources under
//! `mainnet/`, bumping the list version only when the token set changed.

use clap::Parser;
use tokenlist_core::logging_facility::{init, Profile, LOG_FORMAT_ENV};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tokenlist")]
#[command(about = "Token list generator - versioned manifest of mainnet tokens", long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
}

fn main() {
    // Usage errors exit 1 like every other failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let format = std::env::var(LOG_FORMAT_ENV).ok();
    init(Profile::from_format(format.as_deref()));

    let result = commands::generate::execute(cli.generate);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
