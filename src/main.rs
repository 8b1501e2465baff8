//! fxconvert - Convert amounts between currencies at historical rates
//!
//! Reads amounts and currency codes from stdin, resolves the rate for the
//! date given on the command line, prints the converted amount and logs it.

use std::io;
use std::process;

use clap::Parser;

use fxconvert::cli::Cli;
use fxconvert::config::Config;
use fxconvert::rates::FastForexClient;
use fxconvert::resolver::RateResolver;
use fxconvert::session::Session;

/// Initializes logging to stderr, `warn` unless RUST_LOG says otherwise
fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[tokio::main]
async fn main() {
    setup_logging();

    // Invalid dates exit here with a usage error
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Loads the config and runs the conversion session on stdin/stdout
async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(cli.config.as_deref())?;
    let client = FastForexClient::new(config.api_key).with_base_url(config.base_url);

    let resolver = RateResolver::new(client, cli.rate_cache(), cli.cache_gate());
    let output_log = cli.output_log();
    log::debug!(
        "Session for {} (cache {}, log {})",
        cli.date,
        cli.rate_cache().path().display(),
        output_log.path().display()
    );

    let mut session = Session::new(cli.date, resolver, output_log);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = session.run(&mut stdin.lock(), &mut stdout.lock()).await?;
    log::debug!("Session ended: {:?}", end);

    Ok(())
}
