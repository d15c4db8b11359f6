use clap::Parser;
use fanout::cli::{execute_command, get_log_level, Cli};
use std::io::IsTerminal;
use tracing::{debug, error, trace};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Reports are written as `info` events, so keep default output bare
    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(cli.verbose))
        .without_time()
        .with_ansi(std::io::stdout().is_terminal())
        .with_level(cli.verbose >= 1)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("fanout started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    match execute_command(cli.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
