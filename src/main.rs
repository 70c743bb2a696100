use clap::Parser;
use dewit::{commands::Cli, libs::messages::Message, msg_error};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let verbose = cli.verbose;
    install_tracing(verbose);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(err);
            if verbose {
                for cause in err.chain().skip(1) {
                    eprintln!("{}", Message::CausedBy(cause.to_string()));
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over the default level.
fn install_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
