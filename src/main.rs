use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use describe_ec2::config::{Cli, Command};
use describe_ec2::ec2::Ec2Lookup;
use describe_ec2::App;

fn init_logging(log_level: &str) {
    let filter = format!("error,describe_ec2={}", log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Tag(args) => {
            let app = App::new(Ec2Lookup, ".");
            match app.run(&args).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    debug!("tag command failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
