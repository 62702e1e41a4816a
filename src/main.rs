use clap::Parser;
use stockroom::adapter::inbound::cli::command::{Cli, ColorChoice};
use stockroom::adapter::inbound::cli::diagnostic::CommandError;
use stockroom::adapter::inbound::cli::dispatch;
use stockroom::adapter::inbound::cli::output::{self, OutputConfig};
use stockroom::infrastructure::operator::entry::Operator;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    let operator = Operator::new();
    let result = tokio::select! {
        result = dispatch::run(cli, &operator) => result,
        _ = signal::ctrl_c() => {
            info!("Interrupted");
            std::process::exit(130);
        }
    };

    if let Err(e) = result {
        if output::is_json() {
            output::error(&e.to_string());
        } else {
            eprintln!("{:?}", miette::Report::new(CommandError::from(&e)));
        }
        std::process::exit(1);
    }
}
