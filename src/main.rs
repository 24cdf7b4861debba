mod cli;
mod commands;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_capture, run_serve};

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    match args.command {
        Commands::Serve => run_serve(args.config, args.verbose).await,
        Commands::Capture { url, label } => {
            run_capture(args.config, args.verbose, url, label).await
        }
    }
}
