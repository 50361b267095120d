use std::process::ExitCode;

use chat_gateway::observability::init_cli_logging;
use chat_gateway::probe::{self, Args};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_cli_logging();

    match probe::execute(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error {}: {}", e.stage(), e);
            ExitCode::FAILURE
        }
    }
}
