use clap::Parser;

use quittance::adapter::inbound::cli::{self, output, Cli};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli::executer(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
