use clap::Parser;
use hadith_reader::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Related(args) => cli::related::run(args).await,
    }
}
