//! CLI module for Hadith Reader
//!
//! Subcommands:
//! - `serve`: HTTP API server
//! - `related`: resolve related hadiths for one id and print them as JSON

pub mod related;
pub mod serve;

use clap::{Parser, Subcommand};

/// Hadith Reader - related-hadith recommendations over a hadith content API
#[derive(Parser)]
#[command(name = "hadith-reader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Resolve related hadiths for one hadith and print them
    Related(related::RelatedArgs),
}
