//! Related command - resolves recommendations for one hadith without starting the server

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::hadith::{normalize_locale, HadithId};
use crate::infrastructure::logging;

#[derive(Debug, Args)]
pub struct RelatedArgs {
    /// Subject hadith id
    pub id: HadithId,

    /// Locale for the subject and its recommendations (defaults to server.default_locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Run the related command
pub async fn run(args: RelatedArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate()?;
    logging::init_logging(&config.logging);

    let locale = normalize_locale(args.locale.as_deref().unwrap_or(&config.server.default_locale))?;
    let state = crate::create_app_state(&config).await?;

    let subject = state
        .hadith_api
        .get_hadith(args.id, &locale)
        .await?
        .with_context(|| format!("Hadith {} not found", args.id))?;

    let related = state.resolver.get_related(&subject, &locale).await;
    info!(hadith_id = %args.id, count = related.len(), "Resolved related hadiths");

    let output = if args.pretty {
        serde_json::to_string_pretty(&related)?
    } else {
        serde_json::to_string(&related)?
    };

    println!("{}", output);

    Ok(())
}
