use anyhow::{Context, Result};
use clap::Parser;
use exsync_domain::ImportOptions;
use exsync_storage::wger;
use reqwest::Url;

/// Import exercise definitions from WGER into the exercises table.
#[derive(Parser, Debug)]
#[command(name = "exsync", version, about)]
pub struct Args {
    /// URL of the Supabase project
    #[arg(long, env = "EXPO_PUBLIC_SUPABASE_URL")]
    pub supabase_url: String,

    /// Anonymous API key of the Supabase project
    #[arg(long, env = "EXPO_PUBLIC_SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_key: String,

    /// Base URL of the WGER REST API
    #[arg(long, env = "WGER_API_URL", default_value = wger::DEFAULT_URL)]
    pub wger_url: String,

    /// WGER language ID used in the request
    #[arg(long, env = "WGER_LANGUAGE_ID", default_value_t = wger::DEFAULT_LANGUAGE_ID)]
    pub language_id: u32,

    /// Short name of the language to import
    #[arg(long, env = "WGER_LANGUAGE", default_value = "en")]
    pub language: String,

    /// Maximum number of exercises to fetch
    #[arg(long, env = "WGER_LIMIT", default_value_t = wger::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Look up exercises without writing to the database
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: Url,
    pub supabase_key: String,
    pub wger_url: Url,
    pub language_id: u32,
    pub limit: u32,
    pub options: ImportOptions,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let supabase_url = Url::parse(&args.supabase_url)
            .with_context(|| format!("invalid Supabase URL '{}'", args.supabase_url))?;
        let wger_url = Url::parse(&args.wger_url)
            .with_context(|| format!("invalid WGER URL '{}'", args.wger_url))?;

        if args.supabase_key.trim().is_empty() {
            anyhow::bail!("Supabase API key must not be empty");
        }

        if args.limit == 0 {
            anyhow::bail!("limit must be greater than 0");
        }

        Ok(Config {
            supabase_url,
            supabase_key: args.supabase_key,
            wger_url,
            language_id: args.language_id,
            limit: args.limit,
            options: ImportOptions {
                language: args.language,
                dry_run: args.dry_run,
            },
        })
    }
}
