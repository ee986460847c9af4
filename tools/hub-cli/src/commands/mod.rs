//! CLI command implementations.

pub mod config;
pub mod content;
pub mod directory;
pub mod forms;
pub mod open;

use clap::{Args, Subcommand};

/// Arguments for the creators command.
#[derive(Args, Default)]
pub struct CreatorsArgs {
    /// Free-text search over names, descriptions and tags.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact, case-sensitive primary category, or "All".
    #[arg(short, long)]
    pub category: Option<String>,

    /// Inclusive minimum rating (e.g. 4.5).
    #[arg(short = 'r', long)]
    pub min_rating: Option<f64>,

    /// Vetting status: all, verified, pending-review or watchlist.
    #[arg(long)]
    pub vetting: Option<String>,

    /// Sort order: sales, rating or recent. Defaults to the configured sort.
    #[arg(long)]
    pub sort: Option<String>,

    /// Show each creator as a card instead of a table row.
    #[arg(long)]
    pub cards: bool,
}

/// Arguments for the top command.
#[derive(Args)]
pub struct TopArgs {
    /// Number of creators to show. Defaults to `directory.top_creators`.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Creator id, e.g. caitlynminimalist.
    pub id: String,
}

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Site path, e.g. /creators/modparty or #/blog.
    #[arg(default_value = "/")]
    pub path: String,
}

/// Arguments for the blog command.
#[derive(Args)]
pub struct BlogArgs {
    /// Post slug; the first post is shown when unknown.
    pub slug: Option<String>,

    /// List posts instead of reading one.
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the onboard command.
#[derive(Args)]
pub struct OnboardArgs {
    /// Name or brand.
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Primary promotion channel.
    #[arg(long)]
    pub channel: Option<String>,

    /// Monthly reach estimate.
    #[arg(long)]
    pub reach: Option<String>,

    /// Niches you promote.
    #[arg(long)]
    pub niches: Option<String>,

    /// Webhook URL; overrides `forms.onboarding_endpoint`.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Never prompt; fail if a field is missing.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Name or organization.
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// affiliate, creator, brand or other.
    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Never prompt; fail if a field is missing.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the apply command.
#[derive(Args)]
pub struct ApplyArgs {
    /// Creator id to apply to.
    pub creator: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Primary promotion channel.
    #[arg(long)]
    pub channel: Option<String>,

    /// Short description of your audience.
    #[arg(long)]
    pub audience: Option<String>,

    /// Never prompt; fail if a field is missing.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default hub.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
