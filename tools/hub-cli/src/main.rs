//! Hub CLI - browse the Affiliate Hub creator directory from the terminal.
//!
//! Commands:
//! - `hub creators` - Filter and sort the directory
//! - `hub categories` - List the categories in the dataset
//! - `hub top` - Top creators by sales
//! - `hub show` - A creator's full profile
//! - `hub open` - Render a site path
//! - `hub blog` / `hub faq` - Playbook articles and answers
//! - `hub onboard` / `hub contact` / `hub apply` - Forms
//! - `hub config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    ApplyArgs, BlogArgs, ConfigArgs, ContactArgs, CreatorsArgs, OnboardArgs, OpenArgs, ShowArgs,
    TopArgs,
};

/// Hub CLI - Discover vetted Etsy creators for affiliate partnerships
#[derive(Parser)]
#[command(name = "hub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort creators
    Creators(CreatorsArgs),

    /// List creator categories
    Categories,

    /// Show the top creators by sales
    Top(TopArgs),

    /// Show a creator profile
    Show(ShowArgs),

    /// Render a site path, e.g. /creators/modparty
    Open(OpenArgs),

    /// Read the affiliate playbook
    Blog(BlogArgs),

    /// Frequently asked questions
    Faq,

    /// Submit the affiliate onboarding form
    Onboard(OnboardArgs),

    /// Send a message to the team
    Contact(ContactArgs),

    /// Apply to a creator's affiliate program
    Apply(ApplyArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(&ctx);
    if let Some(path) = &ctx.config_path {
        tracing::debug!(config = %path.display(), "loaded configuration");
    }

    // Execute command
    let result = match cli.command {
        Commands::Creators(args) => commands::directory::creators(args, &ctx).await,
        Commands::Categories => commands::directory::categories(&ctx).await,
        Commands::Top(args) => commands::directory::top(args, &ctx).await,
        Commands::Show(args) => commands::open::show(args, &ctx).await,
        Commands::Open(args) => commands::open::run(args, &ctx).await,
        Commands::Blog(args) => commands::content::blog(args, &ctx).await,
        Commands::Faq => commands::content::faq(&ctx).await,
        Commands::Onboard(args) => commands::forms::onboard(args, &ctx).await,
        Commands::Contact(args) => commands::forms::contact(args, &ctx).await,
        Commands::Apply(args) => commands::forms::apply(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Route library `tracing` events to stderr. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(ctx: &context::Context) {
    let level = if ctx.output.is_verbose() {
        "debug"
    } else {
        ctx.config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
