// ============================================================================
// tiergate - evaluate tier decisions for a screen snapshot
// ============================================================================
// Usage:
//   tiergate decide --snapshot screen.json              Lock state of each post
//   tiergate tiers --snapshot screen.json [--ceiling N] Tier cards (0 = all)
//   tiergate tiers --snapshot screen.json --post ID     Tier cards for a post
//   tiergate tap --snapshot screen.json --tier ID       What tapping a tier does
// ============================================================================

mod config;
mod snapshot;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tiergate_core::{ProductKind, TapAction, TierCard, TierEngine, TierId, TierListView};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snapshot::Snapshot;

/// Tier gating inspection tool
#[derive(Parser)]
#[command(name = "tiergate", version, about = "Evaluate content gating and tier cards for a screen snapshot")]
struct Cli {
    /// Presentation config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Product family: fan-pass, membership, sponsorship-plan
    #[arg(long, global = true, default_value = "fan-pass")]
    product: ProductKind,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether each post in the snapshot is locked
    Decide {
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Show the tier cards of the catalog
    Tiers {
        #[arg(long)]
        snapshot: PathBuf,

        /// Highest level to list (0 lists every tier)
        #[arg(long, default_value = "0", conflicts_with = "post")]
        ceiling: u32,

        /// Narrow the list to the tiers that unlock this post
        #[arg(long)]
        post: Option<String>,
    },

    /// Show what tapping a tier card does
    Tap {
        #[arg(long)]
        snapshot: PathBuf,

        /// Tier id to tap
        #[arg(long)]
        tier: String,
    },
}

fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tiergate_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let engine = TierEngine::for_product(cli.product, config);
    info!("Using {} wording", cli.product);

    match cli.command {
        Commands::Decide { snapshot } => cmd_decide(&engine, &snapshot, cli.format),
        Commands::Tiers {
            snapshot,
            ceiling,
            post,
        } => cmd_tiers(&engine, &snapshot, ceiling, post.as_deref(), cli.format),
        Commands::Tap { snapshot, tier } => cmd_tap(&engine, &snapshot, &tier, cli.format),
    }
}

fn cmd_decide(engine: &TierEngine, path: &Path, format: OutputFormat) -> Result<()> {
    let snapshot = Snapshot::load(path)?;
    let subscription = snapshot.subscription.as_ref();

    let decisions: Vec<_> = snapshot
        .posts
        .iter()
        .map(|post| (post, engine.decide(&post.content, subscription)))
        .collect();

    if format == OutputFormat::Json {
        let entries: Vec<_> = decisions
            .iter()
            .map(|(post, decision)| {
                serde_json::json!({
                    "id": post.id,
                    "requiredLevel": post.content.required_level(),
                    "decision": decision,
                })
            })
            .collect();
        let out = serde_json::json!({
            "evaluatedAt": Utc::now().to_rfc3339(),
            "posts": entries,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if decisions.is_empty() {
        println!("No posts in snapshot.");
        return Ok(());
    }

    println!("{:<24}  {:<8}  {}", "POST", "REQUIRES", "ACCESS");
    println!("{}", "-".repeat(46));
    for (post, decision) in &decisions {
        let requires = match &post.content.required_tier {
            Some(tier) => format!("L{}", tier.level),
            None => "-".to_string(),
        };
        println!("{:<24}  {:<8}  {}", post.id, requires, decision);
    }

    let locked = decisions.iter().filter(|(_, d)| d.is_locked()).count();
    println!("\n{} of {} posts locked", locked, decisions.len());
    Ok(())
}

fn cmd_tiers(
    engine: &TierEngine,
    path: &Path,
    ceiling: u32,
    post_id: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = Snapshot::load(path)?;
    let catalog = snapshot.catalog.tiers();

    let view = match post_id {
        Some(id) => TierListView::for_content(&snapshot.post(id)?.content),
        None => TierListView::with_ceiling(ceiling),
    };

    let cards = engine.present_catalog(
        catalog,
        snapshot.subscription.as_ref(),
        &view,
        &snapshot.post_counts(),
    );
    let hidden = view.has_hidden_tiers(catalog);

    if format == OutputFormat::Json {
        let out = serde_json::json!({
            "levelCeiling": view.level_ceiling,
            "hasHiddenTiers": hidden,
            "cards": cards,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No tiers to show.");
        return Ok(());
    }

    print_cards(&cards);

    if hidden {
        println!(
            "\n{} more tiers hidden (use --ceiling 0 to show all)",
            catalog.len() - cards.len()
        );
    }
    Ok(())
}

fn print_cards(cards: &[TierCard]) {
    println!(
        "{:<5}  {:<20}  {:<11}  {:<24}  {:<24}  {}",
        "LEVEL", "NAME", "STYLE", "STATUS", "ACTION", "POSTS"
    );
    println!("{}", "-".repeat(96));

    for card in cards {
        let name = card.tier.name.chars().take(20).collect::<String>();
        println!(
            "{:<5}  {:<20}  {:<11}  {:<24}  {:<24}  {}",
            card.tier.level,
            name,
            card.presentation.style_class.display_name(),
            card.presentation.status_text,
            card.presentation.cta_label,
            card.presentation.post_count
        );
    }
}

fn cmd_tap(engine: &TierEngine, path: &Path, tier_id: &str, format: OutputFormat) -> Result<()> {
    let snapshot = Snapshot::load(path)?;
    let tier = snapshot.catalog.find(&TierId::new(tier_id))?;
    let action = engine.tap(tier, snapshot.subscription.as_ref());

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&action)?);
        return Ok(());
    }

    match action {
        TapAction::Ignore { reason } => {
            println!("Tier '{}' is not actionable: {}", tier.name, reason.display_name())
        }
        TapAction::SubscribeFree { tier_id } => {
            println!("Subscribe for free to '{}' ({})", tier.name, tier_id)
        }
        TapAction::Purchase {
            tier_id,
            level,
            price,
        } => println!(
            "Purchase '{}' ({}, level {}) for {}",
            tier.name,
            tier_id,
            level,
            tiergate_core::status::format_price(price, engine.config().thousands_separator)
        ),
    }
    Ok(())
}
