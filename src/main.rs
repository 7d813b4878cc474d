//! Arena Engine demo
//!
//! Seeds an in-memory roster, runs one free-for-all across every character
//! and prints the fight log followed by the high-score table.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arena_engine::application::services::CharacterService;
use arena_engine::infrastructure::config::AppConfig;
use arena_engine::infrastructure::seed::{apply_roster, RosterFile};
use arena_engine::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Arena Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Baseline HP: {}", config.combat.baseline_hit_points);
    tracing::info!("  Round cap: {:?}", config.combat.max_rounds);
    tracing::info!("  RNG seed: {:?}", config.rng_seed);

    let roster = match &config.roster_path {
        Some(path) => RosterFile::load(path).await?,
        None => RosterFile::builtin(),
    };

    let state = AppState::new(config).await?;
    apply_roster(&state, roster).await?;

    let participants: Vec<_> = state
        .character_service
        .list_characters()
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    let report = state.fight_service.fight(&participants).await?;
    println!("=== Fight ({} rounds) ===", report.rounds);
    for line in &report.log {
        println!("{}", line);
    }

    println!();
    println!("=== High score ===");
    println!("{:<20} {:>6} {:>9} {:>7}", "Name", "Fights", "Victories", "Defeats");
    for entry in state.fight_service.high_score().await? {
        println!(
            "{:<20} {:>6} {:>9} {:>7}",
            entry.name, entry.fights, entry.victories, entry.defeats
        );
    }

    Ok(())
}
