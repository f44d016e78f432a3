//! Headless battle runner
//!
//! Places two mirrored armies, starts the battle, and runs it to
//! resolution, logging events as they happen. Prints the final render
//! snapshot as JSON so the outcome can be inspected or piped elsewhere.

use clap::Parser;

use skirmish::battle::{BattleEventKind, BattleState, Team, UnitType, Winner};
use skirmish::core::types::Vec2;

#[derive(Parser, Debug)]
#[command(name = "headless-battle", about = "Run a battle to resolution without a renderer")]
struct Cli {
    /// RNG seed; the same seed and layout reproduce the same battle
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Units per team (cycled through infantry, cavalry, artillery)
    #[arg(long, default_value_t = 9)]
    units: usize,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!(seed = cli.seed, units = cli.units, "setting up battle");

    let mut state = BattleState::new(cli.seed);
    let types = [UnitType::Infantry, UnitType::Cavalry, UnitType::Artillery];

    // Two facing columns, spaced past the placement minimum
    for i in 0..cli.units {
        let y = 100.0 + i as f32 * 25.0;
        let unit_type = types[i % types.len()];
        if let Err(e) = state.place_unit(Team::Red, unit_type, Vec2::new(100.0, y)) {
            tracing::warn!(error = %e, "red placement rejected");
        }
        if let Err(e) = state.place_unit(Team::Blue, unit_type, Vec2::new(900.0, y)) {
            tracing::warn!(error = %e, "blue placement rejected");
        }
    }

    state.start_battle();

    let mut shots = 0usize;
    let mut hits = 0usize;
    let mut melees = 0usize;
    while !state.is_resolved() && state.tick < cli.max_ticks {
        let events = state.run_tick();
        for event in &events.events {
            match event.kind {
                BattleEventKind::ShotFired { .. } => shots += 1,
                BattleEventKind::ProjectileHit { .. } => hits += 1,
                BattleEventKind::MeleeResolved { .. } => melees += 1,
                _ => {}
            }
        }
    }

    match state.winner {
        Some(Winner::Red) => tracing::info!(tick = state.tick, "red carries the field"),
        Some(Winner::Blue) => tracing::info!(tick = state.tick, "blue carries the field"),
        Some(Winner::Draw) => tracing::info!(tick = state.tick, "mutual annihilation"),
        None => tracing::warn!(tick = state.tick, "tick limit reached with no winner"),
    }
    tracing::info!(
        shots,
        hits,
        melees,
        red_survivors = state.roster(Team::Red).len(),
        blue_survivors = state.roster(Team::Blue).len(),
        "battle statistics"
    );

    match serde_json::to_string_pretty(&state.view()) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize final snapshot"),
    }
}
