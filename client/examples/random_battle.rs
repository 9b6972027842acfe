//! Random Battle Example
//!
//! Fills the roster from the command line (if it is empty), draws a random
//! opponent, fights it and replays the battle in the terminal.
//!
//! Needs a json-server store with `team` and `battles` collections:
//!
//! ```text
//! npx json-server --port 3001 db.json
//! RUST_LOG=debug cargo run -p pokeduel-client --example random_battle -- pikachu charizard
//! ```
//!
//! Pass `--fast` to skip the pauses between steps.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use pokeduel_battle::{LogEntry, Side};
use pokeduel_client::{ClientConfig, PokeduelClient};
use pokeduel_replay::{Frame, Pacing, Replay, ReplayHandler};

struct TerminalView;

#[async_trait]
impl ReplayHandler for TerminalView {
    async fn on_update(&mut self, frame: &Frame) {
        for line in &frame.revealed {
            println!("  {}", line.text);
        }
        println!(
            "    [{} {}/{}]  vs  [{} {}/{}]",
            frame.player.name,
            frame.player.hp,
            frame.player.max_hp,
            frame.opponent.name,
            frame.opponent.hp,
            frame.opponent.max_hp,
        );
    }

    async fn on_complete(&mut self, log: &[LogEntry], winner: Side) {
        if let Some(last) = log.last() {
            println!("  {}", last.text);
        }
        println!("Winner: {winner} ({} log lines)", log.len());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut fast = false;
    let mut names = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--fast" => fast = true,
            _ => names.push(arg),
        }
    }

    let arena = PokeduelClient::from_config(ClientConfig::from_env());

    if arena.roster().await.context("Failed to read roster")?.is_empty() {
        if names.is_empty() {
            bail!("Roster is empty; pass creature names to add, e.g. `pikachu bulbasaur`");
        }
        for name in &names {
            let creature = arena
                .add_to_roster(name)
                .await
                .with_context(|| format!("Failed to add {name}"))?;
            println!("Added {} to the roster", creature.display_name());
        }
    }

    let roster = arena.roster().await?;
    println!(
        "Your roster: {}",
        roster
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let opponent = arena
        .generate_opponent(&mut rand::thread_rng())
        .await
        .context("Failed to generate opponent roster")?;
    println!(
        "Opponent: {}",
        opponent
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let battle = arena.battle(&opponent, &mut rand::thread_rng()).await?;

    let pacing = if fast { Pacing::instant() } else { Pacing::default() };
    let replay = Replay::new(battle, pacing);
    let handle = replay.handle();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    replay.run(&mut TerminalView).await?;

    let summary = arena.history_summary().await?;
    println!(
        "Record: {} wins / {} losses ({}% win rate)",
        summary.wins, summary.losses, summary.win_rate
    );

    Ok(())
}
