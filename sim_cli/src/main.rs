//! Headless driver: plays an AI-vs-AI match and reads a row of city watches.

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Game, GameConfig, Side};
use glam::Vec2;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use watch_core::{Label, LabelSink, SystemClock, Watch, WatchConfig};

#[derive(Debug, Parser)]
#[command(name = "pong-sim", about = "Run the Pong core and world watches without a renderer")]
struct Args {
    /// Simulated seconds of play
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// Frames per simulated second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for serves
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// JSON file of game option overrides
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// City to put a watch on (repeatable)
    #[arg(long = "city", default_values_t = vec!["Oporto".to_string(), "Tokyo".to_string()])]
    cities: Vec<String>,
}

/// Prints labels through the log instead of a page
struct LogLabels;

impl LabelSink for LogLabels {
    fn show(&mut self, label: Label) {
        info!(text = %label.text, left = label.left, top = label.top, "label");
    }
}

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG=debug shows every contact
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_json(&text)?
        }
        None => GameConfig::new(),
    };

    run_match(&args, config)?;
    read_watches(&args.cities)?;
    Ok(())
}

fn run_match(args: &Args, config: GameConfig) -> Result<()> {
    let mut game = Game::new(config, args.seed)?;
    let dt = 1.0 / args.fps.max(1) as f32;
    let frames = (args.seconds.max(0.0) * args.fps as f32) as u64;

    let mut rallies = 0u32;
    for _ in 0..frames {
        game.drive_with_ai(Side::Left);
        game.drive_with_ai(Side::Right);
        game.frame(dt);

        if game.events.ball_hit_paddle {
            rallies += 1;
        }
        if game.events.left_scored || game.events.right_scored {
            let (left, right) = scores(&game);
            info!(left, right, t = game.time.now, "point");
        }
        if let Some(side) = game.winner() {
            info!(?side, t = game.time.now, "match won");
            game.restart();
        }
    }

    let (left, right) = scores(&game);
    info!(left, right, rallies, seconds = game.time.now, "simulation finished");
    Ok(())
}

fn scores(game: &Game) -> (u32, u32) {
    let score = |side| game.player(side).map_or(0, |p| p.score);
    (score(Side::Left), score(Side::Right))
}

fn read_watches(cities: &[String]) -> Result<()> {
    let count = cities.len().max(1) as f32;
    let radius = (0.9 / count).min(0.4);
    for (i, city) in cities.iter().enumerate() {
        let x = -1.0 + (2.0 * i as f32 + 1.0) / count;
        let config = WatchConfig::for_city(city.clone(), Vec2::new(x, 0.0), radius);
        let mut watch = Watch::new(config, SystemClock, &mut LogLabels)?;
        let hands = watch.update();
        info!(
            city = watch.city().name,
            hour = hands.hour,
            minute = hands.minute,
            second = hands.second,
            "watch"
        );
    }
    Ok(())
}
