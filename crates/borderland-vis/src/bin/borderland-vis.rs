//! Borderland Border Demo
//!
//! Build the starting territory, then drive the border animation for a
//! fixed number of frames and print the final scene as JSON.
//!
//! Usage: borderland-vis [frames] [tick_ms] [config.json]

use std::env;
use std::fs;
use std::time::Duration;

use borderland_vis::{BorderScene, FrameScheduler, VisConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "borderland_vis=info,borderland_territory=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config = match args.get(3) {
        Some(path) => serde_json::from_str::<VisConfig>(&fs::read_to_string(path)?)?,
        None => VisConfig::default(),
    };
    if let Some(frames) = args.get(1).and_then(|s| s.parse().ok()) {
        config.frames = frames;
    }
    if let Some(tick_ms) = args.get(2).and_then(|s| s.parse().ok()) {
        config.tick_ms = tick_ms;
    }

    let mut scene = BorderScene::new(&config)?;
    scene.initialize()?;
    let destroyed = scene.take_destroyed();

    let state = scene.state();
    tracing::info!(
        buildings = state.registry().len(),
        border = state.border().len(),
        destroyed = destroyed.len(),
        "Starting border animation"
    );

    let mut scheduler = FrameScheduler::new();
    scene.animate_with(&mut scheduler);

    scheduler
        .run_for(config.frames, Duration::from_millis(config.tick_ms))
        .await;

    let frame = scene.render();
    tracing::info!(
        frame = frame.frame,
        segments = frame.outline.len(),
        labels = frame.labels.len(),
        "Rendering final frame"
    );

    println!("{}", serde_json::to_string_pretty(&scene.state().snapshot())?);
    println!("{}", serde_json::to_string(&frame)?);

    Ok(())
}
