//! # engine_app — demo scene
//!
//! Builds a small scene in a [`World`](engine_component::World) and logs what
//! the camera sees.
//!
//! ## Startup Sequence
//!
//! 1. Initialise structured logging (`RUST_LOG`, default `engine_app=info`).
//! 2. Read [`WorldConfig`] from the `ENGINE_*` environment variables.
//! 3. Build the demo scene and log its report.

mod scene;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine_component::{World, WorldConfig};

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("engine_app=info".parse()?))
        .init();

    let config = WorldConfig::from_env();
    info!(
        initial_capacity = config.initial_capacity,
        replace_components = config.replace_components,
        "creating world"
    );

    let mut world = World::with_config(config);
    let demo = scene::build(&mut world).context("failed to build demo scene")?;

    for entity in world.entities() {
        if let Some(game_object) = world.game_object(entity) {
            let components = world.component_types(entity)?.len();
            info!(
                %entity,
                game_object = %game_object,
                position = %game_object.transform().position,
                rotation = %game_object.transform().rotation,
                components,
                "scene object"
            );
        }
    }

    let report = scene::report(&world, &demo).context("failed to inspect demo scene")?;
    info!(
        distance = report.distance,
        view_angle = report.view_angle,
        player_visible = report.player_visible,
        player_health = report.player_health,
        "camera report"
    );

    Ok(())
}
