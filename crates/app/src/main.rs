//! Cube decorator demo - Main Entry Point
//!
//! Builds a small scene, decorates its cube with scale, rotation and
//! color effects, and applies the combined behavior once.

use anyhow::Result;
use tracing::info;

use cubes_app::{CompositionConfig, demo_scene, start};
use cubes_behavior::Cube;

fn main() -> Result<()> {
    cubes_core::init_logging();
    info!("Starting cube decorator demo");

    let mut scene = demo_scene();
    let cube = start(&mut scene, &CompositionConfig::default())?;

    let object = scene.object(cube.spatial_handle())?;
    let transform = object.transform;
    info!(
        name = %object.name,
        scale = ?transform.scale,
        rotation = ?transform.rotation,
        color = ?object.color().map(|c| c.to_string()),
        "Final cube state"
    );
    info!(entries = scene.journal().len(), "Startup complete, idling");

    Ok(())
}
