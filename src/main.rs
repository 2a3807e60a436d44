use bevy::prelude::*;
use bevy::window::WindowResolution;

use dotfield::config::{self, FieldConfig};
use dotfield::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use dotfield::{rendering, simulation};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dotfield".into(),
                resolution: WindowResolution::new(SURFACE_WIDTH as u32, SURFACE_HEIGHT as u32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        // Full-surface black clear every frame — the renderer's only wipe.
        .insert_resource(ClearColor(Color::BLACK))
        // Insert FieldConfig with compiled defaults; load_field_config will
        // overwrite it from assets/field.toml (if present) in the Startup
        // schedule.
        .insert_resource(FieldConfig::default())
        .add_plugins(simulation::SimulationPlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_field_config,
                rendering::setup_camera.after(config::load_field_config),
                rendering::init_dot_mesh.after(config::load_field_config),
                rendering::setup_stats_text.after(config::load_field_config),
                simulation::seed_field_system.after(config::load_field_config),
            ),
        )
        .add_systems(
            Update,
            (
                rendering::sync_dot_visuals_system,
                rendering::stats_display_system,
            )
                .chain()
                .after(simulation::collision_system),
        )
        .run();
}
