//! Rendering: camera, shared circle mesh, dot visuals, and the count overlay.
//!
//! The surface clear is `ClearColor(Color::BLACK)` installed in `main.rs` —
//! a full overwrite every frame, no dirty-rect tracking.
//!
//! Dots are painted through a mirror layer: one ECS entity per store slot,
//! sharing a single unit circle mesh ([`DotMesh`]) and carrying its own
//! [`ColorMaterial`].  [`sync_dot_visuals_system`] spawns entities lazily
//! for new slots (the store only grows, so visuals are never despawned) and
//! copies position/scale from the store each frame.  Slot order maps to
//! increasing z, so later-spawned dots paint on top of earlier ones.

use crate::config::FieldConfig;
use crate::constants::CIRCLE_MESH_SIDES;
use crate::dot::DotField;
use crate::input::SurfaceBounds;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

/// Z spacing between consecutive store slots.  The default 2D camera sees
/// 1000 world units of depth, so at 1e-4 the slot index can reach into the
/// millions before a dot falls off the far plane.
const Z_STEP: f32 = 1e-4;

// ── Resources ────────────────────────────────────────────────────────────────

/// Shared unit circle mesh used by every dot visual (created once at startup).
#[derive(Resource)]
pub struct DotMesh(pub Handle<Mesh>);

// ── Components ───────────────────────────────────────────────────────────────

/// Links a visual entity to its store slot in [`DotField`].
#[derive(Component, Debug, Clone, Copy)]
pub struct DotVisual(pub usize);

/// Marker for the dot-count overlay text.
#[derive(Component)]
pub struct StatsTextDisplay;

// ── Startup systems ──────────────────────────────────────────────────────────

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}

/// Create the shared unit circle mesh and store it as a [`DotMesh`] resource.
pub fn init_dot_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let handle = meshes.add(circle_mesh(CIRCLE_MESH_SIDES));
    commands.insert_resource(DotMesh(handle));
}

/// Spawn the dot-count overlay in the top-left corner.
pub fn setup_stats_text(mut commands: Commands, config: Res<FieldConfig>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        Text::new("Dots: 0"),
        TextFont {
            font_size: config.stats_font_size,
            ..default()
        },
        TextColor(Color::srgb(0.0, 1.0, 1.0)),
        StatsTextDisplay,
    ));
}

// ── Update systems ───────────────────────────────────────────────────────────

/// Mirror the dot store into visual entities.
///
/// New store slots get a freshly spawned entity with the shared mesh and a
/// material built from the dot's fixed colour; existing entities get their
/// transform refreshed from the store.  The surface→world mapping recentres
/// the top-left-origin simulation frame on the camera and flips y.
pub fn sync_dot_visuals_system(
    mut commands: Commands,
    field: Res<DotField>,
    dot_mesh: Res<DotMesh>,
    bounds: Res<SurfaceBounds>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut visuals: Query<(&DotVisual, &mut Transform)>,
    mut spawned: Local<usize>,
) {
    // Refresh existing visuals from the store.
    for (visual, mut transform) in visuals.iter_mut() {
        if let Some(dot) = field.get(visual.0) {
            transform.translation = surface_to_world(dot.position, &bounds, visual.0);
        }
    }

    // Spawn visuals for slots added since last frame.
    for slot in *spawned..field.len() {
        let Some(dot) = field.get(slot) else {
            break;
        };
        let material = materials.add(ColorMaterial::from_color(dot.color));
        commands.spawn((
            DotVisual(slot),
            Mesh2d(dot_mesh.0.clone()),
            MeshMaterial2d(material),
            Transform {
                translation: surface_to_world(dot.position, &bounds, slot),
                scale: Vec3::splat(dot.radius),
                ..default()
            },
        ));
    }
    *spawned = field.len();
}

/// Refresh the dot-count overlay.
pub fn stats_display_system(
    field: Res<DotField>,
    mut text_query: Query<&mut Text, With<StatsTextDisplay>>,
) {
    for mut text in text_query.iter_mut() {
        *text = Text::new(format!("Dots: {}", field.len()));
    }
}

/// Map surface coordinates (origin top-left, y down) to world coordinates
/// (origin centre, y up), with z increasing by store slot so insertion order
/// becomes paint order.
fn surface_to_world(position: Vec2, bounds: &SurfaceBounds, slot: usize) -> Vec3 {
    Vec3::new(
        position.x - bounds.width / 2.0,
        bounds.height / 2.0 - position.y,
        slot as f32 * Z_STEP,
    )
}

// ── Mesh helper ──────────────────────────────────────────────────────────────

/// Build a unit-radius filled circle mesh approximated by an `n`-sided
/// regular polygon.
///
/// Uses a triangle fan from the centre: `(0, i, i+1 mod n)`.  Per-dot size
/// comes from the transform scale, so a single mesh serves every dot.
fn circle_mesh(sides: u32) -> Mesh {
    let n = sides as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(n + 1);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(n + 1);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(n + 1);

    // Centre vertex.
    positions.push([0.0, 0.0, 0.0]);
    normals.push([0.0, 0.0, 1.0]);
    uvs.push([0.5, 0.5]);

    for i in 0..n {
        let angle = std::f32::consts::TAU * i as f32 / n as f32;
        let x = angle.cos();
        let y = angle.sin();
        positions.push([x, y, 0.0]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([x / 2.0 + 0.5, y / 2.0 + 0.5]);
    }

    let mut indices: Vec<u32> = Vec::with_capacity(n * 3);
    for i in 0..n as u32 {
        let v1 = i + 1;
        let v2 = (i + 1) % n as u32 + 1;
        indices.extend_from_slice(&[0, v1, v2]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
