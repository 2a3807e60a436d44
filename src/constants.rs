//! Centralised simulation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::FieldConfig`] mirrors every constant below and can
//! override any subset at startup from `assets/field.toml`.

// ── Window / Surface ──────────────────────────────────────────────────────────

/// Initial window width in logical pixels.
///
/// The simulation reads the live window size every frame, so resizing the
/// window resizes the field; this value only seeds the first frame.
pub const SURFACE_WIDTH: f32 = 1200.0;

/// Initial window height in logical pixels.
pub const SURFACE_HEIGHT: f32 = 680.0;

// ── Field Population ──────────────────────────────────────────────────────────

/// Number of dots seeded at startup.
///
/// 60 gives a lively, frequently-colliding field at the default window size.
/// A sparse "drift" field works well around 20.  There is no upper cap, but
/// the collision pass is O(n²), so counts above a few hundred will eat the
/// frame budget.
pub const SEED_COUNT: usize = 60;

/// Number of dots appended per right-click burst.
pub const SPAWN_BURST_COUNT: usize = 5;

// ── Dot Geometry ──────────────────────────────────────────────────────────────

/// Minimum dot radius (logical pixels).  Must stay strictly positive.
pub const RADIUS_MIN: f32 = 20.0;

/// Maximum dot radius (logical pixels).  Must exceed [`RADIUS_MIN`].
pub const RADIUS_MAX: f32 = 50.0;

// ── Motion ────────────────────────────────────────────────────────────────────

/// Lower bound of the uniform range for initial velocity components.
///
/// Seeded and burst-spawned dots get `speed_x`, `speed_y` drawn independently
/// from `[INITIAL_SPEED_MIN, INITIAL_SPEED_MAX)`, in pixels per frame.
pub const INITIAL_SPEED_MIN: f32 = -2.0;

/// Upper bound of the initial velocity range.  Must exceed
/// [`INITIAL_SPEED_MIN`].
pub const INITIAL_SPEED_MAX: f32 = 2.0;

/// Lower bound of the uniform range used when the left button is released.
///
/// Every dot's velocity components are re-rolled into
/// `[RELEASE_SPEED_MIN, RELEASE_SPEED_MAX)` on release.  The bounds are
/// independent, so the range need not straddle zero: setting 4.0/10.0 sends
/// the whole field scattering down-right on every release.
pub const RELEASE_SPEED_MIN: f32 = -2.0;

/// Upper bound of the release velocity range.  Must exceed
/// [`RELEASE_SPEED_MIN`].
pub const RELEASE_SPEED_MAX: f32 = 2.0;

/// Scale factor from pointer distance to homing speed while the left button
/// is held.
///
/// Velocity is set to `(pointer - dot) * POINTER_PULL_FACTOR` each frame, so
/// speed is proportional to distance: far dots rush in, near dots settle.
/// Tested range: 0.0005–0.005.  Larger values overshoot visibly.
pub const POINTER_PULL_FACTOR: f32 = 0.001;

// ── Collision ─────────────────────────────────────────────────────────────────

/// Centre distance below which an overlapping pair is skipped for the frame.
///
/// At (near-)zero separation there is no usable collision normal; resolving
/// anyway would divide by zero and feed NaN into position state, which the
/// additive integrator can never recover from.  The pair separates naturally
/// on a later frame once integration moves either dot.
pub const DISTANCE_EPSILON: f32 = 1e-4;

// ── Colour ────────────────────────────────────────────────────────────────────

/// Fixed HSL saturation for dot colours (0–1).
pub const COLOR_SATURATION: f32 = 0.90;

/// Fixed HSL lightness for dot colours (0–1).
pub const COLOR_LIGHTNESS: f32 = 0.45;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Segment count for the shared unit circle mesh.
///
/// 48 sides keeps even 50-pixel dots visually round; the mesh is built once
/// and shared by every dot, so the cost is paid a single time.
pub const CIRCLE_MESH_SIDES: u32 = 48;

/// Font size for the dot-count overlay.
pub const STATS_FONT_SIZE: f32 = 14.0;
