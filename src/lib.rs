//! Dotfield — an interactive 2D particle field.
//!
//! Circular dots drift across a black window, bounce off the edges, home
//! toward the cursor while the left button is held, collide elastically with
//! each other, and spawn in bursts on right-click.

pub mod collision;
pub mod config;
pub mod constants;
pub mod dot;
pub mod error;
pub mod input;
pub mod motion;
pub mod rendering;
pub mod simulation;
