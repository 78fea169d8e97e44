//! Grid Snake - a single-window Snake game built on ggez
//!
//! - `game`: rules and state, no I/O
//! - `tick`: fixed-period scheduling of game advances
//! - `input`: keyboard mapping
//! - `render`: frame composition and painting
//! - `app`: the ggez event handler tying them together

pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod tick;
