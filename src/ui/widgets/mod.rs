//! Single-line widgets framing the playfield.

pub mod footer;
pub mod hud;
