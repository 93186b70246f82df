//! Gravenhold - Turn-Based Combat Campaign

pub mod campaign;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod encounter;
pub mod player;
pub mod progression;
