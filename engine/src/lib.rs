//! N-in-a-row game engine: a rectangular board with a configurable win
//! length, two sides, win/draw detection and a two-ply opponent.

pub mod config;
pub mod game;
pub mod logger;
