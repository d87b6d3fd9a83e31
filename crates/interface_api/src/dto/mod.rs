//! Data transfer objects

pub mod game;
