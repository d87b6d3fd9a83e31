//! Request handlers

pub mod game;
pub mod health;
