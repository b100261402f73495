//! CLI infrastructure for playing against and inspecting the engine

pub mod commands;
pub mod config;
pub mod output;
