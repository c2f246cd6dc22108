//! CLI infrastructure for the Hexapawn engine
//!
//! This module provides the command-line interface for playing against the
//! engine, training its strategy table, and inspecting a saved table.

pub mod commands;
pub mod config;
pub mod output;
