//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! The rules engine is a standalone, UI-free state machine; the terminal
//! front end renders purely from values the engine returns.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, player, turn-state engine
//! - [`ui`] - Terminal UI: interactive game view
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
