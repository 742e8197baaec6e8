//! Terminal UI: the interactive game view for playing Connect Four.
//!
//! The UI holds no game truth of its own; it re-renders from engine
//! queries and the structured results of `drop_piece`.

mod app;
mod game_view;

pub use app::App;
