//! HS Finder TUI library exports.

pub mod api_client;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod keys;
pub mod nav;
pub mod notifications;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod theme;
pub mod traits;
pub mod types;
pub mod views;
pub mod widgets;
