//! XHS Copilot: turns a short idea into a Xiaohongshu carousel post with
//! generated cover images.

pub mod ai;
pub mod config;
pub mod content;
pub mod export;
pub mod preview;
pub mod session;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod theme;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
