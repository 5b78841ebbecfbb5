//! Scribbly Application
//!
//! The application shell providing windowing, input routing, the toolbar UI
//! and presentation of the drawing canvas.

mod app;
mod event_handler;
mod fullscreen;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig};
pub use event_handler::EventHandler;
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{render_ui, UiAction, UiState};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
