//! Fullscreen toggling and its single error path.

use thiserror::Error;

/// A rejected fullscreen request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error attempting to enable full-screen mode: {message} ({name})")]
pub struct FullscreenError {
    /// Error class reported by the host, e.g. `NotAllowedError`.
    pub name: String,
    /// Human readable reason.
    pub message: String,
}

impl FullscreenError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Platform side of fullscreen handling.
pub trait FullscreenHost {
    /// Whether the app is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Ask the platform to go fullscreen.
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Leave fullscreen.
    fn exit_fullscreen(&mut self);

    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);
}

/// Enter fullscreen, or leave it if already active.
///
/// A rejected request is logged and reported to the user through
/// [`FullscreenHost::alert`].
pub fn toggle_fullscreen<H: FullscreenHost + ?Sized>(host: &mut H) {
    if host.is_fullscreen() {
        log::info!("Leaving fullscreen");
        host.exit_fullscreen();
        return;
    }
    match host.request_fullscreen() {
        Ok(()) => log::info!("Entered fullscreen"),
        Err(err) => {
            log::error!("{err}");
            host.alert(&err.to_string());
        }
    }
}
