//! Platform fullscreen hosts.

use scribbly_core::{FullscreenError, FullscreenHost};
use winit::window::Window;

/// Fullscreen through the native window.
#[cfg(not(target_arch = "wasm32"))]
pub struct WindowFullscreen<'a> {
    window: &'a Window,
}

#[cfg(not(target_arch = "wasm32"))]
impl<'a> WindowFullscreen<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FullscreenHost for WindowFullscreen<'_> {
    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.window.current_monitor().is_none() {
            return Err(FullscreenError::new(
                "NotSupportedError",
                "no monitor available for the window",
            ));
        }
        self.window
            .set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.window.set_fullscreen(None);
    }

    fn alert(&mut self, message: &str) {
        #[cfg(feature = "native")]
        {
            let _ = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(self.window.title())
                .set_description(message)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
        #[cfg(not(feature = "native"))]
        log::warn!("{message}");
    }
}

/// Fullscreen through the browser's Fullscreen API on the drawing canvas.
#[cfg(target_arch = "wasm32")]
pub struct WindowFullscreen<'a> {
    window: &'a Window,
}

#[cfg(target_arch = "wasm32")]
impl<'a> WindowFullscreen<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::{Function, Promise, Reflect};
    use scribbly_core::FullscreenError;
    use wasm_bindgen::{JsCast, JsValue};

    /// Read a string property off a JS error, falling back to `default`.
    fn error_field(err: &JsValue, field: &str, default: &str) -> String {
        Reflect::get(err, &JsValue::from_str(field))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| default.to_string())
    }

    pub fn to_fullscreen_error(err: &JsValue) -> FullscreenError {
        FullscreenError::new(
            error_field(err, "name", "Error"),
            error_field(err, "message", "unknown error"),
        )
    }

    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Call `element.requestFullscreen()` and return its promise, if any.
    pub fn request(element: &web_sys::Element) -> Result<Option<Promise>, JsValue> {
        let method: Function = Reflect::get(element, &JsValue::from_str("requestFullscreen"))?
            .dyn_into()?;
        let result = method.call0(element)?;
        Ok(result.dyn_into::<Promise>().ok())
    }
}

#[cfg(target_arch = "wasm32")]
impl FullscreenHost for WindowFullscreen<'_> {
    fn is_fullscreen(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.fullscreen_element())
            .is_some()
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        use winit::platform::web::WindowExtWebSys;

        let Some(canvas) = self.window.canvas() else {
            return Err(FullscreenError::new("NotFoundError", "canvas element is missing"));
        };
        let promise = web::request(&canvas).map_err(|err| web::to_fullscreen_error(&err))?;

        // Most browsers reject asynchronously, so report through the same alert path.
        if let Some(promise) = promise {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    let err = web::to_fullscreen_error(&err);
                    log::error!("{err}");
                    web::alert(&err.to_string());
                }
            });
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.exit_fullscreen();
        }
    }

    fn alert(&mut self, message: &str) {
        web::alert(message);
    }
}
