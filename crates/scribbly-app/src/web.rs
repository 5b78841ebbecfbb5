//! WebAssembly entry point and platform-specific code.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::AppConfig;

/// DOM id of the drawing canvas.
pub const CANVAS_ID: &str = "scribbly-canvas";

/// Browser viewport size in CSS pixels, falling back to the configured size.
fn css_viewport(window: &web_sys::Window, config: &AppConfig) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(config.width as f64);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(config.height as f64);
    (width, height)
}

/// Viewport size in physical pixels.
pub fn viewport_size(config: &AppConfig) -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return (config.width, config.height);
    };
    let dpr = window.device_pixel_ratio();
    let (width, height) = css_viewport(&window, config);
    ((width * dpr) as u32, (height * dpr) as u32)
}

/// Find or create the full-viewport drawing canvas.
pub fn canvas_element(config: &AppConfig) -> Option<web_sys::HtmlCanvasElement> {
    let window = web_sys::window()?;
    let document = window.document()?;

    if let Some(loading) = document.get_element_by_id("loading") {
        loading.remove();
    }

    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(element) => element.dyn_into::<web_sys::HtmlCanvasElement>().ok()?,
        None => {
            let canvas = document.create_element("canvas").ok()?;
            canvas.set_id(CANVAS_ID);
            let parent: web_sys::Element = match document.get_element_by_id("app") {
                Some(app) => app,
                None => document.body()?.into(),
            };
            parent.append_child(&canvas).ok()?;
            canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()?
        }
    };

    let (width, height) = viewport_size(config);
    canvas.set_width(width);
    canvas.set_height(height);
    let style = canvas.style();
    for (property, value) in [
        ("width", "100%"),
        ("height", "100%"),
        ("display", "block"),
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        // Touch drags draw instead of scrolling the page.
        ("touch-action", "none"),
    ] {
        let _ = style.set_property(property, value);
    }

    log::info!(
        "Canvas created: {}x{} (dpr: {})",
        width,
        height,
        window.device_pixel_ratio()
    );
    Some(canvas)
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&format!("Failed to initialize logger: {e}")));
    }

    log::info!("Starting Scribbly (WASM)");

    crate::App::run().await;
}
