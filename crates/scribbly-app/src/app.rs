//! Core application state and lifecycle.

use std::sync::Arc;

use kurbo::{Point, Size};
use peniko::Color;
use scribbly_core::color::{DEFAULT_PALETTE, parse_palette};
use scribbly_core::{
    Board, BrushSettings, DEFAULT_BRUSH_SIZE, ShapeMode, SliderGeometry,
    toggle_fullscreen,
};
use scribbly_render::{CanvasRenderer, RasterSurface, RenderContext, RenderResult, Renderer, RendererError};
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::event_handler::EventHandler;
use crate::fullscreen::WindowFullscreen;
use crate::shortcuts::ShortcutRegistry;
use crate::ui::{DEFAULT_BRUSH_SIZES, UiAction, UiState, render_ui};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    /// Initial brush size.
    pub brush_size: f64,
    /// Palette swatches as CSS color strings.
    pub palette: Vec<String>,
    pub brush_sizes: Vec<f64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Scribbly".to_string(),
            width: 1280,
            height: 800,
            background_color: Color::WHITE,
            brush_size: DEFAULT_BRUSH_SIZE,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            brush_sizes: DEFAULT_BRUSH_SIZES.to_vec(),
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    canvas_renderer: CanvasRenderer,
    /// Copies the Rgba8 render target onto the surface format.
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // Drawing
    board: Board<RasterSurface>,
    event_handler: EventHandler,
    config: AppConfig,
}

/// Brush size in raster pixels for a size given in logical pixels.
fn physical_brush_size(size: f64, scale_factor: f64) -> f64 {
    size * scale_factor
}

impl AppState {
    /// Push the selected brush size to the board, scaled to the raster.
    fn apply_brush_size(&mut self) {
        let size = physical_brush_size(self.ui_state.brush_size, self.window.scale_factor());
        self.board.set_brush_size(size);
    }

    /// Apply a toolbar or shortcut action.
    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SetColor(mode) => {
                self.ui_state.color_mode = mode;
                self.board.select_color(mode);
            }
            UiAction::SetShape(shape) => {
                self.ui_state.shape = shape;
                self.board.select_shape(shape);
            }
            UiAction::SetBrushSize(size) => {
                self.ui_state.brush_size = size;
                self.apply_brush_size();
            }
            UiAction::ClearAll => self.board.clear_all(),
            UiAction::ToggleFullscreen => {
                toggle_fullscreen(&mut WindowFullscreen::new(&self.window));
            }
            UiAction::StartSlider => self.event_handler.start_slider(),
        }
    }

    /// Refresh UI-facing state from the board before drawing the UI.
    fn sync_ui(&mut self, pixels_per_point: f32) {
        self.ui_state.rainbow_color = self.board.state().brush.hue().color();
        self.ui_state.slider_offset = (self.event_handler.slider.handle_offset() as f32) / pixels_per_point;
        self.ui_state.slider_active = self.event_handler.slider.is_sliding();
        self.ui_state.is_fullscreen = self.window.fullscreen().is_some();
    }

    /// Record slider layout in physical pixels for global drag tracking.
    fn sync_slider_geometry(&mut self, pixels_per_point: f32) {
        let ppp = pixels_per_point as f64;
        self.event_handler.slider_geometry = self.ui_state.slider_layout.map(|layout| {
            SliderGeometry::new(
                layout.track.left() as f64 * ppp,
                layout.track.width() as f64 * ppp,
                layout.handle.width() as f64 * ppp,
            )
        });
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
        }
    }

    /// Run the application.
    pub async fn run() {
        Self::run_with_config(AppConfig::default()).await;
    }

    /// Run the application with a custom configuration.
    pub async fn run_with_config(config: AppConfig) {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("Failed to create event loop: {e}");
                return;
            }
        };
        let app = App::with_config(config);

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            if let Err(e) = event_loop.run_app(&mut app) {
                log::error!("Event loop error: {e}");
            }
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) -> RenderResult<()> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| RendererError::InitFailed("render context not initialized".into()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{e:?}")))?;

        // Vello renders to Rgba8Unorm but the surface may be Bgra8Unorm.
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let palette = parse_palette(&self.config.palette);
        let mut ui_state = UiState::new(palette, self.config.brush_sizes.clone());
        ui_state.brush_size = self.config.brush_size;
        let settings = BrushSettings {
            shape: ShapeMode::Line,
            color: ui_state.color_mode,
            size: physical_brush_size(self.config.brush_size, window.scale_factor()),
        };

        let raster = RasterSurface::new(surface.config.width, surface.config.height);
        let board = Board::with_settings(raster, settings);

        log::info!(
            "Scribbly initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            canvas_renderer: CanvasRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state,
            board,
            event_handler: EventHandler::new(),
            config: self.config.clone(),
        });

        self.pending_window = None;

        // Request initial redraw
        window.request_redraw();
        Ok(())
    }

    /// Log an init failure and stop the event loop.
    fn init_failed(event_loop: &ActiveEventLoop, err: RendererError) {
        log::error!("{err}");
        event_loop.exit();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        log::info!("Creating window...");

        #[cfg(not(target_arch = "wasm32"))]
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        // On WASM, attach a canvas to the DOM that fills the viewport
        #[cfg(target_arch = "wasm32")]
        let window_attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;

            let Some(canvas) = crate::web::canvas_element(&self.config) else {
                Self::init_failed(event_loop, RendererError::Surface("failed to create canvas".into()));
                return;
            };
            Window::default_attributes()
                .with_title(&self.config.title)
                .with_canvas(Some(canvas))
        };

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                Self::init_failed(event_loop, RendererError::Surface(e.to_string()));
                return;
            }
        };

        log::info!("Window created, initializing renderer...");

        #[cfg(not(target_arch = "wasm32"))]
        {
            let size = window.inner_size();
            let (width, height) = if size.width == 0 || size.height == 0 {
                (self.config.width, self.config.height)
            } else {
                (size.width, size.height)
            };

            let render_cx = self
                .render_cx
                .get_or_insert_with(vello::util::RenderContext::new);

            let surface = match pollster::block_on(render_cx.create_surface(
                window.clone(),
                width,
                height,
                PresentMode::AutoVsync,
            )) {
                Ok(surface) => surface,
                Err(e) => {
                    Self::init_failed(event_loop, RendererError::Surface(format!("{e:?}")));
                    return;
                }
            };

            // SAFETY: the surface borrows the window, which `AppState` keeps alive alongside it.
            let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
            if let Err(e) = self.finish_init(window, surface) {
                Self::init_failed(event_loop, e);
            }
        }

        // On WASM, store window for later async initialization
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // On WASM, handle async initialization
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            if let Some(window) = self.pending_window.clone() {
                if !self.init_in_progress.get() {
                    self.init_in_progress.set(true);

                    let (width, height) = crate::web::viewport_size(&self.config);

                    // Get raw pointer to self for async callback
                    let self_ptr = self as *mut Self;
                    let window_clone = window.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        log::info!("Creating surface asynchronously...");

                        let mut render_cx = vello::util::RenderContext::new();

                        match render_cx
                            .create_surface(window_clone.clone(), width, height, PresentMode::AutoVsync)
                            .await
                        {
                            Ok(surface) => {
                                log::info!("Surface created successfully");

                                // SAFETY: the surface borrows the window, which `AppState` keeps alive.
                                let surface: RenderSurface<'static> =
                                    unsafe { std::mem::transmute(surface) };

                                // SAFETY: WASM is single-threaded and the event loop keeps the App alive.
                                let app = unsafe { &mut *self_ptr };
                                app.render_cx = Some(render_cx);
                                if let Err(e) = app.finish_init(window_clone, surface) {
                                    log::error!("{e}");
                                    app.init_in_progress.set(false);
                                }
                            }
                            Err(e) => {
                                log::error!("Failed to create surface: {:?}", e);
                                let app = unsafe { &mut *self_ptr };
                                app.init_in_progress.set(false);
                            }
                        }
                    });
                }

                // Request redraw to keep the event loop running
                window.request_redraw();
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);

        // Keep canvas input away from the floating panels
        let egui_wants_input = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input()
            || state.egui_ctx.wants_keyboard_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                state.board.resize(size.width, size.height);

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("Scale factor changed to {scale_factor}");
                state.apply_brush_size();
            }

            WindowEvent::RedrawRequested => {
                let pixels_per_point = state.egui_ctx.pixels_per_point();
                state.sync_ui(pixels_per_point);

                // Run egui and get any actions
                let egui_input = state.egui_state.take_egui_input(&state.window);
                let mut action = None;
                let egui_output = state.egui_ctx.run(egui_input, |ctx| {
                    action = render_ui(ctx, &mut state.ui_state);
                });
                state.sync_slider_geometry(egui_output.pixels_per_point);
                if let Some(action) = action {
                    state.apply(action);
                }

                state
                    .egui_state
                    .handle_platform_output(&state.window, egui_output.platform_output);
                let egui_primitives = state
                    .egui_ctx
                    .tessellate(egui_output.shapes, egui_output.pixels_per_point);

                let width = state.surface.config.width;
                let height = state.surface.config.height;

                let ctx = RenderContext::new(
                    state.board.surface(),
                    Size::new(width as f64, height as f64),
                )
                .with_background(state.config.background_color);
                state.canvas_renderer.build_scene(&ctx);
                let base_color = state.canvas_renderer.background_color(&ctx);
                let scene = state.canvas_renderer.take_scene();

                // Render
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };

                let device_handle = &render_cx.devices[state.surface.dev_id];
                let device = &device_handle.device;
                let queue = &device_handle.queue;

                let surface_texture = match state.surface.surface.get_current_texture() {
                    Ok(t) => t,
                    Err(e) => {
                        log::warn!("Failed to get surface texture: {:?}", e);
                        return;
                    }
                };

                let params = RenderParams {
                    base_color,
                    width,
                    height,
                    antialiasing_method: AaConfig::Area,
                };

                // Vello needs StorageBinding, which WebGPU only offers on Rgba8Unorm.
                let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
                    label: Some("vello render texture"),
                    size: vello::wgpu::Extent3d {
                        width,
                        height,
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: vello::wgpu::TextureDimension::D2,
                    format: vello::wgpu::TextureFormat::Rgba8Unorm,
                    usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                        | vello::wgpu::TextureUsages::COPY_SRC
                        | vello::wgpu::TextureUsages::TEXTURE_BINDING,
                    view_formats: &[],
                });

                let render_texture_view =
                    render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

                if let Err(e) = state.vello_renderer.render_to_texture(
                    device,
                    queue,
                    &scene,
                    &render_texture_view,
                    &params,
                ) {
                    log::error!("{}", RendererError::RenderFailed(format!("{e:?}")));
                    return;
                }

                let surface_view = surface_texture
                    .texture
                    .create_view(&vello::wgpu::TextureViewDescriptor::default());

                // Blit the RGBA intermediate texture to the surface texture
                {
                    let mut blit_encoder =
                        device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                            label: Some("blit encoder"),
                        });

                    state.texture_blitter.copy(
                        device,
                        &mut blit_encoder,
                        &render_texture_view,
                        &surface_view,
                    );

                    queue.submit(std::iter::once(blit_encoder.finish()));
                }

                // Update egui textures
                for (id, image_delta) in &egui_output.textures_delta.set {
                    state
                        .egui_renderer
                        .update_texture(device, queue, *id, image_delta);
                }

                // Render egui on top
                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [width, height],
                    pixels_per_point: egui_output.pixels_per_point,
                };

                {
                    let mut egui_encoder =
                        device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                            label: Some("egui encoder"),
                        });

                    state.egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut egui_encoder,
                        &egui_primitives,
                        &screen_descriptor,
                    );

                    let render_pass =
                        egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                            label: Some("egui render pass"),
                            color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                                view: &surface_view,
                                resolve_target: None,
                                ops: vello::wgpu::Operations {
                                    load: vello::wgpu::LoadOp::Load,
                                    store: vello::wgpu::StoreOp::Store,
                                },
                                depth_slice: None,
                            })],
                            depth_stencil_attachment: None,
                            timestamp_writes: None,
                            occlusion_query_set: None,
                        });

                    // egui-wgpu wants a 'static render pass
                    let mut render_pass = render_pass.forget_lifetime();
                    state
                        .egui_renderer
                        .render(&mut render_pass, &egui_primitives, &screen_descriptor);
                    drop(render_pass);

                    queue.submit(std::iter::once(egui_encoder.finish()));
                }

                // Free egui textures
                for id in &egui_output.textures_delta.free {
                    state.egui_renderer.free_texture(id);
                }
                surface_texture.present();
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let point = Point::new(position.x, position.y);
                state
                    .event_handler
                    .cursor_moved(&mut state.board, point, egui_wants_input);
            }

            WindowEvent::CursorLeft { .. } => {
                state.event_handler.cursor_left(&mut state.board);
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                state.event_handler.mouse_input(
                    &mut state.board,
                    button,
                    btn_state == ElementState::Pressed,
                    egui_wants_input,
                );
            }

            WindowEvent::Touch(touch) => {
                let point = Point::new(touch.location.x, touch.location.y);
                state.event_handler.touch(
                    &mut state.board,
                    touch.id,
                    touch.phase,
                    point,
                    egui_wants_input,
                );
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if egui_wants_input || event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let Some(action) = ShortcutRegistry::action_for(&event.logical_key) {
                    log::debug!("Shortcut: {action:?}");
                    state.apply(action);
                }
            }

            _ => {}
        }
    }
}
