//! HelixApp struct definition and window/renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use helix_config::schema::HelixConfig;
use helix_render::{FrameTimer, OrbitCamera, PointField, RenderState};

use super::animation::Animation;
use super::panel::ProgressControl;

/// Top-level application state.
pub struct HelixApp {
    pub(super) config: HelixConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    /// The generated field, held until the renderer consumes it.
    pub(super) field: Option<PointField>,

    // Frame updater state
    pub(super) animation: Animation,
    pub(super) progress: ProgressControl,
    pub(super) camera: OrbitCamera,
    pub(super) timer: FrameTimer,

    // Orbit input tracking
    pub(super) mouse_pressed: bool,
    pub(super) last_mouse_pos: Option<(f64, f64)>,
}

impl HelixApp {
    pub fn new(config: HelixConfig, field: PointField) -> Self {
        let animation = Animation::new(&config.animation);
        let progress = ProgressControl::new(&config.animation);
        let camera = OrbitCamera::new(&config.camera);
        Self {
            config,
            window: None,
            render_state: None,
            field: Some(field),
            animation,
            progress,
            camera,
            timer: FrameTimer::new(),
            mouse_pressed: false,
            last_mouse_pos: None,
        }
    }

    /// Create the window and render state. Returns false on failure, in
    /// which case the caller should exit the event loop.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                return false;
            }
        };

        let Some(field) = self.field.take() else {
            tracing::error!("point field already consumed");
            return false;
        };

        match pollster::block_on(RenderState::new(window.clone(), &self.config, &field)) {
            Ok(rs) => {
                self.render_state = Some(rs);
                self.window = Some(window);
                true
            }
            Err(e) => {
                tracing::error!("failed to initialize renderer: {e}");
                self.animation.fail();
                false
            }
        }
    }
}
