//! GPU context: instance, adapter, device, queue, and surface state.

use std::sync::Arc;

use winit::window::Window;

use super::types::{PhysicalSize, RendererError};

/// Owns the wgpu device/queue pair and the window surface.
///
/// Created once at startup; `resize` reconfigures the surface when the
/// window size changes.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub size: PhysicalSize,
    /// Device pixel ratio, capped by `window.max_pixel_ratio` from config.
    pub scale_factor: f64,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl GpuContext {
    /// Create a fully configured GPU context for a window.
    pub async fn new(window: Arc<Window>, max_pixel_ratio: f64) -> Result<Self, RendererError> {
        let inner = window.inner_size();
        let scale_factor = window.scale_factor().min(max_pixel_ratio);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RendererError::AdapterNotFound)?;

        tracing::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("helix device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: inner.width.max(1),
            height: inner.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            device,
            queue,
            size: PhysicalSize {
                width: config.width,
                height: config.height,
            },
            scale_factor,
            surface,
            config,
        })
    }

    /// Reconfigure the surface for a new window size. Zero dimensions are
    /// ignored (minimized window).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = PhysicalSize { width, height };
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquire the next surface texture to render into.
    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// The configured surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}
