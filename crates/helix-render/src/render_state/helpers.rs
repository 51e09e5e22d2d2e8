//! Small render-state helpers.

use std::sync::Once;

static FIRST_FRAME: Once = Once::new();

/// Log surface details once, on the first presented frame.
pub(super) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    FIRST_FRAME.call_once(|| {
        tracing::info!("first frame presented: {width}x{height}, {format:?}");
    });
}
