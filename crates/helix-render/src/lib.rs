pub mod bloom;
pub mod camera;
pub mod dispersion;
pub mod gpu;
pub mod perf;
pub mod points;
pub mod render_state;

pub use camera::OrbitCamera;
pub use gpu::GpuContext;
pub use perf::FrameTimer;
pub use points::PointField;
pub use render_state::{FrameInputs, RenderState};
