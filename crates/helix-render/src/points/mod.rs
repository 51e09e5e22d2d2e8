//! The point field and its render pipeline.

mod field;
mod pipeline;
mod types;

pub use field::PointField;
pub use pipeline::PointsPipeline;
pub use types::{PointInstance, PointUniforms};
