//! Camera math and orbit interaction.

pub mod matrix;
mod orbit;

pub use orbit::OrbitCamera;
