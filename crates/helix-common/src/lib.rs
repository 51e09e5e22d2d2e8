//! Shared types for the helix workspace: error taxonomy and colors.

pub mod color;
pub mod errors;

pub use color::Color;
pub use errors::{AssetError, ConfigError, HelixError};
