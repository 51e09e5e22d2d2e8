//! Application state and the winit event handler.

mod animation;
mod core;
mod event_handler;
mod panel;

pub use animation::{Animation, Phase};
pub use core::HelixApp;
pub use panel::ProgressControl;
