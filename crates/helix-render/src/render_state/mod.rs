//! Render state: GPU context plus the full pass chain and per-frame
//! orchestration.

mod composite;
mod frame;
mod helpers;
mod post;
mod scene;
mod state;

pub use frame::FrameInputs;
pub use state::RenderState;
