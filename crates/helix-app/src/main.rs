mod app;
mod assets;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use helix_common::HelixError;
use helix_config::schema::{HelixConfig, PointSource};
use helix_render::PointField;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("helix=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "helix=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("helix v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config: explicit path override, or the platform default
    let mut config = match &args.config {
        Some(path) => helix_config::toml_loader::load_from_path(Path::new(path))
            .unwrap_or_else(|e| {
                tracing::warn!("config load failed, using defaults: {e}");
                HelixConfig::default()
            }),
        None => helix_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("config load failed, using defaults: {e}");
            HelixConfig::default()
        }),
    };

    // CLI overrides
    if let Some(n) = args.points {
        config.points.count = n;
    }
    if let Some(model) = &args.model {
        config.points.source = PointSource::Mesh;
        config.points.model = Some(model.clone());
    }

    // Build the point field up front; a mesh that fails to load is a
    // startup error, not a silent hang.
    let field = match build_field(&config) {
        Ok(field) => field,
        Err(e) => {
            tracing::error!("failed to build point field: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("point field ready ({} points)", field.len());

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::HelixApp::new(config, field);

    tracing::info!("entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("event loop error: {e}");
    }
    tracing::info!("shutdown complete");
}

/// Build the point field for the configured source.
fn build_field(config: &HelixConfig) -> Result<PointField, HelixError> {
    match config.points.source {
        PointSource::Spiral => Ok(PointField::spiral(config.points.count)),
        PointSource::Mesh => {
            let path = config.points.model.as_deref().ok_or_else(|| {
                HelixError::Other("points.source = \"mesh\" requires a model path".into())
            })?;
            let positions = assets::load_positions(Path::new(path))?;
            Ok(PointField::from_positions(&positions)?)
        }
    }
}
