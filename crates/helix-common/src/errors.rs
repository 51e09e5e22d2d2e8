use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("model load error: {0}")]
    LoadError(String),

    #[error("model has no geometry: {0}")]
    EmptyModel(PathBuf),

    #[error("malformed position buffer: {0} floats is not divisible by 3")]
    MalformedPositions(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum HelixError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("bloom.strength out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: bloom.strength out of range"
        );
    }

    #[test]
    fn asset_error_display() {
        let err = AssetError::LoadError("bad face index".into());
        assert_eq!(err.to_string(), "model load error: bad face index");

        let err = AssetError::EmptyModel(PathBuf::from("dna.obj"));
        assert_eq!(err.to_string(), "model has no geometry: dna.obj");

        let err = AssetError::MalformedPositions(91);
        assert_eq!(
            err.to_string(),
            "malformed position buffer: 91 floats is not divisible by 3"
        );
    }

    #[test]
    fn helix_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let helix_err: HelixError = config_err.into();
        assert!(matches!(helix_err, HelixError::Config(_)));
        assert!(helix_err.to_string().contains("bad toml"));
    }

    #[test]
    fn helix_error_from_asset() {
        let asset_err = AssetError::MalformedPositions(10);
        let helix_err: HelixError = asset_err.into();
        assert!(matches!(helix_err, HelixError::Asset(_)));
    }

    #[test]
    fn helix_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let helix_err: HelixError = io_err.into();
        assert!(matches!(helix_err, HelixError::Io(_)));
        assert!(helix_err.to_string().contains("file missing"));
    }

    #[test]
    fn helix_error_renderer_and_other() {
        let err = HelixError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = HelixError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
