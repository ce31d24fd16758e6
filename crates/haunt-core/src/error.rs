use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("missing texture asset: {0}")]
    MissingAsset(String),
    #[error("{} texture assets missing: {}", .0.len(), .0.join(", "))]
    MissingAssets(Vec<String>),
    #[error("unknown panel parameter: {0}")]
    UnknownParam(String),
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
}
