use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Failures outside the draw/plot call surface.
///
/// Draw and plot operations never return this type: they either perform the
/// foreign call or skip it. Errors only come from configuration and from
/// decoding raw geometry buffers with a queried layout.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid buffer layout: {0}")]
    InvalidLayout(String),

    #[error("buffer of {len} bytes is not a whole number of {entry_size}-byte records")]
    BufferSize { len: usize, entry_size: usize },
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
