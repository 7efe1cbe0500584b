/// Result alias that carries the crate's [`VisualiserError`] type.
pub type Result<T> = std::result::Result<T, VisualiserError>;

/// Failures that can occur while loading an audio file into the engine.
///
/// Loading is attempted exactly once per invocation and never panics
/// across the API; the caller decides whether a failure aborts startup or
/// downgrades to an empty buffer.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file extension does not map to a known container family.
    #[error("unsupported audio extension `{0}`")]
    UnsupportedExtension(String),
    /// The container was recognised but its contents could not be decoded.
    #[error("failed to decode audio: {0}")]
    DecodeFailure(String),
    /// The file (or the external decoder) could not be reached at all.
    #[error("audio io failure: {0}")]
    IoFailure(#[from] std::io::Error),
}

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum VisualiserError {
    /// Audio loading failed; see [`LoadError`] for the taxonomy.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The spectral transform rejected its buffers.
    #[error("spectral analysis failed: {0}")]
    Fft(#[from] realfft::FftError),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
