use std::time::Duration;

/// Errors surfaced by the engine.
///
/// Missing fonts and missing glyphs are deliberately absent here: the
/// compositor always degrades to a fallback rendering instead of failing
/// (see [`crate::compose::Composed`]). Export failures belong to the
/// frontend adapter and are reported per action there.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    /// A request field was missing or malformed. Rejected before any work.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The source image could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Image decoding did not finish within the configured timeout.
    #[error("image decode timed out after {waited:?}")]
    DecodeTimeout { waited: Duration },

    /// A background worker task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
