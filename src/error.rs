use thiserror::Error;

/// Everything that can go wrong while asking the generator for a mood playlist.
///
/// Callers of [`crate::mood::MoodLookup::lookup`] never see this type: every
/// variant collapses to "no results" at that boundary.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("no API key configured (set it in config.toml or the environment)")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("generator returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The generator answered but carried no candidate text
    #[error("generator reply had no candidates")]
    EmptyReply,

    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("reply does not match the playlist schema: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
