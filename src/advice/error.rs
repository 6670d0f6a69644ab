use thiserror::Error;

/// Any failure while asking the remote endpoint for real advice.
///
/// The game never surfaces these to the player as errors; the controller logs
/// them and substitutes the fallback advice.
#[derive(Debug, Error)]
pub enum AdviceFetchError {
    /// Connection, TLS or body read failure.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("advice endpoint returned status {0}")]
    Status(u16),

    /// Body was not the expected `{"slip": {"advice": ...}}` shape.
    #[error("malformed advice body: {0}")]
    Parse(String),

    /// Only produced when a request timeout is configured.
    #[error("request timed out after {0}s")]
    Timeout(u32),
}

/// Errors loading a fabricated-advice fixtures file at startup.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixtures file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("fixtures file is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fixtures list contains no usable advice")]
    Empty,
}
