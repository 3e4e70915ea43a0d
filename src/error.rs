//! Error types for the PUBG season stats aggregator

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

/// Exit status for bad or missing input (matches clap's usage errors).
pub const EXIT_CALLER_ERROR: u8 = 2;

/// Exit status when the upstream or local processing failed.
pub const EXIT_SERVER_ERROR: u8 = 3;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Current season has not been determined, check the server logs")]
    SeasonUnresolved,

    #[error("Upstream API error: {message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Chart rendering failed: {message}")]
    Chart { message: String },
}

impl StatsError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StatsError::InvalidInput {
            message: message.into(),
        }
    }

    /// HTTP status reported by the upstream API, when the failure carried one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            StatsError::Upstream { status, .. } => *status,
            StatsError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the failure is not the requester's fault.
    ///
    /// Bad or missing input is the caller's problem; everything else
    /// (season discovery, upstream failures, local I/O) is reported as a
    /// server-side processing failure.
    pub fn is_server_side(&self) -> bool {
        !matches!(
            self,
            StatsError::InvalidInput { .. } | StatsError::MissingApiKey { .. }
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_server_side() {
            EXIT_SERVER_ERROR
        } else {
            EXIT_CALLER_ERROR
        }
    }
}

/// Exit status for an error that reached the binary; 1 when no `StatsError` is in the chain.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|e| e.downcast_ref::<StatsError>())
        .map_or(1, StatsError::exit_code)
}
