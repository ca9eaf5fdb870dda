//! Error taxonomy for a submission attempt.
//!
//! Every variant is terminal for the attempt and renders as exactly one
//! user-visible message through `Display`.

use thiserror::Error;

use crate::form::ProfileField;

/// Which of the two sequential calls an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    HealthCheck,
    Generate,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HealthCheck => "health_check",
            Self::Generate => "generate",
        }
    }
}

/// Classification reported by an [`crate::HttpClient`] when no HTTP response
/// was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The transport gave up on its own before our timer fired
    #[error("request timed out")]
    Timeout,

    /// Connection refused, DNS failure, aborted fetch and the like
    #[error("network error: {message}")]
    Network { message: String },
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Health probe answered with a non-success status
    #[error("Server is not running. Please start the server first.")]
    ServerUnavailable { status: u16 },

    #[error("Unable to connect to server. Please ensure the bio server is running at {endpoint}")]
    ConnectionError { endpoint: String, stage: Stage },

    #[error("{}", timeout_message(*stage))]
    RequestTimeout { stage: Stage },

    #[error("{}", http_error_message(*status, server_message.as_deref()))]
    HttpError {
        status: u16,
        server_message: Option<String>,
    },

    #[error("The server returned an unexpected response: {reason}")]
    InvalidResponse { reason: String },
}

impl SubmitError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::ServerUnavailable { .. } => Stage::HealthCheck,
            Self::RequestTimeout { stage } | Self::ConnectionError { stage, .. } => *stage,
            Self::HttpError { .. } | Self::InvalidResponse { .. } => Stage::Generate,
        }
    }

    /// Short machine-readable tag for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServerUnavailable { .. } => "server_unavailable",
            Self::ConnectionError { .. } => "connection_error",
            Self::RequestTimeout { .. } => "request_timeout",
            Self::HttpError { .. } => "http_error",
            Self::InvalidResponse { .. } => "invalid_response",
        }
    }
}

fn timeout_message(stage: Stage) -> &'static str {
    match stage {
        Stage::HealthCheck => "Server connection timed out",
        Stage::Generate => "Bio generation request timed out",
    }
}

fn http_error_message(status: u16, server_message: Option<&str>) -> String {
    match server_message {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("HTTP error! status: {status}"),
    }
}

/// Reasons a submission is refused before any network call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("Please fill in: {}", join_labels(missing))]
    Incomplete { missing: Vec<ProfileField> },

    #[error("A bio is already being generated")]
    InFlight,
}

fn join_labels(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::label)
        .collect::<Vec<_>>()
        .join(", ")
}
