//! Question relay between a chat front end and the remote prediction service.
//!
//! The relay knows nothing about the knowledge base. It forwards the user's
//! text, extracts the `text` field of the answer and maps every failure to a
//! fixed user-facing reply.

pub mod client;
pub mod incoming;
pub mod replies;

pub use client::{PredictionClient, PredictionRequest, PredictionResponse};
pub use incoming::{classify, Incoming};
pub use replies::{
    reply_for, GENERIC_ERROR_REPLY, HELP_REPLY, NO_ANSWER, START_REPLY, STATUS_ERROR_REPLY,
    TIMEOUT_REPLY,
};

use thiserror::Error;

/// Why a question could not be answered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("prediction service timed out")]
    Timeout,

    #[error("prediction service answered with status {0}")]
    Status(u16),

    #[error("invalid prediction response: {0}")]
    InvalidResponse(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else if err.is_decode() {
            RelayError::InvalidResponse(err.to_string())
        } else {
            RelayError::Transport(err.to_string())
        }
    }
}

impl RelayError {
    /// Text sent back to the user for this failure.
    pub fn user_reply(&self) -> &'static str {
        match self {
            RelayError::Timeout => TIMEOUT_REPLY,
            RelayError::Status(_) => STATUS_ERROR_REPLY,
            RelayError::InvalidResponse(_) | RelayError::Transport(_) => GENERIC_ERROR_REPLY,
        }
    }
}

/// Ask `client` and always come back with something to send.
pub async fn relay(client: &PredictionClient, question: &str) -> String {
    let outcome = client.ask(question).await;
    if let Err(err) = &outcome {
        tracing::error!(error = %err, "prediction request failed");
    }
    reply_for(outcome)
}
