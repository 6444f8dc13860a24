//! Error taxonomy for the API boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable: forms surface the message inline and stay
//! resubmittable. Nothing here escapes to a global handler.

use thiserror::Error;

/// Failure reported to a form view.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required form field was missing; raised before any request is sent.
    #[error("{0}")]
    Validation(String),
    /// The request was rejected in transit or the server was unreachable.
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with `success: false` and a user-facing message.
    #[error("{0}")]
    Application(String),
}
