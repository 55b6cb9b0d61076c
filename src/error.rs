use thiserror::Error;

/// A remote endpoint answered outside 2xx. The body is not inspected.
#[derive(Debug, Error)]
#[error("{endpoint} endpoint answered {status}")]
pub struct ApiError {
    pub endpoint: &'static str,
    pub status: u16,
}

/// Why a form submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Blocked before any request was made.
    #[error("Fill in the required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The request was made and failed (transport, decoding, or non-2xx).
    #[error("Failed to save deal: {0:#}")]
    Api(anyhow::Error),
}

impl SubmitError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::MissingFields(_))
    }
}
