use thiserror::Error;

/// Client-side checks that block an action before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields and add at least one item to your cart")]
    MissingFields,

    #[error("You don't have enough tokens. You need {needed} tokens but only have {available}.")]
    InsufficientTokens { needed: u32, available: u32 },

    #[error("You must be signed in to apply reward tokens")]
    NotAuthenticated,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx response or a failed network call. Carries the backend's
    /// message verbatim when one was provided.
    #[error("{message}")]
    Backend { message: String },
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Backend {
            message: error.to_string(),
        }
    }
}
