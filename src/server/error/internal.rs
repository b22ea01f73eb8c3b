use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value no variant matches.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Invalid stored value '{value}' for {field}")]
    InvalidStoredValue {
        /// The column or field being parsed
        field: &'static str,
        /// The raw stored value
        value: String,
    },

    /// Hashing or verifying a password with argon2 failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a JWT failed.
    #[error("Failed to encode access token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),

    /// Building a JSON payload failed.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}
