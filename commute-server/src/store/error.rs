//! Store error types.

/// Errors from the user and chat store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No user with this username
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// No chat room with this name
    #[error("chat room not found: {0}")]
    RoomNotFound(String),

    /// User record failed validation
    #[error("invalid user: {0}")]
    InvalidUser(&'static str),

    /// Preferences update failed validation
    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),
}
