/// Convenience result type used across the crate.
pub type SiteResult<T> = Result<T, SiteError>;

/// Top-level error taxonomy used by engine and site APIs.
///
/// Runtime animation hiccups (a selector that matches nothing, a resize in
/// the middle of a scrub) are never errors; these variants cover invalid
/// declarations and outer-surface failures only.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// Invalid user-provided or declared data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or compiling animation declarations.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating stage state.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Unknown or malformed route.
    #[error("routing error: {0}")]
    Routing(String),

    /// Operation the site deliberately does not provide.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SiteError {
    /// Build a [`SiteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SiteError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SiteError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`SiteError::Routing`] value.
    pub fn routing(msg: impl Into<String>) -> Self {
        Self::Routing(msg.into())
    }

    /// Build a [`SiteError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`SiteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
