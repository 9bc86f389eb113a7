/// Result alias used across the crate.
pub type MorphResult<T> = Result<T, MorphError>;

/// Every failure the morph subsystem can report.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Malformed input (segment ranges, animation data, config values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Position lookup outside `[0, len]`. Always a caller bug.
    #[error("layout error: {0}")]
    Layout(String),

    /// Missing or unusable drawing surface. Fatal at setup.
    #[error("surface error: {0}")]
    Surface(String),

    /// A second pass was requested while one is still live on the surface.
    #[error("surface busy: {0}")]
    Busy(String),

    /// Glyph metrics could not be produced for the current font.
    #[error("font error: {0}")]
    Font(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MorphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
