/// Convenience result type used across lifeweeks.
pub type LifeWeeksResult<T> = Result<T, LifeWeeksError>;

/// Failures of the rendering pipeline.
///
/// Birth-date problems are not here: they are reported as [`crate::BirthDateError`] values before
/// any scene is built.
#[derive(thiserror::Error, Debug)]
pub enum LifeWeeksError {
    /// Errors while painting a scene into a raster surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding a rendered frame into an image format.
    #[error("encode error: {0}")]
    Encode(String),
}

impl LifeWeeksError {
    /// Build a [`LifeWeeksError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LifeWeeksError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
