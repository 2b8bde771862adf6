use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Scraper could not be launched or awaited (missing program, missing
    /// working directory, permissions). Passed through untranslated.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Captured stdout was empty or not a JSON document. Parser detail is dropped.
    #[error("Invalid JSON response from YouTube scraper.")]
    InvalidResponse,
}

impl StatsError {
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, StatsError::InvalidResponse)
    }
}
