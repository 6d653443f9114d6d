use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Cannot compute statistics over an empty amount sequence")]
    EmptyAmountSequence,

    #[error("An unexpected error occurred during analytics calculation: {0}")]
    InternalError(String),
}
