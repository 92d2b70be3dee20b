use thiserror::Error;

/// Failures surfaced by the rating aggregation. The calendar has no error
/// states; it is total over any valid date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No ratings supplied")]
    InsufficientData,

    #[error("Every supplied rating was excluded by the outlier filters")]
    NoEligibleRatings
}
