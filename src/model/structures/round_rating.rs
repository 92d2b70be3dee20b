use crate::model::error::RatingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single rated tournament round. Immutable once recorded; carries no
/// identity beyond its value and the date it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRating {
    pub rating: i32,
    pub date: NaiveDate
}

impl FromStr for RoundRating {
    type Err = RatingError;

    /// Parses the `RATING@YYYY-MM-DD` form used on the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rating, date) = s
            .split_once('@')
            .ok_or_else(|| RatingError::InvalidInput(format!("expected RATING@YYYY-MM-DD, got `{s}`")))?;

        let rating = rating
            .trim()
            .parse::<i32>()
            .map_err(|_| RatingError::InvalidInput(format!("rating `{rating}` is not an integer")))?;
        let date = date
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| RatingError::InvalidInput(format!("date `{date}` is not YYYY-MM-DD")))?;

        Ok(RoundRating { rating, date })
    }
}
