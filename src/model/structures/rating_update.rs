use crate::model::structures::exclusion::RatingExclusion;
use serde::{Deserialize, Serialize};

/// Outcome of one aggregation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingUpdate {
    /// The new estimated rating, rounded up to the nearest integer
    pub new_rating: i32,
    /// How many of the best results were counted twice
    pub double_weighted: usize,
    /// Ratings dropped by the outlier filter, in input order
    pub exclusions: Vec<RatingExclusion>
}

impl RatingUpdate {
    pub fn delta(&self, current_rating: i32) -> i32 {
        self.new_rating - current_rating
    }
}
