use crate::model::structures::round_rating::RoundRating;
use serde::{Deserialize, Serialize};

/// Everything the estimator needs to know about one player. Built fresh per
/// invocation by whichever adapter supplies the data (scraper, file, test).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHistory {
    pub player_id: i32,
    /// The most recently published rating; used only as the reference point
    /// for outlier exclusion
    pub current_rating: i32,
    pub rounds: Vec<RoundRating>
}
