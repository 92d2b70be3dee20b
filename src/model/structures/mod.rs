pub mod exclusion;
pub mod player_history;
pub mod rating_update;
pub mod round_rating;
