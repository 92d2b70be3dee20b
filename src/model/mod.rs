use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::debug;

use crate::utils::progress_utils::progress_bar;

pub mod aggregator;
pub mod calendar;
pub mod constants;
pub mod error;
pub mod structures;

pub use aggregator::compute_new_rating;
pub use calendar::{eligibility_window, next_publication_date, second_tuesday, EligibilityWindow};
pub use error::RatingError;

use structures::{
    player_history::PlayerHistory, rating_update::RatingUpdate, round_rating::RoundRating
};

/// The flow of the processor:
/// 1. Derive the next publication date, and from it the eligibility window,
///     from the injected `today`
/// 2. Filter the player's historical rounds down to the window
/// 3. Aggregate the survivors plus any pending round ratings into the new
///     estimate
///
/// Pending ratings (`new_ratings`) are rounds not yet reflected in a published
/// rating; they are treated as current and skip the window filter.
pub fn estimate_rating(
    history: &PlayerHistory,
    new_ratings: &[i32],
    today: NaiveDate
) -> Result<RatingUpdate, RatingError> {
    let publication_date = calendar::next_publication_date(today);
    let window = calendar::eligibility_window(publication_date);
    let eligible = eligible_ratings(&history.rounds, &window);

    debug!(
        player_id = history.player_id,
        %publication_date,
        eligible = eligible.len(),
        dropped = history.rounds.len() - eligible.len(),
        "window applied"
    );

    compute_new_rating(&eligible, new_ratings, history.current_rating)
}

/// Ratings of the rounds that fall inside the eligibility window
pub fn eligible_ratings(rounds: &[RoundRating], window: &EligibilityWindow) -> Vec<i32> {
    rounds
        .iter()
        .filter(|round| window.contains(round.date))
        .map(|round| round.rating)
        .collect()
}

/// Re-estimates every player in a field. Each player's computation is
/// independent, so the field is processed in parallel.
pub fn estimate_field(
    histories: &[PlayerHistory],
    today: NaiveDate
) -> Vec<(i32, Result<RatingUpdate, RatingError>)> {
    let bar = progress_bar(histories.len() as u64, "Estimating ratings".to_string());

    let results = histories
        .par_iter()
        .map(|history| {
            let result = estimate_rating(history, &[], today);
            bar.inc(1);
            (history.player_id, result)
        })
        .collect();

    bar.finish();
    results
}
