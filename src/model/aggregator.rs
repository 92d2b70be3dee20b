use crate::model::{
    constants::{ABSOLUTE_GAP, DEVIATION_MULTIPLIER, DOUBLE_WEIGHT_FRACTION},
    error::RatingError,
    structures::{
        exclusion::{ExclusionReason, RatingExclusion},
        rating_update::RatingUpdate
    }
};
use itertools::Itertools;
use statrs::statistics::Statistics;
use tracing::info;

/// # Rating aggregation
///
/// Combines a player's eligible historical round ratings with any newly
/// supplied (pending) round ratings into a single updated rating, following
/// the published methodology:
///
/// 1. Concatenate pending ratings ahead of the existing ones.
/// 2. Drop outliers: anything at or below 2.5 population standard deviations
///     under the current rating, or 100+ points under it. Both thresholds are
///     evaluated against the full pre-filter set.
/// 3. Sort the survivors highest-first and count the best quartile twice.
/// 4. Round the weighted average up to the nearest integer.
///
/// `existing_ratings` is expected to already be filtered to the eligibility
/// window; `new_ratings` is exempt from that filter.
pub fn compute_new_rating(
    existing_ratings: &[i32],
    new_ratings: &[i32],
    current_rating: i32
) -> Result<RatingUpdate, RatingError> {
    if current_rating <= 0 {
        return Err(RatingError::InvalidInput(format!(
            "current rating must be a positive integer, got {current_rating}"
        )));
    }

    let combined: Vec<i32> = new_ratings.iter().chain(existing_ratings).copied().collect();
    if combined.is_empty() {
        return Err(RatingError::InsufficientData);
    }

    let threshold = exclusion_threshold(&combined, current_rating);

    let mut exclusions = Vec::new();
    let mut final_ratings = Vec::with_capacity(combined.len());
    for rating in combined {
        match exclusion_reason(rating, current_rating, threshold) {
            Some(reason) => {
                info!(rating, ?reason, threshold, "rating removed");
                exclusions.push(RatingExclusion { rating, reason });
            }
            None => final_ratings.push(rating)
        }
    }

    if final_ratings.is_empty() {
        return Err(RatingError::NoEligibleRatings);
    }

    // Highest ratings first; the double-count slice below depends on this
    let sorted: Vec<i32> = final_ratings.into_iter().sorted_unstable_by(|a, b| b.cmp(a)).collect();

    let double_weighted = double_weight_count(sorted.len());
    let total_sum: i64 = sorted.iter().map(|&r| r as i64).sum();
    let double_sum: i64 = sorted[..double_weighted].iter().map(|&r| r as i64).sum();

    let total = (total_sum + double_sum) as f64 / (sorted.len() + double_weighted) as f64;

    Ok(RatingUpdate {
        new_rating: total.ceil() as i32,
        double_weighted,
        exclusions
    })
}

/// `current rating - 2.5 x population standard deviation` of the pre-filter
/// combined set. Population, not sample: a Bessel-corrected denominator would
/// shift the threshold and silently change which ratings survive.
pub fn exclusion_threshold(combined: &[i32], current_rating: i32) -> f64 {
    let std_dev = combined.iter().map(|&r| r as f64).population_std_dev();

    current_rating as f64 - std_dev * DEVIATION_MULTIPLIER
}

/// Both rules are OR'd; the deviation rule is reported when both fire
pub fn exclusion_reason(rating: i32, current_rating: i32, threshold: f64) -> Option<ExclusionReason> {
    if (rating as f64) <= threshold {
        return Some(ExclusionReason::BelowDeviationThreshold);
    }

    if current_rating - rating >= ABSOLUTE_GAP {
        return Some(ExclusionReason::BelowAbsoluteGap);
    }

    None
}

/// How many of the best results get counted twice: a quarter of the surviving
/// set, rounded down. Zero for fewer than four rounds.
fn double_weight_count(n_ratings: usize) -> usize {
    (n_ratings as f64 * DOUBLE_WEIGHT_FRACTION).floor() as usize
}
