use crate::model::structures::{player_history::PlayerHistory, round_rating::RoundRating};
use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates `n` round ratings spread around `target_rating`, newest first,
/// one round every other week going back from `newest`.
pub fn generate_round_ratings(
    n: usize,
    target_rating: i32,
    spread: i32,
    newest: NaiveDate
) -> Vec<RoundRating> {
    // Seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    (0..n)
        .map(|i| RoundRating {
            rating: target_rating + rng.random_range(-spread..=spread),
            date: newest - Duration::weeks(2 * i as i64)
        })
        .collect()
}

pub fn generate_player_history(
    player_id: i32,
    current_rating: i32,
    n_rounds: usize,
    newest: NaiveDate
) -> PlayerHistory {
    PlayerHistory {
        player_id,
        current_rating,
        rounds: generate_round_ratings(n_rounds, current_rating, 40, newest)
    }
}
