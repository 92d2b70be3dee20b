use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(
    display_name = "PDGA Rating Processor",
    long_about = "Estimates a player's next published PDGA rating from historical \
    tournament round ratings, applying the quartile double-weighting and \
    outlier-exclusion rules"
)]
pub struct Args {
    /// The player's most recently published rating. Required unless a history
    /// file supplies it.
    #[arg(short, long)]
    pub current_rating: Option<i32>,

    /// A historical round in RATING@YYYY-MM-DD form, e.g. 952@2024-06-08.
    /// Repeat for each round.
    #[arg(short, long = "round", value_name = "RATING@DATE")]
    pub rounds: Vec<String>,

    /// JSON player history file (alternative to --current-rating/--round)
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// A round rating not yet included in the published rating.
    /// Repeat for each pending round.
    #[arg(short, long = "new", value_name = "RATING")]
    pub new_ratings: Vec<i32>,

    /// Evaluation date (YYYY-MM-DD); defaults to the local date
    #[arg(short, long)]
    pub today: Option<NaiveDate>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
