use clap::Parser;
use pdga_rating_processor::{
    args::Args,
    model::{
        error::RatingError,
        estimate_rating,
        structures::{player_history::PlayerHistory, round_rating::RoundRating}
    }
};
use std::{fs, process::ExitCode};

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let history = load_history(args)?;
    let today = args.today.unwrap_or_else(|| chrono::Local::now().date_naive());

    let update = estimate_rating(&history, &args.new_ratings, today)?;

    for exclusion in &update.exclusions {
        println!("Rating removed: {} ({:?})", exclusion.rating, exclusion.reason);
    }
    println!("Current rating: {}", history.current_rating);
    println!(
        "New estimated rating: {} ({:+})",
        update.new_rating,
        update.delta(history.current_rating)
    );

    Ok(())
}

fn load_history(args: &Args) -> Result<PlayerHistory, Box<dyn std::error::Error>> {
    if let Some(path) = &args.history {
        let contents = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&contents)?);
    }

    let current_rating = args.current_rating.ok_or_else(|| {
        RatingError::InvalidInput("--current-rating is required without --history".to_string())
    })?;
    let rounds = args
        .rounds
        .iter()
        .map(|r| r.parse::<RoundRating>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlayerHistory {
        player_id: 0,
        current_rating,
        rounds
    })
}
