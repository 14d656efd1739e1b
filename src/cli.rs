use clap::{Parser, Subcommand};
use mediassist_common::{RatingThreshold, TOP_DOCTOR_COUNT};

#[derive(Parser)]
#[command(name = "mediassist")]
#[command(about = "Find doctors by specialty, location, and rating", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the highest-rated doctors
    Top {
        /// Number of doctors (defaults to the configured top count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Search and filter doctors
    Search {
        /// Specialty substring (case-insensitive)
        #[arg(short, long, default_value = "")]
        specialty: String,

        /// Location substring (case-insensitive); requires a specialty
        #[arg(short, long, default_value = "")]
        location: String,

        /// Minimum rating (any/3/4/4.5)
        #[arg(short = 'r', long, default_value = "any", value_parser = parse_rating)]
        min_rating: RatingThreshold,

        /// Only doctors accepting new patients
        #[arg(long)]
        accepting: bool,

        /// Only doctors offering telehealth
        #[arg(long)]
        telehealth: bool,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show a results route, e.g. `/search?specialty=Cardiology&location=Pune`
    Open {
        /// Results route or full URL
        #[arg(required = true)]
        route: String,

        /// Minimum rating (any/3/4/4.5)
        #[arg(short = 'r', long, default_value = "any", value_parser = parse_rating)]
        min_rating: RatingThreshold,

        /// Only doctors accepting new patients
        #[arg(long)]
        accepting: bool,

        /// Only doctors offering telehealth
        #[arg(long)]
        telehealth: bool,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Interactive search with filter refinement
    Find,

    /// List the specialties and locations present in the data
    Facets,

    /// Configuration
    Config {
        /// Set the doctor API base URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}

pub fn parse_rating(value: &str) -> Result<RatingThreshold, String> {
    RatingThreshold::parse(value)
        .ok_or_else(|| format!("unknown rating '{}', use any, 3, 4, or 4.5", value))
}

/// Top count to use when `--count` is absent
pub fn top_count(count: Option<usize>, configured: usize) -> usize {
    match count.unwrap_or(configured) {
        0 => TOP_DOCTOR_COUNT,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::parse_from([
            "mediassist", "search", "-s", "cardio", "-l", "pune", "-r", "4.5", "--telehealth",
        ]);
        match cli.command {
            Commands::Search { specialty, location, min_rating, accepting, telehealth, json } => {
                assert_eq!(specialty, "cardio");
                assert_eq!(location, "pune");
                assert_eq!(min_rating, RatingThreshold::FourAndHalf);
                assert!(!accepting);
                assert!(telehealth);
                assert!(!json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_parse_open_route() {
        let cli = Cli::parse_from(["mediassist", "open", "/search?specialty=ENT", "--accepting"]);
        match cli.command {
            Commands::Open { route, min_rating, accepting, telehealth, .. } => {
                assert_eq!(route, "/search?specialty=ENT");
                assert_eq!(min_rating, RatingThreshold::Any);
                assert!(accepting);
                assert!(!telehealth);
            }
            _ => panic!("expected open"),
        }
    }

    #[test]
    fn test_invalid_rating_rejected() {
        assert!(Cli::try_parse_from(["mediassist", "search", "-r", "2"]).is_err());
        assert!(parse_rating("5").is_err());
        assert_eq!(parse_rating("4+"), Ok(RatingThreshold::Four));
    }

    #[test]
    fn test_top_count_fallback() {
        assert_eq!(top_count(None, 4), 4);
        assert_eq!(top_count(Some(2), 4), 2);
        assert_eq!(top_count(None, 0), TOP_DOCTOR_COUNT);
    }
}
