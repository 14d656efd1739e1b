use std::time::Duration;

use clap::Parser;
use mediassist::{cli, client, config, error, interactive, render};
use mediassist_common::{
    filter_doctors, top_doctors, DoctorRecord, Facets, FilterState, ResultsState, SearchQuery,
    SearchTerms,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use client::DoctorClient;
use config::Config;
use error::{MediAssistError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // a broken file must not block the command that rewrites it
    let config = match cli.command {
        Commands::Config { .. } => Config::load_lenient()?,
        _ => Config::load()?,
    };

    match cli.command {
        Commands::Top { count, json } => {
            let client = build_client(&config)?;
            let doctors = client.fetch_with_spinner().await?;
            let top = top_doctors(&doctors, cli::top_count(count, config.top_count));

            if json {
                print_json(&top)?;
            } else {
                println!("Top Rated Doctors\n");
                let state = ResultsState::from_records(top);
                println!("{}", render::results(&state));
            }
        }

        Commands::Search { specialty, location, min_rating, accepting, telehealth, json } => {
            let query = mediassist_common::validate_search(&specialty, &location)?;
            let filters = FilterState {
                min_rating,
                accepting_new_patients: accepting,
                telehealth_available: telehealth,
            };
            run_search(&config, &query, &filters, json).await?;
        }

        Commands::Open { route, min_rating, accepting, telehealth, json } => {
            let query = SearchQuery::from_route(&route).ok_or(MediAssistError::Route(route))?;
            let filters = FilterState {
                min_rating,
                accepting_new_patients: accepting,
                telehealth_available: telehealth,
            };
            run_search(&config, &query, &filters, json).await?;
        }

        Commands::Find => {
            let client = build_client(&config)?;
            interactive::run_finder(&client).await?;
        }

        Commands::Facets => {
            let client = build_client(&config)?;
            let doctors = client.fetch_with_spinner().await?;
            println!("{}", render::facets(&Facets::from_records(&doctors)));
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                config.save()?;
                println!("✔ API URL set");
            }

            if show {
                println!("Settings:");
                println!("  API URL: {}", config.api_base()?.as_str());
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Top doctors: {}", config.top_count);
                println!("  File: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "mediassist=debug" } else { "mediassist=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_search(config: &Config, query: &SearchQuery, filters: &FilterState, json: bool) -> Result<()> {
    let terms = SearchTerms::from_query(query);
    debug!(route = %query.to_route(), ?filters, "search");

    let client = build_client(config)?;
    let doctors = client.fetch_with_spinner().await?;
    let matched = filter_doctors(&doctors, &terms, filters);

    if json {
        return print_json(&matched);
    }

    println!("{}", render::heading(&terms));
    if let Some(active) = render::active_filters(filters) {
        println!("{}", active);
    }
    println!();
    println!("{}", render::results(&ResultsState::from_records(matched)));
    Ok(())
}

fn build_client(config: &Config) -> Result<DoctorClient> {
    let api = config.api_base()?;
    debug!(api = api.as_str(), "using doctor API");
    DoctorClient::new(api, Duration::from_secs(config.timeout_seconds))
}

fn print_json(doctors: &[DoctorRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(doctors)?);
    Ok(())
}
