//! Score Stats CLI
//!
//! Leaderboards and country → league → team navigation over a JSON match corpus.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use score_cli::{
    load_config, load_corpus, log_warnings, render_counts, render_leaderboard, render_tree, Report,
};
use score_core::{EngineConfig, FacetCount, Scope, StatKind, StatsEngine};

#[derive(Parser)]
#[command(name = "score_stats")]
#[command(about = "Football leaderboards and league navigation from a match corpus", long_about = None)]
struct Cli {
    /// Match corpus (JSON array of match documents)
    #[arg(long, global = true, default_value = "matches.json")]
    corpus: PathBuf,

    /// Engine configuration JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Restrict leaderboards to this country
    #[arg(long, global = true)]
    country: Option<String>,

    /// Restrict leaderboards to this league (requires --country)
    #[arg(long, global = true)]
    league: Option<String>,

    /// Compute leaderboards over the whole corpus
    #[arg(long, global = true, conflicts_with_all = ["country", "league"])]
    everywhere: bool,

    /// Override the scan page size
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Override the facet / navigation level limit
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Show only the first N entries of each leaderboard table
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Print JSON instead of tables
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One leaderboard (best-attacks, best-defences, win-ratios, goalscorers)
    Leaderboard { kind: StatKind },

    /// All four leaderboards
    All,

    /// Matches per country
    Countries,

    /// Matches per league of a country
    Leagues {
        #[arg(value_name = "COUNTRY")]
        in_country: String,
    },

    /// Matches per team of a league
    Teams {
        #[arg(value_name = "COUNTRY")]
        in_country: String,
        #[arg(value_name = "LEAGUE")]
        in_league: String,
    },

    /// Country → league → team tree
    Tree,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let scope = resolve_scope(&cli, &config)?;
    let index = load_corpus(&cli.corpus)?;
    log::info!("Loaded {} matches from {}", index.len(), cli.corpus.display());

    let mut report = Report::new(index.len());
    let engine = StatsEngine::with_config(index, config)?;

    match &cli.command {
        Commands::Leaderboard { kind } => {
            report.leaderboards.push(engine.leaderboard(*kind, &scope)?);
        }
        Commands::All => {
            report.leaderboards = engine.all_leaderboards(&scope)?;
        }
        Commands::Countries => {
            let countries = engine.countries()?;
            return print_counts(&cli, "Countries", "Country", &countries);
        }
        Commands::Leagues { in_country } => {
            let leagues = engine.leagues(in_country)?;
            return print_counts(&cli, &format!("Leagues of {}", in_country), "League", &leagues);
        }
        Commands::Teams {
            in_country,
            in_league,
        } => {
            let teams = engine.teams(in_country, in_league)?;
            let title = format!("Teams of {}/{}", in_country, in_league);
            return print_counts(&cli, &title, "Team", &teams);
        }
        Commands::Tree => {
            report.navigation = engine.navigation_tree()?;
        }
    }

    for board in &report.leaderboards {
        log_warnings(board);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for board in &report.leaderboards {
        println!("{}", render_leaderboard(board, cli.top));
    }
    if !report.navigation.is_empty() {
        print!("{}", render_tree(&report.navigation));
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(limit) = cli.limit {
        config.facet_limit = limit;
    }
    config.validate()?;
    Ok(config)
}

fn resolve_scope(cli: &Cli, config: &EngineConfig) -> Result<Scope> {
    if cli.everywhere {
        return Ok(Scope::all());
    }
    match (&cli.country, &cli.league) {
        (Some(country), Some(league)) => Ok(Scope::league(country, league)),
        (Some(country), None) => Ok(Scope::country(country)),
        (None, Some(_)) => bail!("--league needs --country: league names repeat across countries"),
        (None, None) => Ok(config.default_scope.clone()),
    }
}

fn print_counts(cli: &Cli, title: &str, label_header: &str, counts: &[FacetCount]) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(counts)?);
    } else {
        print!("{}", render_counts(title, label_header, counts));
    }
    Ok(())
}
