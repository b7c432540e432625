use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use medal_tally::competition::Competition;
use medal_tally::output;
use medal_tally::query;
use medal_tally::ranking::{self, SortKey};
use medal_tally::scoring;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_TERMINAL: i32 = 3;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum SortArg {
    /// Country id, ascending
    #[default]
    Id,
    /// Total points, descending
    Total,
    /// Men's points, descending
    Male,
    /// Women's points, descending
    Female,
}

impl SortArg {
    /// The standings views the original tool offers: id ascending, every
    /// point column descending.
    fn view(self) -> (SortKey, bool) {
        match self {
            SortArg::Id => (SortKey::Id, true),
            SortArg::Total => (SortKey::Total, false),
            SortArg::Male => (SortKey::Male, false),
            SortArg::Female => (SortKey::Female, false),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive entry/standings/query interface (default if no subcommand)
    Tui,
    /// Print standings for the built-in sample competition (7 countries, 5 events)
    Demo {
        /// Standings sort order
        #[arg(long, value_enum, default_value_t)]
        sort: SortArg,

        /// Tab-separated output for scripting (no headers, no colors)
        #[arg(long)]
        tsv: bool,

        /// Also show every placement of one country
        #[arg(long, value_name = "ID")]
        country: Option<u32>,

        /// Also show one event's roster
        #[arg(long, value_name = "ID")]
        event: Option<u32>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "medal-tally")]
#[command(about = "Olympic-style medal tally: standings and queries from event rankings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/medal-tally/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let config_path = cli.config.map(PathBuf::from);
    let config = match medal_tally::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        match config.defaults {
            Some(d) => eprintln!(
                "Config defaults: {} countries, {} men's, {} women's events",
                d.countries, d.men_events, d.women_events
            ),
            None => eprintln!("No config defaults; init form starts empty"),
        }
    }

    match command {
        Commands::Tui => {
            let app = medal_tally::tui::App::new(config);
            if let Err(e) = medal_tally::tui::run_tui(app) {
                eprintln!("Terminal error: {}", e);
                std::process::exit(EXIT_TERMINAL);
            }
        }
        Commands::Demo {
            sort,
            tsv,
            country,
            event,
        } => {
            let comp = Competition::sample();
            let use_colors = !tsv && config.color.enabled();

            if cli.verbose {
                let messages =
                    scoring::validate_all(comp.configs(), comp.entries(), comp.country_count());
                for (cfg, msg) in comp.configs().iter().zip(&messages) {
                    eprintln!("event {}: {}", cfg.event_id, msg);
                }
            }

            let maps = scoring::compute_scores(comp.configs(), comp.entries(), comp.country_count());
            let (key, ascending) = sort.view();
            let standings = ranking::rank(&maps, comp.country_count(), key, ascending);

            if tsv {
                println!("{}", output::format_standings_tsv(&standings));
            } else {
                println!("{}", output::format_standings_table(&standings, use_colors));
            }

            if let Some(id) = country {
                let results = match query::query_country(&comp, id) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Query error: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                };
                println!();
                println!("Country {}:", id);
                println!("{}", output::format_country_query(&results, use_colors));
            }

            if let Some(id) = event {
                let results = match query::query_event(&comp, id) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Query error: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                };
                println!();
                println!("Event {}:", id);
                println!("{}", output::format_event_query(&results, use_colors));
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
