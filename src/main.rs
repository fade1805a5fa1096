//! Decklist Resolver - MTG decklists resolved against Scryfall bulk data
//!
//! Resolves decklists to concrete prints, recommends better prints and lists
//! card images for proxy printing.

use clap::{Parser, Subcommand};
use decklist_resolver::{
    get_database, score, CardDatabase, DecklistFormat, DecklistParser, PrintQuery,
    PrintRecommender, Result, CONFIG,
};
use std::path::PathBuf;

/// Resolve MTG decklists against Scryfall bulk data
#[derive(Parser, Debug)]
#[command(name = "decklist_resolver")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the bulk data files (default: $DECKLIST_DATA_DIR or ~/.cache/decklist_resolver)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Bulk data snapshot to resolve against (default: $DECKLIST_DATABASE or scryfall-default-cards)
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every line of a decklist to a print and write it back out
    Resolve {
        /// Decklist in text or MTG Arena format
        decklist: PathBuf,

        /// Output format: arena or text
        #[arg(short, long, default_value = "arena")]
        format: DecklistFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recommend the best print of a card
    Recommend {
        /// Exact card name
        name: String,

        /// Set code of the print currently in use
        #[arg(long, requires = "number")]
        set: Option<String>,

        /// Collector number of the print currently in use
        #[arg(long, requires = "set")]
        number: Option<String>,

        /// Only consider prints with this oracle ID
        #[arg(long)]
        oracle_id: Option<String>,

        /// List every print with its score instead of only the best one
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Show the score of a single print
    Score {
        name: String,

        #[arg(long)]
        set: String,

        #[arg(long)]
        number: String,
    },
    /// List the image URIs of every card face in a decklist
    Images {
        decklist: PathBuf,
    },
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = CONFIG.clone();
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(database) = args.database {
        config.database_name = database;
    }

    let database = match get_database(&config, &config.database_name) {
        Ok(database) => database,
        Err(e) => {
            log::error!("Failed to load card database: {}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match run(args.command, &database) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command, database: &CardDatabase) -> Result<i32> {
    match command {
        Command::Resolve {
            decklist,
            format,
            output,
        } => {
            let parser = DecklistParser::with_database_names(database);
            let parsed = parser.parse_file(&decklist)?;

            log::info!(
                "Resolved {} cards ({} unique prints)",
                parsed.decklist.total_count(),
                parsed.decklist.total_count_unique()
            );

            match output {
                Some(path) => {
                    parsed.decklist.save(&path, format)?;
                    log::info!("Wrote decklist to {}", path.display());
                }
                None => println!("{}", parsed.decklist.format(format)),
            }

            if parsed.ok {
                Ok(0)
            } else {
                log::warn!("Some card names could not be resolved and were kept as comments");
                Ok(2)
            }
        }
        Command::Recommend {
            name,
            set,
            number,
            oracle_id,
            all,
        } => {
            let query = PrintQuery {
                name: &name,
                set: set.as_deref(),
                collector_number: number.as_deref(),
                oracle_id: oracle_id.as_deref(),
            };
            let recommender = PrintRecommender::new(database);

            if all {
                let ranked = recommender.recommend_all_scored(&query);
                if ranked.is_empty() {
                    println!("No prints found for {}", name);
                }
                for print in ranked {
                    println!(
                        "{:>3}  {} ({}) {}",
                        print.score,
                        print.card.name(),
                        print.card.set().to_uppercase(),
                        print.card.collector_number()
                    );
                }
                return Ok(0);
            }

            match recommender.recommend_best(&query) {
                Some(card) => println!(
                    "{} ({}) {}",
                    card.name(),
                    card.set().to_uppercase(),
                    card.collector_number()
                ),
                None if recommender.current_print(&query).is_some() => {
                    println!("Current print is already the best one")
                }
                None => println!("No prints found for {}", name),
            }
            Ok(0)
        }
        Command::Score { name, set, number } => {
            match database.get_card(&name, Some(set.as_str()), Some(number.as_str())) {
                Some(card) => {
                    println!("{}", score(&card));
                    Ok(0)
                }
                None => {
                    log::error!("Print {} ({}) {} not found", name, set.to_uppercase(), number);
                    Ok(1)
                }
            }
        }
        Command::Images { decklist } => {
            let parser = DecklistParser::with_database_names(database);
            let parsed = parser.parse_file(&decklist)?;

            for entry in parsed.decklist.cards() {
                for uris in entry.image_uris()? {
                    match uris.get("normal").and_then(|uri| uri.as_str()) {
                        Some(uri) => println!("{} {}", entry.count, uri),
                        None => log::warn!("No normal image for {}", entry.name()),
                    }
                }
            }
            Ok(0)
        }
    }
}
