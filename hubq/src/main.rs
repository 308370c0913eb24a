//! hubq: Hub Query - CLI for building and inspecting Models Hub filter URLs.

use clap::{Parser, Subcommand};

mod commands;

/// Environment variable holding the log filter (falls back to RUST_LOG).
const LOG_VAR: &str = "HUBQ_LOG";

#[derive(Parser)]
#[command(name = "hubq")]
#[command(about = "Hub Query - encode and decode Models Hub filter query strings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Encode a JSON filter record as a query string
    #[command(visible_alias = "e")]
    Encode {
        /// JSON object (reads stdin if not provided)
        params: Option<String>,
    },

    /// Decode a query string into a JSON filter record
    #[command(visible_alias = "d")]
    Decode {
        /// Query string, with or without the leading '?'
        query: String,

        /// Output format: json, pretty
        #[arg(short = 'f', long = "format", default_value = "json")]
        format: String,
    },

    /// Print the full search URL for a JSON filter record
    Url {
        /// JSON object (reads stdin if not provided)
        params: Option<String>,

        /// Search origin (overrides config)
        #[arg(short = 'o', long = "origin")]
        origin: Option<String>,
    },

    /// Apply sidebar selections to a filter record and print the query string
    #[command(visible_alias = "s")]
    Select {
        /// Starting JSON object (default: empty record)
        #[arg(short = 'p', long = "params")]
        params: Option<String>,

        /// Listing type: all, model, pipeline
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Assigned tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Clear the assigned tags selection
        #[arg(long = "clear-tags", conflicts_with = "tags")]
        clear_tags: bool,

        /// Predicted entity (repeatable)
        #[arg(short = 'e', long = "entity")]
        entities: Vec<String>,

        /// Clear the entities selection
        #[arg(long = "clear-entities", conflicts_with = "entities")]
        clear_entities: bool,

        /// Annotator class
        #[arg(short = 'a', long = "annotator")]
        annotator: Option<String>,

        /// Sort order: date, views, downloads
        #[arg(short = 's', long = "sort")]
        sort: Option<String>,

        /// Show recommended first (true/false)
        #[arg(short = 'r', long = "recommended", action = clap::ArgAction::Set)]
        recommended: Option<bool>,

        /// Print the full search URL instead of the query string
        #[arg(short = 'u', long = "url")]
        url: bool,

        /// Also print the resulting control selection
        #[arg(long = "state")]
        state: bool,
    },

    /// List tag, entity and annotator options from listing metadata
    Options {
        /// JSON metadata file (reads stdin if '-')
        meta: String,

        /// Output format: table, json
        #[arg(short = 'f', long = "format", default_value = "table")]
        format: String,
    },
}

fn init_logging() {
    let filter = std::env::var(LOG_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => commands::init(force),
        Commands::Encode { params } => commands::encode(params.as_deref()),
        Commands::Decode { query, format } => commands::decode(&query, &format),
        Commands::Url { params, origin } => commands::url(params.as_deref(), origin.as_deref()),
        Commands::Select {
            params, kind, tags, clear_tags, entities, clear_entities, annotator, sort, recommended, url, state,
        } => {
            let selection = commands::Selection {
                kind,
                tags,
                clear_tags,
                entities,
                clear_entities,
                annotator,
                sort,
                recommended,
            };
            commands::select(params.as_deref(), selection, url, state)
        }
        Commands::Options { meta, format } => commands::options(&meta, &format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
