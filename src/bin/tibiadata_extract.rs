//! Command-line extractor: reads a saved tibia.com page and prints the
//! enveloped record as JSON.
//!
//! ```text
//! tibiadata_extract worlds worlds.html
//! curl -s "$(tibiadata_extract creature --race demon --print-url)" | tibiadata_extract creature --race demon
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rs_tibiadata::{extract_bytes, Category, Envelope, Options};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tibiadata_extract")]
#[command(about = "Extract typed JSON records from tibia.com pages")]
#[command(version)]
struct Cli {
    /// Page category: creature, creatures, spell, spells or worlds
    category: Category,

    /// Page file to read (stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Creature race the page was requested with
    #[arg(long)]
    race: Option<String>,

    /// Spell identifier the page was requested with
    #[arg(long)]
    spell: Option<String>,

    /// Vocation filter of the spell list
    #[arg(long)]
    vocation: Option<String>,

    /// Print the source URL for the category and exit
    #[arg(long)]
    print_url: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rs_tibiadata=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let options = Options {
        race: cli.race,
        spell: cli.spell,
        vocation: cli.vocation,
    };

    if cli.print_url {
        println!("{}", cli.category.source_url(&options));
        return ExitCode::SUCCESS;
    }

    let page = match read_input(cli.input.as_ref()) {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(error = %err, "failed to read page");
            print_json(&serde_json::json!({ "error": err.to_string() }), cli.pretty);
            return ExitCode::FAILURE;
        }
    };

    match extract_bytes(cli.category, &page, &options) {
        Ok(record) => {
            print_json(&Envelope::new(record), cli.pretty);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(category = %cli.category, error = %err, "extraction failed");
            print_json(&serde_json::json!({ "error": err.to_string() }), cli.pretty);
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut page = Vec::new();
            io::stdin().read_to_end(&mut page)?;
            Ok(page)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", json.unwrap_or_default());
}
