use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::EventCategory;
use crate::services::listing::ListView;

#[derive(Parser, Debug)]
#[command(author, version, about = "Card game tournament calendar")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch upcoming tournaments and store them in the cache
    Fetch,
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Refetch tournaments every N minutes while serving (at most one week)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=10_080))]
        refresh_minutes: Option<u64>,
    },
    /// Print cached tournaments grouped by week or day
    List {
        #[arg(short, long, value_enum, default_value_t = ListView::Week)]
        view: ListView,
        /// Only show tournaments at this store (repeatable)
        #[arg(short, long = "store")]
        stores: Vec<String>,
        /// Only show tournaments of this category (repeatable)
        #[arg(short, long = "category", value_parser = parse_category)]
        categories: Vec<EventCategory>,
        /// Label language, `hu` or `en`; detected from LANG when omitted
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_category(value: &str) -> Result<EventCategory, String> {
    value.parse().map_err(|e: anyhow::Error| e.to_string())
}
