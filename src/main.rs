use anyhow::Result;

use tournament_calendar::cli::Command;
use tournament_calendar::{
    handle_completions, handle_fetch, handle_list, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Fetch => handle_fetch(),
        Command::Serve {
            port,
            refresh_minutes,
        } => handle_serve(*port, *refresh_minutes),
        Command::List {
            view,
            stores,
            categories,
            lang,
        } => handle_list(*view, stores, categories, lang.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
