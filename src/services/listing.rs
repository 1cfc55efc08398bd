use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::cache::Cache;
use crate::domain::{
    DateKey, EventCategory, FilterSelection, StoreType, Tournament, WeekInfo, group_by_day,
    group_by_week,
};
use crate::i18n::{Language, Translations};
use crate::services::fetch::load_cached_tournaments;

const START_FORMAT: &str = "%a %m.%d. %H:%M";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListView {
    /// Tournaments grouped by ISO week
    #[default]
    Week,
    /// Tournaments grouped by calendar day
    Day,
}

/// Print the cached tournaments matching `selection`
pub fn print_listing(
    cache: &Cache,
    view: ListView,
    selection: &FilterSelection,
    language: Language,
) -> Result<()> {
    let tournaments = load_cached_tournaments(cache)?;
    let output = render(&tournaments, view, selection, language).context("Failed to render listing")?;
    print!("{}", output);
    Ok(())
}

pub fn render(
    tournaments: &[Tournament],
    view: ListView,
    selection: &FilterSelection,
    language: Language,
) -> Result<String, std::fmt::Error> {
    let labels = language.translations();
    let filtered = selection.apply(tournaments);
    let mut out = String::new();

    if filtered.is_empty() {
        writeln!(out, "{}", labels.no_tournaments_filtered.dimmed())?;
        return Ok(out);
    }

    match view {
        ListView::Week => {
            for (key, bucket) in group_by_week(filtered) {
                let info = WeekInfo {
                    week: key.week,
                    year: key.year,
                };
                let mut heading = info.display(labels.week);
                if heading.is_empty() {
                    heading = "?".to_string();
                }
                let heading = if info.is_current() {
                    heading.bold().underline()
                } else {
                    heading.bold()
                };
                writeln!(out, "{}", heading)?;
                for tournament in bucket {
                    write_line(&mut out, tournament, labels)?;
                }
                writeln!(out)?;
            }
        }
        ListView::Day => {
            let today = DateKey::today();
            for (date, bucket) in group_by_day(filtered) {
                let heading = if date == today {
                    format!("{} ({})", date, labels.today).bold().underline()
                } else {
                    date.to_string().bold()
                };
                writeln!(out, "{}", heading)?;
                for tournament in bucket {
                    write_line(&mut out, tournament, labels)?;
                }
                writeln!(out)?;
            }
        }
    }

    Ok(out)
}

fn write_line(out: &mut String, tournament: &Tournament, labels: &Translations) -> std::fmt::Result {
    let category = EventCategory::of(tournament);
    let store = tournament.display_store_name().unwrap_or("-");
    let store_type = StoreType::of(tournament);

    let start = tournament
        .local_start()
        .map(|start| start.format(START_FORMAT).to_string())
        .unwrap_or_else(|| tournament.local_tournament_date.clone());

    write!(
        out,
        "  {}  {}  {}",
        start,
        paint(labels.category(category), category.color()),
        tournament.event_name,
    )?;
    write!(out, "  @ {}", store)?;
    if store_type == StoreType::Other {
        write!(out, " {}", format!("({})", labels.store_type(store_type)).dimmed())?;
    }
    writeln!(out)
}

/// Apply a `#rrggbb` color; unreadable values leave the text plain
fn paint(text: &str, hex: &str) -> ColoredString {
    let channels = hex
        .strip_prefix('#')
        .filter(|h| h.len() == 6)
        .and_then(|h| {
            let r = u8::from_str_radix(&h[0..2], 16).ok()?;
            let g = u8::from_str_radix(&h[2..4], 16).ok()?;
            let b = u8::from_str_radix(&h[4..6], 16).ok()?;
            Some((r, g, b))
        });

    match channels {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}
