use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::competition::Gender;
use crate::query::{CountryEventResult, PlacementResult};
use crate::ranking::Standing;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Proportional score bar, scaled against the best total in the table.
fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    if max_score == 0 || width == 0 {
        return String::new();
    }
    let filled = (score as f64 / max_score as f64 * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format standings as an aligned table: rank, country, total, men's and
/// women's points, plus a bar sized to the remaining terminal width.
pub fn format_standings_table(rows: &[Standing], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No countries.".to_string();
    }

    // Fixed columns: " 1.  country 12   total 34   men 30   women 4  "
    let fixed_width = 4 + 1 + 12 + 2 + 7 + 2 + 7 + 2 + 7 + 2;
    let bar_width = get_terminal_width()
        .map(|w| w.saturating_sub(fixed_width).min(20))
        .unwrap_or(0);

    let max_total = rows.iter().map(|r| r.total).max().unwrap_or(0);

    let header = format!(
        "{:>4} {:>12}  {:>7}  {:>7}  {:>7}",
        "#", "country", "total", "men", "women"
    );
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for (idx, row) in rows.iter().enumerate() {
        let index_str = format!("{:>3}.", idx + 1);
        let bar = score_bar(row.total, max_total, bar_width);
        let body = format!(
            "{:>12}  {:>7}  {:>7}  {:>7}",
            row.id, row.total, row.male, row.female
        );
        if use_colors {
            lines.push(format!("{} {}  {}", index_str.dimmed(), body, bar.dimmed()));
        } else {
            lines.push(format!("{} {}  {}", index_str, body, bar));
        }
    }
    lines.join("\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: id, total, male, female (no headers, no colors)
pub fn format_standings_tsv(rows: &[Standing]) -> String {
    rows.iter()
        .map(|r| format!("{}\t{}\t{}\t{}", r.id, r.total, r.male, r.female))
        .collect::<Vec<_>>()
        .join("\n")
}

fn gender_word(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "men",
        Gender::Female => "women",
    }
}

/// Format a by-country query: one line per event with placement and score.
pub fn format_country_query(results: &[CountryEventResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No events.".to_string();
    }

    let header = format!(
        "{:>6} {:>7} {:>10} {:>6}  {}",
        "event", "gender", "placement", "score", "note"
    );
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for r in results {
        let placement = match r.placement {
            Some(p) => p.to_string(),
            None => "-".to_string(),
        };
        let line = format!(
            "{:>6} {:>7} {:>10} {:>6}  {}",
            r.event_id,
            gender_word(r.gender),
            placement,
            r.score,
            r.note
        );
        if use_colors && r.placement.is_none() {
            lines.push(line.dimmed().to_string());
        } else {
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// Format a by-event query: one line per placement slot, filled or not.
pub fn format_event_query(results: &[PlacementResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No placements.".to_string();
    }

    let header = format!("{:>10} {:>8} {:>6}", "placement", "country", "score");
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for r in results {
        let country = match r.country {
            Some(id) => id.to_string(),
            None => "-".to_string(),
        };
        lines.push(format!("{:>10} {:>8} {:>6}", r.placement, country, r.score));
    }
    lines.join("\n")
}
