//! Formatting utilities used for CLI and export outputs.

use crate::models::entry::{EnrichedEntry, EntryKind, TimeCategory};
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, MAGENTA, RESET, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// 15 -> "15 min", 95 -> "1h 35m"
pub fn mins2readable(mins: u32) -> String {
    if mins < 60 {
        format!("{} min", mins)
    } else {
        format!("{}h {:02}m", mins / 60, mins % 60)
    }
}

/// Label and ANSI colour for a time-of-day bucket.
pub fn describe_time_category(cat: TimeCategory) -> (&'static str, &'static str) {
    match cat {
        TimeCategory::Morning => ("AM", YELLOW),
        TimeCategory::Afternoon => ("PM", CYAN),
        TimeCategory::Evening => ("EVE", MAGENTA),
    }
}

/// Icon shown in front of an agenda row.
pub fn entry_icon(e: &EnrichedEntry) -> &'static str {
    match e.kind {
        EntryKind::Travel { .. } => "🚌",
        EntryKind::FreeTime => "🕊️",
        EntryKind::Activity if e.is_meal => "🍽️",
        EntryKind::Activity => "📍",
    }
}

/// Single-line activity text, coloured by entry kind.
pub fn describe_entry(e: &EnrichedEntry) -> String {
    match e.kind {
        EntryKind::Travel { travel_time } => format!(
            "{GREY}{} ({}){RESET}",
            e.activity,
            mins2readable(travel_time)
        ),
        EntryKind::FreeTime => format!("{GREEN}{}{RESET}", e.activity),
        EntryKind::Activity if e.is_meal => format!("{BLUE}{}{RESET}", e.activity),
        EntryKind::Activity => e.activity.clone(),
    }
}
