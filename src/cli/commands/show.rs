use crate::cli::parser::{Commands, GroupBy};
use crate::config::Config;
use crate::core::logic::Agenda;
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::models::entry::EnrichedEntry;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{GREY, RESET, colorize, color_for_optional_field};
use crate::utils::date::{parse_date, trip_day, with_weekday};
use crate::utils::formatting::{
    bold, describe_entry, describe_time_category, entry_icon, mins2readable,
};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        feed,
        region,
        date,
        range,
        by,
    } = cmd
    {
        let single_day = match date {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };
        let filter = range.as_deref().map(parse_range).transpose()?;

        let mut agenda = super::agenda_from_feed(feed, region.as_deref(), cfg)?;
        // day numbering follows the full trip, not the filtered slice
        let first = agenda.first_date().map(str::to_string);

        if let Some(day) = single_day {
            let wanted = day.format("%Y-%m-%d").to_string();
            agenda.retain_dates(|d| d == wanted);
        }
        if let Some(r) = filter {
            agenda.retain_dates(|d| r.contains(d));
        }

        if agenda.is_empty() {
            warning("No schedule entries found.");
            return Ok(());
        }

        render(&agenda, *by, first.as_deref(), cfg.wrap_width);
        print_totals(&agenda);
    }
    Ok(())
}

fn day_title(date: &str, first: Option<&str>) -> String {
    match first.and_then(|f| trip_day(f, date)) {
        Some(n) => format!("{} · Day {}", with_weekday(date), n),
        None => with_weekday(date),
    }
}

fn render(agenda: &Agenda, by: GroupBy, first: Option<&str>, wrap: usize) {
    let view = agenda.view();

    match by {
        GroupBy::All => {
            header("Agenda");
            print!("{}", table(&view.all, true, true, wrap).render());
        }
        GroupBy::Region => {
            for (region, entries) in &view.by_region {
                header(format!("Region {}", region));
                print!("{}", table(entries, true, false, wrap).render());
            }
        }
        GroupBy::Date => {
            for (date, entries) in &view.by_date {
                header(day_title(date, first));
                print!("{}", table(entries, false, true, wrap).render());
            }
        }
        GroupBy::RegionDate => {
            for (region, days) in &view.by_region_then_date {
                for (date, entries) in days {
                    header(format!("Region {} · {}", region, day_title(date, first)));
                    print!("{}", table(entries, false, false, wrap).render());
                }
            }
        }
    }
}

fn table(entries: &[&EnrichedEntry], with_date: bool, with_region: bool, wrap: usize) -> Table {
    let mut columns = Vec::new();
    if with_date {
        columns.push(Column::new("DATE", 10));
    }
    if with_region {
        columns.push(Column::new("REG", 3));
    }
    columns.push(Column::new("TIME", 5));
    columns.push(Column::new("PART", 4));
    columns.push(Column::new("ACTIVITY", 28));
    columns.push(Column::new("LOCATION", 24));
    let lead = columns.len() - 2;

    let mut t = Table::new(columns);
    for e in entries {
        let (part, color) = describe_time_category(e.time_category);
        let location = e.location.clone().unwrap_or_else(|| "-".to_string());

        let mut row = Vec::new();
        if with_date {
            row.push(e.date.clone());
        }
        if with_region {
            row.push(e.region.to_string());
        }
        row.push(e.time.clone());
        row.push(colorize(part, color));
        row.push(format!("{} {}", entry_icon(e), describe_entry(e)));
        row.push(format!(
            "{}{}{}",
            color_for_optional_field(e.location.as_deref()),
            location,
            RESET
        ));
        t.add_row(row);

        if let Some(desc) = e.description.as_deref().filter(|d| !d.trim().is_empty()) {
            for line in textwrap::wrap(desc, wrap.max(20)) {
                let mut extra = vec![String::new(); lead];
                extra.push(format!("   {GREY}{line}{RESET}"));
                extra.push(String::new());
                t.add_row(extra);
            }
        }
    }
    t
}

fn print_totals(agenda: &Agenda) {
    let travel: Vec<u32> = agenda
        .entries
        .iter()
        .filter_map(EnrichedEntry::travel_time)
        .collect();
    let free = agenda.entries.iter().filter(|e| e.is_free_time()).count();

    println!(
        "\n{} entries · {} travel segments ({}) · {} free-time slots",
        bold(&agenda.len().to_string()),
        travel.len(),
        mins2readable(travel.iter().sum()),
        free
    );
}
