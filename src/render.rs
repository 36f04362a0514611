//! Plain-text month grid rendering.

use worldcal_calendar::RenderInfo;
use worldcal_events::{DateKey, EventMap, DEFAULT_PREVIEW_CHARS, DEFAULT_PREVIEW_COUNT};

/// Display names for the twelve months.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Labels for the seven grid columns. The week has no real-world
/// identity here; the labels only name columns.
const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const CELL_WIDTH: usize = 5;

/// Renders one month as a text grid, the anchor day marked with `*`,
/// followed by per-day event previews.
pub fn month_grid(info: &RenderInfo, events: &EventMap) -> String {
    let mut out = String::new();
    let width = CELL_WIDTH * WEEKDAY_LABELS.len();
    out.push_str(&format!("{:^width$}\n", month_title(info)));
    for label in WEEKDAY_LABELS {
        out.push_str(&format!("{label:>4} "));
    }
    out.push('\n');

    let mut column = info.weekday_offset();
    out.push_str(&" ".repeat(CELL_WIDTH * usize::from(column)));
    for day in 1..=info.days_in_month() {
        let marker = if info.highlighted_day() == Some(day) {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!("{day:>3}{marker} "));
        column += 1;
        if column == 7 {
            column = 0;
            trim_line_end(&mut out);
        }
    }
    if column != 0 {
        trim_line_end(&mut out);
    }

    let previews = day_previews(info, events);
    if !previews.is_empty() {
        out.push('\n');
        out.push_str(&previews);
    }
    out
}

fn month_title(info: &RenderInfo) -> String {
    format!("{} {}", MONTH_NAMES[usize::from(info.month())], info.year())
}

fn day_previews(info: &RenderInfo, events: &EventMap) -> String {
    let mut out = String::new();
    for day in 1..=info.days_in_month() {
        let key = DateKey::new(info.year(), info.month(), day);
        let bucket = events.events_for(key);
        if bucket.is_empty() {
            continue;
        }
        let titles = events.preview_titles(key, DEFAULT_PREVIEW_COUNT, DEFAULT_PREVIEW_CHARS);
        out.push_str(&format!("{day:>3}: {}", titles.join(", ")));
        let hidden = bucket.len().saturating_sub(DEFAULT_PREVIEW_COUNT);
        if hidden > 0 {
            out.push_str(&format!(" (+{hidden} more)"));
        }
        out.push('\n');
    }
    out
}

fn trim_line_end(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldcal_calendar::Navigator;
    use worldcal_events::Event;

    fn info_for(anchor: i64) -> RenderInfo {
        let mut navigator = Navigator::new();
        navigator.set_anchor(anchor).unwrap();
        navigator.render_info().unwrap()
    }

    #[test]
    fn epoch_month_starts_in_first_column() {
        let grid = month_grid(&info_for(1), &EventMap::new());
        let lines: Vec<&str> = grid.lines().collect();
        assert!(lines[0].contains("January 0"));
        assert_eq!(lines[1].trim(), "Su   Mo   Tu   We   Th   Fr   Sa");
        // Day 1 is the anchor day, starred, in column 0.
        assert!(lines[2].starts_with("  1*"));
    }

    #[test]
    fn grid_has_seven_columns_per_full_row() {
        let grid = month_grid(&info_for(1), &EventMap::new());
        let lines: Vec<&str> = grid.lines().collect();
        // 31 days starting in column 0: rows of 7, 7, 7, 7, then 3.
        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[2].trim_end().ends_with('7'));
        assert!(lines[6].trim_end().ends_with("31"));
    }

    #[test]
    fn offset_month_is_indented() {
        // 32 days played: month 1 starts at weekday offset 3.
        let info = info_for(32);
        assert_eq!(info.weekday_offset(), 3);
        let grid = month_grid(&info, &EventMap::new());
        let first_row = grid.lines().nth(2).unwrap();
        assert!(first_row.starts_with(&" ".repeat(3 * CELL_WIDTH)));
        assert!(first_row.contains("1*"));
    }

    #[test]
    fn star_only_on_anchor_day() {
        let grid = month_grid(&info_for(40), &EventMap::new());
        assert_eq!(grid.matches('*').count(), 1);
        assert!(grid.contains("9*")); // day-count 40 is day 9 of month 1
    }

    #[test]
    fn previews_listed_under_grid() {
        let info = info_for(32);
        let mut events = EventMap::new();
        let key = DateKey::new(0, 1, 3);
        events.add_event(key, Event::new("Trade hall opening ceremony", "alex", "d"));
        events.add_event(key, Event::new("Night patrol", "kit", "d"));
        events.add_event(key, Event::new("Overflow", "sam", "d"));

        let grid = month_grid(&info, &events);
        assert!(grid.contains("  3: Trade hall opening c..., Night patrol (+1 more)"));
    }

    #[test]
    fn no_preview_section_without_events() {
        let grid = month_grid(&info_for(1), &EventMap::new());
        assert!(!grid.contains(':'));
    }
}
