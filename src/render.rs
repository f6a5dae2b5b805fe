//! Colored terminal rendering of events.
//!
//! The CLI's stand-in for the calendar surface: events are listed grouped
//! by day, each with a marker dot in its category color.

use chrono::NaiveDate;
use dayplan_core::Event;
use owo_colors::OwoColorize;

/// One printable line for an event, e.g.
/// `  ● 07:00-08:00  Run  [exercise]`
pub fn event_line(event: &Event) -> String {
    let marker = match hex_rgb(event.display_color()) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    };

    let time = format!(
        "{}-{}",
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M")
    );

    let tag = match event.category {
        Some(category) => format!("[{}]", category.label().to_lowercase()),
        None => format!("[#{}]", event.id),
    };

    format!("  {} {}  {} {}", marker, time, event.title, tag.dimmed())
}

/// Human-readable day label, e.g. "Today", "Tomorrow" or "Wed Feb 25".
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Parse a `#RRGGBB` hex color.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
