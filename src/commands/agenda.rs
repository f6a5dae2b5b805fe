//! List events for a calendar view window.

use crate::api::EventsApi;
use crate::planner::Planner;
use crate::render;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use dayplan_core::View;
use owo_colors::OwoColorize;

pub async fn run<A: EventsApi>(planner: &mut Planner<A>, view: View) -> Result<()> {
    if planner.refresh(view, Utc::now()).await.is_err() {
        // List failures land on the store; the prior cache stays intact
        let message = planner.store().error().unwrap_or("unknown error").to_string();
        anyhow::bail!("Could not refresh events: {}", message);
    }

    let mut events = planner.events().to_vec();
    events.sort_by_key(|e| e.start_time);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let today = Utc::now().date_naive();
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        let date = event.start_time.date_naive();

        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", render::date_label(date, today).bold());
            current_date = Some(date);
        }

        println!("{}", render::event_line(event));
    }

    Ok(())
}
