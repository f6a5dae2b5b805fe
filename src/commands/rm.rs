//! Delete an event by id.

use crate::api::EventsApi;
use crate::planner::Planner;
use anyhow::Result;
use dayplan_core::EventId;
use owo_colors::OwoColorize;

/// Idempotent: removing an id the server no longer has still succeeds.
pub async fn run<A: EventsApi>(planner: &mut Planner<A>, id: EventId) -> Result<()> {
    planner.delete(id).await?;
    println!("{} Deleted event #{}", "✓".green(), id);
    Ok(())
}
