//! Edit an existing event through the editor.

use super::split_datetime;
use crate::api::EventsApi;
use crate::editor::{Editor, SubmitError, Submitted};
use crate::planner::Planner;
use anyhow::Result;
use chrono::Utc;
use dayplan_core::{Category, EventId, View};
use owo_colors::OwoColorize;

pub async fn run<A: EventsApi>(
    planner: &mut Planner<A>,
    id: EventId,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    category: Option<Category>,
    description: Option<String>,
) -> Result<()> {
    if title.is_none()
        && start.is_none()
        && end.is_none()
        && category.is_none()
        && description.is_none()
    {
        anyhow::bail!(
            "Nothing to change. Pass at least one of --title, --start, --end, --category, --description"
        );
    }

    // Look the event up in the widest window the views use
    planner.refresh(View::Agenda, Utc::now()).await?;

    let Some(event) = planner.store().get(id).cloned() else {
        anyhow::bail!(
            "Event #{} not found between one month ago and two months from now",
            id
        );
    };

    let mut editor = Editor::default();
    let draft = editor.open(None, Some(&event), Utc::now());

    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(category) = category {
        draft.category = category;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(start) = &start {
        let fallback = draft.start_time.clone();
        let (date, time) = split_datetime(start, &fallback);
        draft.start_date = date;
        draft.start_time = time;
    }
    if let Some(end) = &end {
        let fallback = draft.end_time.clone();
        let (date, time) = split_datetime(end, &fallback);
        draft.end_date = date;
        draft.end_time = time;
    }

    match editor.submit(planner).await {
        Ok(Submitted::Updated(id)) => {
            println!("{} Updated event #{}", "✓".green(), id);
            Ok(())
        }
        Ok(Submitted::Created(_)) => unreachable!("editing an existing event always updates"),
        Err(SubmitError::Draft(err)) => anyhow::bail!("{}", err),
        Err(err) => Err(err.into()),
    }
}
