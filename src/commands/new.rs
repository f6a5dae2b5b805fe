//! Create a new event through the editor.

use super::{plus_one_hour, split_datetime};
use crate::api::EventsApi;
use crate::editor::{Editor, SubmitError, Submitted};
use crate::planner::Planner;
use anyhow::Result;
use chrono::Utc;
use dayplan_core::Category;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

pub async fn run<A: EventsApi>(
    planner: &mut Planner<A>,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    category: Option<Category>,
    description: Option<String>,
) -> Result<()> {
    let interactive = title.is_none();

    let mut editor = Editor::default();
    // No slot and no selected event: the draft defaults to now -> now + 1h
    let draft = editor.open(None, None, Utc::now());

    // --- Title ---
    draft.title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Category ---
    draft.category = match category {
        Some(c) => c,
        None if interactive => prompt_category(draft.category)?,
        None => draft.category,
    };

    // --- Start / End ---
    if let Some(start) = &start {
        let (date, time) = split_datetime(start, "09:00");
        draft.start_date = date.clone();
        draft.start_time = time.clone();
        // End follows the start by an hour unless given explicitly
        draft.end_date = date;
        draft.end_time = plus_one_hour(&time).unwrap_or_else(|| "10:00".to_string());
    }
    if let Some(end) = &end {
        let fallback = plus_one_hour(&draft.start_time).unwrap_or_else(|| "10:00".to_string());
        let (date, time) = split_datetime(end, &fallback);
        draft.end_date = date;
        draft.end_time = time;
    }

    if let Some(description) = description {
        draft.description = description;
    }

    match editor.submit(planner).await {
        Ok(Submitted::Created(id)) => {
            println!("{} Created event #{}", "✓".green(), id);
            Ok(())
        }
        Ok(Submitted::Updated(_)) => unreachable!("new drafts always create"),
        Err(SubmitError::Draft(err)) => anyhow::bail!("{}", err),
        Err(SubmitError::Api(err)) => {
            // Creates are the one operation the backend answers with a
            // JSON error payload; pass it along
            match err.detail() {
                Some(detail) => anyhow::bail!("{}: {}", err, detail),
                None => Err(err.into()),
            }
        }
        Err(err) => Err(err.into()),
    }
}

fn prompt_category(current: Category) -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let default = Category::ALL
        .iter()
        .position(|c| *c == current)
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt("  Category")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Category::ALL[picked])
}
