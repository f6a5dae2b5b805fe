mod api;
mod commands;
mod config;
mod editor;
mod planner;
mod render;
mod store;

use anyhow::{Context, Result};
use api::RestApi;
use clap::{Parser, Subcommand};
use config::Config;
use dayplan_core::{Category, EventId, View};
use planner::Planner;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Manage your dayplan calendar events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events for a calendar view window
    Agenda {
        /// View window: month, week, day or agenda
        #[arg(short, long, default_value = "agenda")]
        view: String,
    },
    /// Create a new event
    New {
        /// Event title (prompted for when omitted)
        title: Option<String>,

        /// Start date/time, e.g. "2025-03-20" or "2025-03-20T15:00"
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time
        #[arg(short, long)]
        end: Option<String>,

        /// Category: exercise, eating, work, relax, family or social
        #[arg(short, long)]
        category: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit an existing event
    Edit {
        /// Event id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New start date/time
        #[arg(long)]
        start: Option<String>,

        /// New end date/time
        #[arg(long)]
        end: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Rm {
        /// Event id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let api = RestApi::new(&config.api_url)
        .with_context(|| format!("Invalid api_url '{}' in config", config.api_url))?;
    let mut planner = Planner::new(api);

    match cli.command {
        Commands::Agenda { view } => {
            let view = View::from_str(&view).map_err(|e| anyhow::anyhow!(e))?;
            commands::agenda::run(&mut planner, view).await
        }
        Commands::New {
            title,
            start,
            end,
            category,
            description,
        } => {
            let category = parse_category(category)?;
            commands::new::run(&mut planner, title, start, end, category, description).await
        }
        Commands::Edit {
            id,
            title,
            start,
            end,
            category,
            description,
        } => {
            let category = parse_category(category)?;
            commands::edit::run(
                &mut planner,
                EventId(id),
                title,
                start,
                end,
                category,
                description,
            )
            .await
        }
        Commands::Rm { id } => commands::rm::run(&mut planner, EventId(id)).await,
    }
}

fn parse_category(raw: Option<String>) -> Result<Option<Category>> {
    raw.map(|s| Category::from_str(&s).map_err(|e| anyhow::anyhow!(e)))
        .transpose()
}
