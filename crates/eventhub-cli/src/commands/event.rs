//! Event catalog commands.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_entity::event::Event;
use eventhub_service::EventService;
use eventhub_service::event::CreateEventInput;

use crate::output::{self, OutputFormat};

/// Arguments for event commands
#[derive(Debug, Args)]
pub struct EventArgs {
    /// Event subcommand
    #[command(subcommand)]
    pub command: EventCommand,
}

/// Event subcommands
#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Add an event to the catalog
    Create(CreateArgs),
    /// List every event
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Fields for a new event
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Title
    #[arg(long)]
    pub title: String,
    /// Date as RFC 3339, e.g. 2030-05-01T19:00:00Z
    #[arg(long, value_parser = parse_date)]
    pub date: DateTime<Utc>,
    /// Venue
    #[arg(long)]
    pub venue: Option<String>,
    /// Description
    #[arg(long)]
    pub description: Option<String>,
    /// Display start time, e.g. 19:00
    #[arg(long)]
    pub start_time: Option<String>,
    /// Display end time
    #[arg(long)]
    pub end_time: Option<String>,
    /// Price per seat (default 0)
    #[arg(long)]
    pub price: Option<f64>,
    /// Seats offered (default 100)
    #[arg(long)]
    pub capacity: Option<i32>,
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 date: {e}"))
}

#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    /// Event ID
    id: String,
    /// Title
    title: String,
    /// Date
    date: String,
    /// Venue
    venue: String,
    /// Price
    price: String,
    /// Remaining seats
    capacity: i32,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            date: event.date.format("%Y-%m-%d %H:%M UTC").to_string(),
            venue: event.venue.clone(),
            price: format!("{:.2}", event.price),
            capacity: event.capacity,
        }
    }
}

/// Execute event commands
pub async fn execute(args: &EventArgs, config: &AppConfig) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let events = EventService::new(stores.events, stores.users);

    match &args.command {
        EventCommand::Create(create) => {
            let event = events
                .insert(CreateEventInput {
                    title: create.title.clone(),
                    description: create.description.clone(),
                    venue: create.venue.clone(),
                    date: create.date,
                    start_time: create.start_time.clone(),
                    end_time: create.end_time.clone(),
                    price: create.price,
                    capacity: create.capacity,
                })
                .await?;

            output::print_success(&format!("Event '{}' created.", event.title));
            output::print_kv("Event ID", &event.id.to_string());
            output::print_kv("Capacity", &event.capacity.to_string());
        }
        EventCommand::List { format } => {
            let all = events.list_all().await?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&all)
                        .map_err(|e| AppError::internal(format!("Failed to render events: {e}")))?;
                    println!("{json}");
                }
                OutputFormat::Table => {
                    let rows: Vec<EventRow> = all.iter().map(EventRow::from).collect();
                    output::print_list(&rows, *format);
                }
            }
        }
    }

    Ok(())
}
