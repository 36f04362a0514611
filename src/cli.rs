use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Worldcal perpetual world calendar.
#[derive(Parser)]
#[command(
    name = "worldcal",
    version,
    about = "Perpetual 365-day world calendar with per-day events"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render one month of the calendar.
    Show(ShowArgs),
    /// Manage events on calendar days.
    #[command(subcommand)]
    Event(EventCommand),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "worldcal.toml")]
    pub config: PathBuf,

    /// Days played in the world (the anchor day-count, >= 1).
    #[arg(short, long)]
    pub days_played: i64,

    /// Months to navigate away from the anchor (negative for earlier months).
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i32,
}

/// Event management subcommands.
#[derive(Subcommand)]
pub enum EventCommand {
    /// Add an event to a day.
    Add(AddEventArgs),
    /// List the events on a day.
    List(ListEventsArgs),
    /// Replace an event on a day.
    Edit(EditEventArgs),
    /// Remove an event from a day.
    Remove(RemoveEventArgs),
    /// Comment on an event.
    Comment(CommentArgs),
}

/// Arguments for `event add`.
#[derive(clap::Args)]
pub struct AddEventArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "worldcal.toml")]
    pub config: PathBuf,

    /// Date key of the day, as "year-month-day" with a zero-based month.
    #[arg(long)]
    pub date: String,

    /// Event title.
    #[arg(long)]
    pub title: String,

    /// Event author.
    #[arg(long)]
    pub author: String,

    /// Event description.
    #[arg(long)]
    pub description: String,
}

/// Arguments for `event list`.
#[derive(clap::Args)]
pub struct ListEventsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "worldcal.toml")]
    pub config: PathBuf,

    /// Date key of the day, as "year-month-day" with a zero-based month.
    #[arg(long)]
    pub date: String,
}

/// Arguments for `event edit`.
#[derive(clap::Args)]
pub struct EditEventArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "worldcal.toml")]
    pub config: PathBuf,

    /// Date key of the day, as "year-month-day" with a zero-based month.
    #[arg(long)]
    pub date: String,

    /// Index of the event within the day, as shown by `event list`.
    #[arg(long)]
    pub index: usize,

    /// New event title.
    #[arg(long)]
    pub title: String,

    /// New event author.
    #[arg(long)]
    pub author: String,

    /// New event description.
    #[arg(long)]
    pub description: String,
}

/// Arguments for `event remove`.
#[derive(clap::Args)]
pub struct RemoveEventArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "worldcal.toml")]
    pub config: PathBuf,

    /// Date key of the day, as "year-month-day" with a zero-based month.
    #[arg(long)]
    pub date: String,

    /// Index of the event within the day, as shown by `event list`.
    #[arg(long)]
    pub index: usize,
}

/// Arguments for `event comment`.
#[derive(clap::Args)]
pub struct CommentArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "worldcal.toml")]
    pub config: PathBuf,

    /// Date key of the day, as "year-month-day" with a zero-based month.
    #[arg(long)]
    pub date: String,

    /// Index of the event within the day, as shown by `event list`.
    #[arg(long)]
    pub index: usize,

    /// Comment author.
    #[arg(long)]
    pub author: String,

    /// Comment text.
    #[arg(long)]
    pub text: String,
}
