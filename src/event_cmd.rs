//! The `event` subcommands: CRUD on per-day event buckets.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use worldcal_events::{Comment, DateKey, Event};
use worldcal_store::{CalendarDocument, DocumentStore, SaveOutcome};

use crate::cli::{
    AddEventArgs, CommentArgs, EditEventArgs, EventCommand, ListEventsArgs, RemoveEventArgs,
};
use crate::{config, convert};

/// Dispatches an `event` subcommand.
pub fn run(command: &EventCommand) -> Result<()> {
    match command {
        EventCommand::Add(args) => add(args),
        EventCommand::List(args) => list(args),
        EventCommand::Edit(args) => edit(args),
        EventCommand::Remove(args) => remove(args),
        EventCommand::Comment(args) => comment(args),
    }
}

fn add(args: &AddEventArgs) -> Result<()> {
    let store = open_store(&args.config)?;
    let key: DateKey = args.date.parse()?;
    let mut doc = store.load()?;
    doc.events.add_event(
        key,
        Event::new(&args.title, &args.author, &args.description),
    );
    info!(date = %key, title = %args.title, "event added");
    save(&store, &doc)
}

fn list(args: &ListEventsArgs) -> Result<()> {
    let store = open_store(&args.config)?;
    let key: DateKey = args.date.parse()?;
    let doc = store.load()?;
    let events = doc.events.events_for(key);
    if events.is_empty() {
        println!("no events on {key}");
        return Ok(());
    }
    for (index, event) in events.iter().enumerate() {
        println!("[{index}] {} (by {})", event.title(), event.author());
        println!("    {}", event.description());
        for comment in event.comments() {
            println!("    > {}: {}", comment.author(), comment.text());
        }
    }
    Ok(())
}

fn edit(args: &EditEventArgs) -> Result<()> {
    let store = open_store(&args.config)?;
    let key: DateKey = args.date.parse()?;
    let mut doc = store.load()?;
    if args.index >= doc.events.events_for(key).len() {
        warn!(date = %key, index = args.index, "no event at this index, nothing edited");
        return Ok(());
    }
    // The replacement carries no comments, so the existing thread is
    // preserved by the map.
    doc.events.edit_event(
        key,
        args.index,
        Event::new(&args.title, &args.author, &args.description),
    );
    info!(date = %key, index = args.index, "event replaced");
    save(&store, &doc)
}

fn remove(args: &RemoveEventArgs) -> Result<()> {
    let store = open_store(&args.config)?;
    let key: DateKey = args.date.parse()?;
    let mut doc = store.load()?;
    if args.index >= doc.events.events_for(key).len() {
        warn!(date = %key, index = args.index, "no event at this index, nothing removed");
        return Ok(());
    }
    doc.events.remove_event(key, args.index);
    info!(date = %key, index = args.index, "event removed");
    save(&store, &doc)
}

fn comment(args: &CommentArgs) -> Result<()> {
    let store = open_store(&args.config)?;
    let key: DateKey = args.date.parse()?;
    let mut doc = store.load()?;
    if args.index >= doc.events.events_for(key).len() {
        warn!(date = %key, index = args.index, "no event at this index, comment dropped");
        return Ok(());
    }
    doc.events
        .add_comment(key, args.index, Comment::new(&args.author, &args.text));
    info!(date = %key, index = args.index, "comment added");
    save(&store, &doc)
}

fn open_store(config_path: &Path) -> Result<DocumentStore> {
    let config = config::load(config_path)?;
    Ok(convert::build_store(&config.store))
}

fn save(store: &DocumentStore, doc: &CalendarDocument) -> Result<()> {
    match store
        .save(doc)
        .context("failed to save calendar document")?
    {
        SaveOutcome::Persisted => info!("calendar document saved"),
        SaveOutcome::LocalOnly => {
            warn!("primary store unreachable, changes saved to local cache only");
        }
    }
    Ok(())
}
