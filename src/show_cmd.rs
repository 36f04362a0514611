//! The `show` subcommand: render one month of the calendar.

use anyhow::{Context, Result};
use tracing::info;

use worldcal_calendar::{Direction, Navigator};

use crate::cli::ShowArgs;
use crate::{config, convert, render};

/// Anchors a session at the given days-played count, navigates the
/// requested number of months away, and prints the month grid with
/// event previews.
pub fn run(args: &ShowArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    let store = convert::build_store(&config.store);

    let mut navigator = Navigator::new();
    navigator.set_anchor(args.days_played)?;

    let direction = if args.offset < 0 {
        Direction::Previous
    } else {
        Direction::Next
    };
    for _ in 0..args.offset.unsigned_abs() {
        navigator.navigate(direction)?;
    }

    let info = navigator.render_info()?;
    info!(
        year = info.year(),
        month = info.month(),
        "rendering viewed month"
    );

    let doc = store.load().context("failed to load calendar document")?;
    print!("{}", render::month_grid(&info, &doc.events));
    Ok(())
}
