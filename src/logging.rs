use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "worldcal",
    "worldcal_calendar",
    "worldcal_events",
    "worldcal_store",
];

/// Initialize tracing from the CLI verbosity count.
///
/// No flag logs warnings only; `-v`, `-vv` and `-vvv` raise the level to
/// info, debug and trace. A set `RUST_LOG` env var wins over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
