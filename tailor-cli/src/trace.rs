use tailor::{
    error::{BoxError, ErrorContext as _},
    telemetry::tracing::subscriber::{
        EnvFilter, filter::Directive, fmt, layer::SubscriberExt, registry,
        util::SubscriberInitExt,
    },
};

use std::io::IsTerminal as _;

/// Install the global tracing subscriber, logging to stderr.
///
/// Filter directives are read from `RUST_LOG`,
/// falling back to the given default directive.
pub fn init_tracing(default_directive: impl Into<Directive>, json: bool) -> Result<(), BoxError> {
    if json {
        init_structured(default_directive)
    } else {
        init_default(default_directive)
    }
}

fn env_filter(default_directive: impl Into<Directive>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_directive.into())
        .from_env_lossy()
}

fn init_default(default_directive: impl Into<Directive>) -> Result<(), BoxError> {
    registry()
        .with(
            fmt::layer()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(env_filter(default_directive))
        .try_init()
        .context("try init (default) tracing subscriber")?;

    Ok(())
}

fn init_structured(default_directive: impl Into<Directive>) -> Result<(), BoxError> {
    registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .flatten_event(true),
        )
        .with(env_filter(default_directive))
        .try_init()
        .context("try init (structured) tracing subscriber")?;

    Ok(())
}
