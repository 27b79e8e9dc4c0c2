// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
#[must_use]
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();
    match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_filter(level_filter),
        ),
    }
}

/// Install a global subscriber built from `options`. Does nothing when the level filter
/// is `OFF`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let config: TracingConfig = options.into();

    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(create_display_layer::<tracing_subscriber::Registry>(
            config.get_level_filter(),
            config.get_display_preference(),
        ))
        .try_init()
        .into_diagnostic()
}

/// Install a subscriber for the current thread only, until the returned guard is
/// dropped. Useful in tests.
#[must_use]
pub fn install_thread_local(
    options: impl Into<TracingConfig>,
) -> tracing::subscriber::DefaultGuard {
    let config: TracingConfig = options.into();
    tracing_subscriber::registry()
        .with(create_display_layer::<tracing_subscriber::Registry>(
            config.get_level_filter(),
            config.get_display_preference(),
        ))
        .set_default()
}
