//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Build the filter: `RUST_LOG` when set and valid, else `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed; calling this more
/// than once is harmless.
pub fn init_tracing(default_directive: &str) -> bool {
    init_tracing_with(default_directive, LogFormat::Pretty)
}

/// Like [`init_tracing`] with an explicit output format.
pub fn init_tracing_with(default_directive: &str, format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(true);

    let installed = match format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(?format, "Tracing initialised");
    }
    installed
}
