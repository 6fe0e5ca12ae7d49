use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for host applications.
///
/// Defaults to warn-level output; override with `RUST_LOG`. Calling this
/// more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
