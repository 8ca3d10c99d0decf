use std::io::Stderr;
use tracing_subscriber::fmt::{self, format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, format::DefaultFields, format::Format, fn() -> Stderr>;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "batchkit=debug,info"
    } else {
        "batchkit=info"
    }
}

/// `RUST_LOG` wins over the verbosity flag when set.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer().compact())
        .init();
}

/// JSON lines on stderr, for runs whose logs are collected by another tool.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer().json())
        .init();
}
