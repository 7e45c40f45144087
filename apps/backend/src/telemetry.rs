use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Service events at info; framework and HTTP client chatter only when it matters.
const DEFAULT_FILTER: &str = "info,triunfo=info,actix_web=warn,actix_server=info,reqwest=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global JSON subscriber. `RUST_LOG` overrides the default filter.
///
/// Event fields (`game_id`, `route`, `trace_id`) sit at the top level of each
/// line, alongside the innermost span so request context travels with them.
pub fn init_tracing() {
    let fmt_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();
}
