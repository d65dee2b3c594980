use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "zodiac_match=debug,info"
    } else {
        "zodiac_match=info"
    }
}

/// `RUST_LOG` wins over the built-in directives.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

fn base_layer<S>() -> fmt::Layer<S> {
    fmt::layer().with_target(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(base_layer().compact())
        .init();
}

/// JSON lines on stderr, for running behind a log collector.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(base_layer().with_writer(std::io::stderr).json())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_crate_level_only() {
        assert_eq!(default_directives(false), "zodiac_match=info");
        assert_eq!(default_directives(true), "zodiac_match=debug,info");
        assert!(default_directives(true).parse::<EnvFilter>().is_ok());
    }
}
