use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub fn default_directive(verbose: bool) -> String {
    let crate_name = env!("CARGO_CRATE_NAME");
    if verbose {
        format!("{}=debug,info", crate_name)
    } else {
        format!("{}=info", crate_name)
    }
}

/// Installs the global subscriber. Log output goes to stderr, so stdout keeps
/// only the service status lines.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_targets_this_crate() {
        assert_eq!(default_directive(false), "sample_middleware=info");
        assert_eq!(default_directive(true), "sample_middleware=debug,info");
    }
}
