use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber once. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let default = if verbose {
            "info,ns_cli=debug,ns_sources=debug,ns_web=debug,ns_storage=debug,ns_inference=debug"
        } else {
            "info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    });
}
