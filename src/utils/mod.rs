use std::sync::Once;

use tracing_subscriber::filter::Directive;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "safra_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `extra` is an additional directive (usually from the user configuration);
/// an unparsable value is ignored in favour of the default. Returns `true`
/// only for the call that installed the subscriber.
pub fn init_tracing(extra: Option<&str>) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let directive = extra
            .and_then(|raw| raw.parse::<Directive>().ok())
            .or_else(|| DEFAULT_DIRECTIVE.parse::<Directive>().ok());

        let mut filter = EnvFilter::from_default_env();
        if let Some(directive) = directive {
            filter = filter.add_directive(directive);
        }

        fmt().with_env_filter(filter).init();
        installed = true;
    });
    installed
}
