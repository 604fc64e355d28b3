#[cfg(feature = "trace")]
use std::sync::Once;

use std::path::Path;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install the global subscriber. JSON lines go to `terbilang-trace.jsonl`
/// under `log_dir` when given, plain text to stderr otherwise.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("terbilang_core=debug,terbilang_cli=debug")
        });
        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "terbilang-trace.jsonl");
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&Path>) {}
