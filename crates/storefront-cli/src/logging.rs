//! Tracing subscriber setup
//!
//! Filter precedence: command-line level, then `RUST_LOG`, then the config
//! file's `logging.level`, then `info`.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

const FALLBACK_LEVEL: &str = "info";

/// Install the global subscriber, writing to stderr so command output on
/// stdout stays clean
pub fn init(flag: Option<LevelFilter>, config_level: &str) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(flag, rust_log.as_deref(), config_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn build_filter(
    flag: Option<LevelFilter>,
    rust_log: Option<&str>,
    config_level: &str,
) -> EnvFilter {
    if let Some(level) = flag {
        return EnvFilter::default().add_directive(level.into());
    }

    if let Some(directives) = rust_log.filter(|value| !value.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid RUST_LOG {directives:?}: {e}"),
        }
    }

    EnvFilter::try_new(config_level).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log level {config_level:?}: {e}");
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins() {
        let filter = build_filter(Some(LevelFilter::TRACE), Some("error"), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn rust_log_beats_config() {
        let filter = build_filter(None, Some("error"), "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn config_used_when_nothing_else() {
        let filter = build_filter(None, None, "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = build_filter(None, Some("  "), "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_config_falls_back_to_info() {
        let filter = build_filter(None, None, "storefront=loud");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
