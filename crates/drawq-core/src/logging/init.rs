use std::sync::Once;

use log::LevelFilter;

/// Where the logger gets its filter, in priority order: `env_filter`, then `RUST_LOG`, then
/// `fallback_level`.
///
/// Key space diagnostics are emitted at `debug` (rejected conversions) and `trace` (unknown
/// keys), so `drawq_core=trace` shows everything this crate reports.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter directives this config resolves to, or `None` to use `fallback_level`.
    fn directives(&self, rust_log: Option<String>) -> Option<String> {
        self.env_filter.clone().or(rust_log).filter(|d| !d.trim().is_empty())
    }

    fn builder(&self, rust_log: Option<String>) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.directives(rust_log) {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(self.fallback_level),
        };
        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on first call; later calls do nothing.
///
/// A logger installed earlier by the host application is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        match config.builder(rust_log).try_init() {
            Ok(()) => log::debug!("drawq logging initialized"),
            Err(_) => log::debug!("global logger already installed, keeping it"),
        }
    });
}
