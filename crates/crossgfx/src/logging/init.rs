use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` directive syntax (e.g. "info",
/// "crossgfx::record=trace"). When it is unset and `RUST_LOG` is empty, every
/// target logs at `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    pub fn with_level(level: LevelFilter) -> Self {
        Self { default_level: level, ..Self::default() }
    }

    /// Captured, uncolored, and verbose enough to show skipped draws.
    pub fn for_tests() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Trace,
            write_style: env_logger::WriteStyle::Never,
            is_test: true,
        }
    }

    /// Directives to hand to `env_logger`: explicit filter, then `rust_log`,
    /// then `default_level`.
    fn directives(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log.filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| self.default_level.to_string())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored, and so is a logger installed by someone else
/// first.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&directives)
            .write_style(config.write_style)
            .is_test(config.is_test);

        if builder.try_init().is_ok() {
            log::debug!("crossgfx logging initialized with {directives:?}");
        }
    });
}
