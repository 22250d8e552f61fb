//! Forwarding sink for the standard [`log`] facade.

use log::kv;

use crate::{ContextMap, Logger, Severity, StaticCowStr};

/// A [`Logger`] sink that forwards every record to the global [`log`] facade.
///
/// The eight severities are mapped onto the facade's five levels
/// (`emergency`/`alert`/`critical`/`error` become [`log::Level::Error`],
/// `warning` becomes `Warn`, `notice`/`info` become `Info`, `debug` becomes
/// `Debug`); the original severity name travels as a `severity` key-value
/// pair so the distinction survives the mapping. Context entries are attached
/// as structured key-values, which backends such as `env_logger` (with its
/// `kv` feature) or `structured-logger` can render.
///
/// # Example
///
/// ```
/// use mdc_logger::{ContextMap, Logger, MdcLogger, StdLog};
///
/// env_logger::builder()
///     .filter_level(log::LevelFilter::Info)
///     .init();
///
/// let logger = MdcLogger::new(StdLog::new().target("api"));
/// logger.add_global_context("service", "api");
/// logger.notice("ready", ContextMap::new());
/// ```
#[derive(Debug)]
pub struct StdLog {
    target: StaticCowStr,
}

impl StdLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: StaticCowStr::Borrowed("mdc"),
        }
    }

    /// Sets the target recorded on forwarded records.
    #[must_use]
    pub fn target(mut self, target: impl Into<StaticCowStr>) -> Self {
        self.target = target.into();
        self
    }
}

impl Default for StdLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for StdLog {
    fn log(&self, severity: Severity, message: &str, context: ContextMap) {
        let source = TaggedSource {
            severity,
            context: &context,
        };
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{message}"))
                .level(level_for(severity))
                .target(&self.target)
                .key_values(&source)
                .build(),
        );
    }
}

const fn level_for(severity: Severity) -> log::Level {
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
            log::Level::Error
        }
        Severity::Warning => log::Level::Warn,
        Severity::Notice | Severity::Info => log::Level::Info,
        Severity::Debug => log::Level::Debug,
    }
}

struct TaggedSource<'a> {
    severity: Severity,
    context: &'a ContextMap,
}

impl kv::Source for TaggedSource<'_> {
    fn visit<'kvs>(
        &'kvs self,
        visitor: &mut dyn kv::VisitSource<'kvs>,
    ) -> Result<(), kv::Error> {
        visitor.visit_pair(
            kv::Key::from_str("severity"),
            kv::Value::from(self.severity.as_str()),
        )?;
        kv::Source::visit(self.context, visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_collapse_onto_facade_levels() {
        assert_eq!(level_for(Severity::Emergency), log::Level::Error);
        assert_eq!(level_for(Severity::Error), log::Level::Error);
        assert_eq!(level_for(Severity::Warning), log::Level::Warn);
        assert_eq!(level_for(Severity::Notice), log::Level::Info);
        assert_eq!(level_for(Severity::Info), log::Level::Info);
        assert_eq!(level_for(Severity::Debug), log::Level::Debug);
    }
}
