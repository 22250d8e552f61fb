//! The leveled logging capability consumed and exposed by this crate.

use crate::{ContextMap, Severity};

/// A sink for leveled, structured log calls.
///
/// Implementors only need [`log`](Logger::log); the eight severity shorthands
/// default to it. Every method takes the message together with a
/// [`ContextMap`] of structured context, which the sink is free to render or
/// serialize however it sees fit.
///
/// [`MdcLogger`](crate::MdcLogger) both consumes this trait (the wrapped
/// sink) and implements it (the decorated surface).
pub trait Logger: Send + Sync {
    /// Logs `message` at the given severity.
    fn log(&self, severity: Severity, message: &str, context: ContextMap);

    /// System is unusable.
    fn emergency(&self, message: &str, context: ContextMap) {
        self.log(Severity::Emergency, message, context);
    }

    /// Action must be taken immediately.
    fn alert(&self, message: &str, context: ContextMap) {
        self.log(Severity::Alert, message, context);
    }

    /// Critical conditions.
    fn critical(&self, message: &str, context: ContextMap) {
        self.log(Severity::Critical, message, context);
    }

    /// Runtime errors that do not require immediate action.
    fn error(&self, message: &str, context: ContextMap) {
        self.log(Severity::Error, message, context);
    }

    /// Exceptional occurrences that are not errors.
    fn warning(&self, message: &str, context: ContextMap) {
        self.log(Severity::Warning, message, context);
    }

    /// Normal but significant events.
    fn notice(&self, message: &str, context: ContextMap) {
        self.log(Severity::Notice, message, context);
    }

    /// Interesting events.
    fn info(&self, message: &str, context: ContextMap) {
        self.log(Severity::Info, message, context);
    }

    /// Detailed debugging information.
    fn debug(&self, message: &str, context: ContextMap) {
        self.log(Severity::Debug, message, context);
    }
}
