//! # Overview
//!
#![doc = include_utils::include_md!("README.md:description")]
//!
//! Services that emit structured logs usually carry two kinds of context:
//! ambient facts that hold across many consecutive calls (a request id, a
//! tenant, a deployment name) and facts that only matter for a single log
//! statement. This library keeps the two apart by:
//!
//! - Holding a mapped diagnostic context that is attached to every log call
//!   until it is cleared.
//! - Accepting per-call context that is forwarded exactly once and never
//!   retained.
//! - Presenting both to the underlying logger under two distinct,
//!   configurable keys, so sinks can tell ambient data from call-site data.
//!
//! The crate is a decorator around any [`Logger`] implementation. It performs
//! no formatting, buffering, or filtering of its own; every call is forwarded
//! synchronously to the wrapped logger, and sink failures propagate to the
//! caller unmodified.
//!
//! ## Basic example
//!
#![doc = include_utils::include_md!("README.md:basic_example")]

use std::{borrow::Cow, collections::BTreeMap};

use parking_lot::RwLock;

pub use self::{
    context::ContextMap,
    logger::Logger,
    severity::{Severity, SeverityParseError},
    stdlog::StdLog,
    value::ContextValue,
};

mod context;
mod logger;
mod severity;
mod stdlog;
mod value;

type StaticCowStr = Cow<'static, str>;

/// Key under which the global context appears in forwarded calls unless
/// overridden with [`MdcLogger::mdc_context_key`].
pub const DEFAULT_MDC_CONTEXT_KEY: &str = "mdc_context";

/// Key under which the per-call context appears in forwarded calls unless
/// overridden with [`MdcLogger::local_context_key`].
pub const DEFAULT_LOCAL_CONTEXT_KEY: &str = "local_context";

/// A logger decorator that attaches a mapped diagnostic context to every call.
///
/// `MdcLogger` wraps an existing [`Logger`] and holds a mutable map of global
/// context entries. On each leveled call it snapshots that map, pairs it with
/// the caller-supplied local context under two distinct keys, and invokes the
/// identically named method on the wrapped logger:
///
/// ```text
/// { "mdc_context": { ...global... }, "local_context": { ...local... } }
/// ```
///
/// Both keys are always present, even when either side is empty. The global
/// map is guarded by a lock, so one instance can be shared (by reference or
/// inside an `Arc`) between the code that logs and the code that maintains
/// the ambient context.
///
/// `MdcLogger` implements [`Logger`] itself, so it can stand in anywhere the
/// plain capability is expected.
///
/// # Example
///
/// ```
/// use mdc_logger::{ContextMap, Logger, MdcLogger, StdLog};
///
/// let logger = MdcLogger::new(StdLog::new());
///
/// // Ambient context sticks to every following call until cleared.
/// logger.add_global_context("request_id", "req-123");
///
/// // Per-call context travels with this one record only.
/// logger.info("processing request", ContextMap::new().record("user_id", 42));
///
/// // Reset the ambient state once the unit of work is over.
/// logger.clear_global_context();
/// ```
pub struct MdcLogger {
    global: RwLock<BTreeMap<String, String>>,
    mdc_context_key: StaticCowStr,
    local_context_key: StaticCowStr,
    inner: Box<dyn Logger>,
}

impl MdcLogger {
    /// Creates a new `MdcLogger` that wraps the given sink.
    ///
    /// The global context starts empty and the combined context uses
    /// [`DEFAULT_MDC_CONTEXT_KEY`] and [`DEFAULT_LOCAL_CONTEXT_KEY`].
    pub fn new<L>(inner: L) -> Self
    where
        L: Logger + 'static,
    {
        Self {
            global: RwLock::new(BTreeMap::new()),
            mdc_context_key: Cow::Borrowed(DEFAULT_MDC_CONTEXT_KEY),
            local_context_key: Cow::Borrowed(DEFAULT_LOCAL_CONTEXT_KEY),
            inner: Box::new(inner),
        }
    }

    /// Sets the key under which the global context is forwarded.
    ///
    /// The key is not validated; configuring it equal to the local context
    /// key makes the later entry win in self-describing formats.
    #[must_use]
    pub fn mdc_context_key(mut self, key: impl Into<StaticCowStr>) -> Self {
        self.mdc_context_key = key.into();
        self
    }

    /// Sets the key under which the per-call context is forwarded.
    #[must_use]
    pub fn local_context_key(mut self, key: impl Into<StaticCowStr>) -> Self {
        self.local_context_key = key.into();
        self
    }

    /// Inserts an entry into the global context.
    ///
    /// An entry with the same key is overwritten; the latest value wins.
    pub fn add_global_context(&self, key: impl Into<String>, value: impl Into<String>) {
        self.global.write().insert(key.into(), value.into());
    }

    /// Returns a snapshot of the current global context.
    ///
    /// The returned map is a copy; mutating it does not affect the logger.
    #[must_use]
    pub fn global_context(&self) -> BTreeMap<String, String> {
        self.global.read().clone()
    }

    /// Removes every entry from the global context. Idempotent.
    pub fn clear_global_context(&self) {
        self.global.write().clear();
    }

    /// Disposes the ambient state held by this logger.
    ///
    /// Callers that share one instance across components should invoke this
    /// (or drop the logger) once the ambient context must no longer leak into
    /// subsequent records. Logging after `close` keeps working and forwards
    /// an empty global context. Idempotent.
    pub fn close(&self) {
        self.clear_global_context();
    }

    fn combined_context(&self, local: ContextMap) -> ContextMap {
        let global = self.global.read().clone();
        ContextMap::new()
            .record(self.mdc_context_key.clone(), ContextValue::serde(global))
            .record(self.local_context_key.clone(), local)
    }
}

impl std::fmt::Debug for MdcLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MdcLogger")
            .field("mdc_context_key", &self.mdc_context_key)
            .field("local_context_key", &self.local_context_key)
            .finish_non_exhaustive()
    }
}

impl Logger for MdcLogger {
    fn log(&self, severity: Severity, message: &str, context: ContextMap) {
        self.inner
            .log(severity, message, self.combined_context(context));
    }

    fn emergency(&self, message: &str, context: ContextMap) {
        self.inner.emergency(message, self.combined_context(context));
    }

    fn alert(&self, message: &str, context: ContextMap) {
        self.inner.alert(message, self.combined_context(context));
    }

    fn critical(&self, message: &str, context: ContextMap) {
        self.inner.critical(message, self.combined_context(context));
    }

    fn error(&self, message: &str, context: ContextMap) {
        self.inner.error(message, self.combined_context(context));
    }

    fn warning(&self, message: &str, context: ContextMap) {
        self.inner.warning(message, self.combined_context(context));
    }

    fn notice(&self, message: &str, context: ContextMap) {
        self.inner.notice(message, self.combined_context(context));
    }

    fn info(&self, message: &str, context: ContextMap) {
        self.inner.info(message, self.combined_context(context));
    }

    fn debug(&self, message: &str, context: ContextMap) {
        self.inner.debug(message, self.combined_context(context));
    }
}
