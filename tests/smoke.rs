use std::collections::BTreeMap;

use mdc_logger::{ContextMap, Logger, MdcLogger, Severity};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::MemoryLogger;

pub mod common;

fn wrapped() -> (MdcLogger, MemoryLogger) {
    let sink = MemoryLogger::new();
    (MdcLogger::new(sink.clone()), sink)
}

#[test]
fn global_context_last_write_wins() {
    let (logger, _) = wrapped();

    logger.add_global_context("key", "value");
    assert_eq!(
        logger.global_context().get("key").map(String::as_str),
        Some("value")
    );

    logger.add_global_context("key", "replaced");
    assert_eq!(
        logger.global_context().get("key").map(String::as_str),
        Some("replaced")
    );
    assert_eq!(logger.global_context().len(), 1);
}

#[test]
fn clear_global_context_is_idempotent() {
    let (logger, _) = wrapped();

    logger.add_global_context("a", "1");
    logger.add_global_context("b", "2");

    logger.clear_global_context();
    assert_eq!(logger.global_context(), BTreeMap::new());

    logger.clear_global_context();
    assert_eq!(logger.global_context(), BTreeMap::new());
}

#[test]
fn every_severity_forwards_exactly_once_with_combined_shape() {
    let (logger, sink) = wrapped();
    logger.add_global_context("key", "value");

    for (calls, severity) in Severity::ALL.into_iter().enumerate() {
        logger.log(
            severity,
            "test",
            ContextMap::new().record("local_key", "local_value"),
        );

        let records = sink.records();
        assert_eq!(records.len(), calls + 1);

        let record = &records[calls];
        assert_eq!(record.severity, severity);
        assert_eq!(record.message, "test");
        assert_eq!(
            record.context,
            json!({
                "mdc_context": {"key": "value"},
                "local_context": {"local_key": "local_value"},
            })
        );
    }
}

#[test]
fn named_level_methods_hit_matching_severities() {
    let (logger, sink) = wrapped();

    logger.emergency("m", ContextMap::new());
    logger.alert("m", ContextMap::new());
    logger.critical("m", ContextMap::new());
    logger.error("m", ContextMap::new());
    logger.warning("m", ContextMap::new());
    logger.notice("m", ContextMap::new());
    logger.info("m", ContextMap::new());
    logger.debug("m", ContextMap::new());

    let severities: Vec<Severity> = sink.records().iter().map(|r| r.severity).collect();
    assert_eq!(severities, Severity::ALL.to_vec());
}

#[test]
fn error_call_carries_both_contexts() {
    let (logger, sink) = wrapped();
    logger.add_global_context("key", "value");

    logger.error(
        "test",
        ContextMap::new().record("local_key", "local_value"),
    );

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Error);
    assert_eq!(records[0].message, "test");
    assert_eq!(
        records[0].context,
        json!({
            "mdc_context": {"key": "value"},
            "local_context": {"local_key": "local_value"},
        })
    );
}

#[test]
fn empty_contexts_still_produce_both_keys() {
    let (logger, sink) = wrapped();

    logger.info("hello", ContextMap::new());

    assert_eq!(
        sink.records()[0].context,
        json!({"mdc_context": {}, "local_context": {}})
    );
}

#[test]
fn configured_keys_replace_the_defaults() {
    let sink = MemoryLogger::new();
    let logger = MdcLogger::new(sink.clone())
        .mdc_context_key("custom_key")
        .local_context_key("call_site");
    logger.add_global_context("key", "value");

    logger.info("hello", ContextMap::new().record("attempt", 1));

    assert_eq!(
        sink.records()[0].context,
        json!({
            "custom_key": {"key": "value"},
            "call_site": {"attempt": 1},
        })
    );
}

#[test]
fn global_context_snapshot_is_not_live() {
    let (logger, sink) = wrapped();
    logger.add_global_context("key", "value");

    let mut snapshot = logger.global_context();
    snapshot.insert("sneaky".to_owned(), "entry".to_owned());

    logger.info("hello", ContextMap::new());
    assert_eq!(
        sink.records()[0].context,
        json!({"mdc_context": {"key": "value"}, "local_context": {}})
    );
}

#[test]
fn close_drops_ambient_state_but_keeps_logging() {
    let (logger, sink) = wrapped();
    logger.add_global_context("key", "value");

    logger.close();
    assert_eq!(logger.global_context(), BTreeMap::new());

    logger.info("after close", ContextMap::new());
    assert_eq!(
        sink.records()[0].context,
        json!({"mdc_context": {}, "local_context": {}})
    );

    logger.close();
}

#[test]
fn context_mutations_between_calls_are_visible() {
    let (logger, sink) = wrapped();

    logger.info("first", ContextMap::new());
    logger.add_global_context("key", "value");
    logger.info("second", ContextMap::new());
    logger.clear_global_context();
    logger.info("third", ContextMap::new());

    let ambient: Vec<serde_json::Value> = sink
        .records()
        .iter()
        .map(|r| r.context["mdc_context"].clone())
        .collect();
    assert_eq!(ambient, vec![json!({}), json!({"key": "value"}), json!({})]);
}
