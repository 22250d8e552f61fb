use mdc_logger::{ContextMap, ContextValue, Logger, MdcLogger, StdLog};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Operation {
    action: String,
    name: String,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let logger = MdcLogger::new(StdLog::new().target("mdc_log"));

    // Ambient context for the whole unit of work.
    logger.add_global_context("request_id", "req-42");
    logger.add_global_context("tenant", "acme");

    logger.info("logging in", ContextMap::new().record("user_id", "12345"));

    logger.notice(
        "user logged in",
        ContextMap::new().record(
            "operation",
            ContextValue::serde(Operation {
                action: "login".to_string(),
                name: "user".to_string(),
            }),
        ),
    );

    logger.clear_global_context();
    logger.warning("ambient context cleared", ContextMap::new());
}
