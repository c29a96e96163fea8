use flagpole_logger::{LevelFilter, Logger};

#[test]
fn json_logger_initializes() {
    let logger = Logger::builder()
        .name("integration-json")
        .json(true)
        .level(LevelFilter::DEBUG)
        .init()
        .expect("logger should initialize");

    tracing::info!(flag = "EnforceMultiVA", value = true, "Feature flag set");
    assert_eq!(logger.name(), "integration-json");
}
