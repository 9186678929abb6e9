use label_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

#[test]
fn json_logs_are_appended_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Json,
        log_file: Some(path.clone()),
        ..LogConfig::default()
    };
    init_logging(&config).unwrap();

    tracing::warn!(labels = 3, "unlabeled care-label text");

    let contents = std::fs::read_to_string(&path).unwrap();
    let line = contents.lines().next().expect("one log line");
    assert!(line.starts_with('{'));
    assert!(line.contains("unlabeled care-label text"));
    assert!(line.contains("\"labels\":3"));
}
