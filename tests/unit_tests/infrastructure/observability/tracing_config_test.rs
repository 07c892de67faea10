use reelchat::infrastructure::observability::TracingConfig;
use reelchat::presentation::Environment;
use reelchat::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_copies_level_and_format() {
    let settings = LoggingSettings {
        level: "warn,reelchat=info".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn,reelchat=info");
}
