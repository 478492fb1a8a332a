use crate::LogLevel;

use log::LevelFilter;

#[test]
fn given_known_levels_when_parsed_then_they_map_to_level_filter() {
    for (input, expected) in [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
        ("DEBUG", LevelFilter::Debug),
    ] {
        let level: LogLevel = input.parse().unwrap();
        assert_eq!(LevelFilter::from(level), expected, "input: {input}");
    }
}

#[test]
fn given_unknown_level_when_parsed_then_it_falls_back_to_info() {
    let level: LogLevel = "verbose".parse().unwrap();

    assert_eq!(LevelFilter::from(level), LevelFilter::Info);
    assert_eq!(LogLevel::default(), level);
}

#[test]
fn given_toml_value_when_deserialized_then_level_is_read() {
    #[derive(serde::Deserialize)]
    struct Probe {
        level: LogLevel,
    }

    let probe: Probe = toml::from_str("level = \"trace\"").unwrap();

    assert_eq!(LevelFilter::from(probe.level), LevelFilter::Trace);
}
