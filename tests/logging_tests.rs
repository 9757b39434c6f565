use log::LevelFilter;
use salvo::parse_log_level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_log_level(" WARN "), Some(LevelFilter::Warn));
    assert_eq!(parse_log_level("salvo=trace"), Some(LevelFilter::Trace));
    assert_eq!(parse_log_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_log_level("clap=debug"), None);
    assert_eq!(parse_log_level("loud"), None);
}
