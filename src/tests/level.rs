// Unit Tests for Log Levels
//
// UNIT UNDER TEST: Level
//
// BUSINESS RESPONSIBILITY:
//   - Orders severities so the filter can compare them
//   - Names levels the way records spell them
//   - Parses level names from configuration
//
// TEST COVERAGE:
//   - Ordering and threshold selection
//   - Textual names
//   - Parsing, aliases and rejection of unknown names

use crate::error::LogError;
use crate::level::Level;

#[cfg(test)]
mod level_tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_threshold_follows_debug_flag() {
        assert_eq!(Level::threshold(true), Level::Debug);
        assert_eq!(Level::threshold(false), Level::Info);
    }

    #[test]
    fn test_display_uses_lowercase_names() {
        let names: Vec<String> = [Level::Debug, Level::Info, Level::Warn, Level::Error]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["debug", "info", "warn", "error"]);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_accepts_warning() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!(" Info ".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        let result = "verbose".parse::<Level>();

        match result {
            Err(LogError::InvalidLevel { level }) => assert_eq!(level, "verbose"),
            other => panic!("Expected InvalidLevel, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Level::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let level: Level = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(level, Level::Error);
    }
}
