use std::collections::HashMap;
use std::time::Duration;

use fanart_screensaver::settings::{FontSize, Settings};

fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_source_yields_documented_defaults() {
    let settings = Settings::resolve(&HashMap::<String, String>::new());
    assert_eq!(settings.interval, Duration::from_secs(10));
    assert!(settings.show_title);
    assert_eq!(settings.font_size, FontSize::Medium);
    assert!(settings.show_year);
    assert_eq!(settings.fade_delay, Duration::from_secs(3));
    assert!(settings.show_shadow);
}

#[test]
fn valid_integers_are_accepted() {
    let settings = Settings::resolve(&source(&[("movie_interval", "25"), ("poster_delay", "7")]));
    assert_eq!(settings.interval, Duration::from_secs(25));
    assert_eq!(settings.fade_delay, Duration::from_secs(7));
}

#[test]
fn malformed_integers_fall_back_to_defaults() {
    for bad in ["", "abc", "12.5", "-5"] {
        let settings = Settings::resolve(&source(&[("movie_interval", bad)]));
        assert_eq!(
            settings.interval,
            Duration::from_secs(10),
            "value {bad:?} should resolve to the default"
        );
    }
}

#[test]
fn zero_parses_to_default() {
    // A cleared host field comes back as "0"; that means "use the default".
    let settings = Settings::resolve(&source(&[("movie_interval", "0"), ("poster_delay", "0")]));
    assert_eq!(settings.interval, Duration::from_secs(10));
    assert_eq!(settings.fade_delay, Duration::from_secs(3));
}

#[test]
fn booleans_match_case_insensitively() {
    let settings = Settings::resolve(&source(&[("show_title", "FALSE"), ("show_year", "True")]));
    assert!(!settings.show_title);
    assert!(settings.show_year);
}

#[test]
fn unrecognized_booleans_fall_back_to_defaults() {
    let settings = Settings::resolve(&source(&[("show_title", "yes"), ("show_shadow", "1")]));
    assert!(settings.show_title);
    assert!(settings.show_shadow);
}

#[test]
fn font_accepts_symbolic_names() {
    for (raw, expected) in [
        ("small", FontSize::Small),
        ("medium", FontSize::Medium),
        ("large", FontSize::Large),
    ] {
        let settings = Settings::resolve(&source(&[("font_size", raw)]));
        assert_eq!(settings.font_size, expected);
    }
}

#[test]
fn font_accepts_numeric_index() {
    for (raw, expected) in [
        ("0", FontSize::Small),
        ("1", FontSize::Medium),
        ("2", FontSize::Large),
    ] {
        let settings = Settings::resolve(&source(&[("font_size", raw)]));
        assert_eq!(settings.font_size, expected);
    }
}

#[test]
fn invalid_font_values_fall_back_to_default() {
    for bad in ["3", "99", "-1", "huge", ""] {
        let settings = Settings::resolve(&source(&[("font_size", bad)]));
        assert_eq!(
            settings.font_size,
            FontSize::Medium,
            "value {bad:?} should resolve to the default font"
        );
    }
}
