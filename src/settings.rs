use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tracing::warn;

/// Raw key-value configuration as handed over by the host. Values arrive as
/// unvalidated strings; all parsing and defaulting happens in [`Settings::resolve`].
pub trait SettingsSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl SettingsSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    /// Ordered set backing the numeric-index form of the raw setting.
    pub const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated screensaver settings, resolved once at startup and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Total time each movie stays on screen.
    pub interval: Duration,
    pub show_title: bool,
    pub font_size: FontSize,
    pub show_year: bool,
    /// Time into a cycle before the poster becomes visible. Not clamped to
    /// `interval`; a longer delay simply keeps the poster hidden all cycle.
    pub fade_delay: Duration,
    pub show_shadow: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(Self::DEFAULT_INTERVAL_SECS),
            show_title: true,
            font_size: FontSize::Medium,
            show_year: true,
            fade_delay: Duration::from_secs(Self::DEFAULT_FADE_DELAY_SECS),
            show_shadow: true,
        }
    }
}

impl Settings {
    const DEFAULT_INTERVAL_SECS: u64 = 10;
    const DEFAULT_FADE_DELAY_SECS: u64 = 3;

    /// Derives settings from raw host values. Total: every malformed value
    /// falls back to its documented default and nothing here can fail.
    pub fn resolve(source: &dyn SettingsSource) -> Self {
        Self {
            interval: Duration::from_secs(int_setting(
                source,
                "movie_interval",
                Self::DEFAULT_INTERVAL_SECS,
            )),
            show_title: bool_setting(source, "show_title", true),
            font_size: font_setting(source, "font_size", FontSize::Medium),
            show_year: bool_setting(source, "show_year", true),
            fade_delay: Duration::from_secs(int_setting(
                source,
                "poster_delay",
                Self::DEFAULT_FADE_DELAY_SECS,
            )),
            show_shadow: bool_setting(source, "show_shadow", true),
        }
    }
}

// Zero is treated the same as unparseable input: the host hands a cleared
// field back as "0", which means "use the default".
fn int_setting(source: &dyn SettingsSource, key: &str, default: u64) -> u64 {
    match source.get(key).and_then(|raw| raw.trim().parse::<u64>().ok()) {
        Some(0) | None => default,
        Some(value) => value,
    }
}

fn bool_setting(source: &dyn SettingsSource, key: &str, default: bool) -> bool {
    match source.get(key).map(|raw| raw.trim().to_ascii_lowercase()) {
        Some(raw) if raw == "true" => true,
        Some(raw) if raw == "false" => false,
        _ => default,
    }
}

// Accepts either a symbolic name or a numeric index into `FontSize::ALL`.
fn font_setting(source: &dyn SettingsSource, key: &str, default: FontSize) -> FontSize {
    let Some(raw) = source.get(key) else {
        return default;
    };
    let raw = raw.trim();
    for font in FontSize::ALL {
        if raw == font.as_str() {
            return *font;
        }
    }
    if let Ok(index) = raw.parse::<usize>() {
        if let Some(font) = FontSize::ALL.get(index) {
            return *font;
        }
    }
    warn!(key, value = raw, default = %default, "unrecognized font size setting; using default");
    default
}
