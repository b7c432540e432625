use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Everything is optional; the app is fully usable without a config file.
///
/// Example YAML:
/// ```yaml
/// defaults:
///   countries: 7
///   men_events: 3
///   women_events: 2
/// color: auto
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Pre-filled values for the initialize form
    #[serde(default)]
    pub defaults: Option<SizeDefaults>,

    /// Color output: auto (TTY detection), always, or never
    #[serde(default)]
    pub color: ColorChoice,
}

/// Default competition sizes offered by the TUI's init form.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SizeDefaults {
    pub countries: u32,
    #[serde(default)]
    pub men_events: u32,
    #[serde(default)]
    pub women_events: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => crate::output::should_use_colors(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
