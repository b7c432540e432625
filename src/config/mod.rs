mod schema;

pub use schema::{ColorChoice, Config, SizeDefaults};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/medal-tally/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("medal-tally")
}

/// Get the default config file path (~/.config/medal-tally/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// The config file is optional: a missing file yields the defaults. A file
/// that exists but cannot be read or parsed is an error, so typos never
/// silently fall back to defaults.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Some(PathBuf::from("/nonexistent/medal-tally.yaml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(config.defaults.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "defaults:\n  countries: 7\n  men_events: 3\n  women_events: 2\ncolor: never\n";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.countries, 7);
        assert_eq!(defaults.men_events, 3);
        assert_eq!(defaults.women_events, 2);
        assert_eq!(config.color, ColorChoice::Never);
        assert!(!config.color.enabled());
    }

    #[test]
    fn test_partial_defaults_fill_with_zero() {
        let yaml = "defaults:\n  countries: 5\n";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.countries, 5);
        assert_eq!(defaults.men_events, 0);
        assert_eq!(defaults.women_events, 0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let yaml = "colour: always\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
