//! Runtime settings read from the environment (and `.env` via dotenv).

use crate::output::OutputFormat;
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_PROMPT: &str = "ip-calc> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// log4rs YAML configuration file.
    pub log_config: PathBuf,
    pub format: OutputFormat,
    pub color: bool,
    pub prompt: String,
    /// Interactive history file; no history is persisted when unset.
    pub history_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            format: OutputFormat::Text,
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
            history_file: None,
        }
    }
}

impl Settings {
    /// Read `IP_CALC_*` variables from the process environment.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, falling back to defaults per key.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let format = match lookup("IP_CALC_FORMAT") {
            Some(value) => match OutputFormat::from_str(value.trim(), true) {
                Ok(format) => format,
                Err(_) => {
                    log::warn!("Unknown IP_CALC_FORMAT={value}, using text");
                    defaults.format
                }
            },
            None => defaults.format,
        };
        Settings {
            log_config: lookup("IP_CALC_LOG_CONFIG")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_config),
            format,
            color: lookup("IP_CALC_COLOR")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.color),
            prompt: lookup("IP_CALC_PROMPT").unwrap_or(defaults.prompt),
            history_file: lookup("IP_CALC_HISTORY")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_config, PathBuf::from("log4rs.yml"));
        assert!(settings.color);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("IP_CALC_FORMAT", "JSON"),
            ("IP_CALC_COLOR", "off"),
            ("IP_CALC_PROMPT", "> "),
            ("IP_CALC_HISTORY", "/tmp/ip_calc_history"),
            ("IP_CALC_LOG_CONFIG", "conf/log.yml"),
        ]));
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.color);
        assert_eq!(settings.prompt, "> ");
        assert_eq!(
            settings.history_file,
            Some(PathBuf::from("/tmp/ip_calc_history"))
        );
        assert_eq!(settings.log_config, PathBuf::from("conf/log.yml"));
    }

    #[test]
    fn test_unknown_format_falls_back() {
        let settings = Settings::from_lookup(lookup_from(&[("IP_CALC_FORMAT", "xml")]));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("False"));
    }
}
