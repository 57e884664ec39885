//! Runtime configuration.
//!
//! Credentials and report options are resolved once at startup from CLI
//! flags and environment variables (clap handles the env fallback) and
//! carried in an explicit `Config` value passed into the fetch and report
//! layers. Nothing lives in process-wide state.

use crate::cli::Cli;
use crate::report::due::DueDateFormat;
use crate::{Error, Result};

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "CLICKUP_API_KEY";

/// Environment variable consulted for the space ID.
pub const SPACE_ID_ENV: &str = "CLICKUP_SPACE_ID";

/// Resolved configuration for one report run.
#[derive(Debug, Clone)]
pub struct Config {
    /// ClickUp API key.
    pub api_key: String,

    /// Space to report on.
    pub space_id: String,

    /// Wire format for task due dates.
    pub due_date_format: DueDateFormat,

    /// Whether to compute the weekly completion summary.
    pub weekly_summary: bool,
}

impl Config {
    /// Build a config from parsed CLI arguments.
    ///
    /// Missing credentials are a fatal configuration error; nothing is
    /// fetched before this check passes.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_key = cli
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "ClickUp API key is required. Provide it via --api-key or the {API_KEY_ENV} environment variable"
                ))
            })?;

        let space_id = cli
            .space_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "ClickUp space ID is required. Provide it via --space-id or the {SPACE_ID_ENV} environment variable"
                ))
            })?;

        Ok(Self {
            api_key,
            space_id,
            due_date_format: cli.due_date_format,
            weekly_summary: !cli.no_weekly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_cli(&cli(&["spy", "-k", "key", "-s", "space"])).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.space_id, "space");
        assert_eq!(config.due_date_format, DueDateFormat::EpochMillis);
        assert!(config.weekly_summary);
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let mut parsed = cli(&["spy", "-s", "space"]);
        // The env fallback may have filled the key on a developer machine.
        parsed.api_key = None;

        let err = Config::from_cli(&parsed).unwrap_err();
        assert!(err.to_string().contains("API key"));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_missing_space_id_is_fatal() {
        let mut parsed = cli(&["spy", "-k", "key"]);
        parsed.space_id = None;

        let err = Config::from_cli(&parsed).unwrap_err();
        assert!(err.to_string().contains("space ID"));
        assert!(err.to_string().contains(SPACE_ID_ENV));
    }

    #[test]
    fn test_empty_credential_treated_as_missing() {
        let mut parsed = cli(&["spy", "-k", "", "-s", "space"]);
        parsed.api_key = Some(String::new());
        assert!(Config::from_cli(&parsed).is_err());
    }

    #[test]
    fn test_no_weekly_flag_disables_summary() {
        let config =
            Config::from_cli(&cli(&["spy", "-k", "key", "-s", "space", "--no-weekly"])).unwrap();
        assert!(!config.weekly_summary);
    }
}
