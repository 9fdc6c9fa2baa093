use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::board::BoardLayout;

/// Board generator configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub access_token: String,
    pub team_id: Option<String>,
    pub layout: BoardLayout,
    pub throttle: Duration,
    pub rust_log: String,
}

impl BoardConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = BoardLayout::default();
        Ok(BoardConfig {
            access_token: require(&lookup, "MIRO_ACCESS_TOKEN")?,
            team_id: lookup("MIRO_TEAM_ID").filter(|id| !id.trim().is_empty()),
            layout: BoardLayout {
                participant_slots: parse_or(&lookup, "MIRO_PARTICIPANT_SLOTS", defaults.participant_slots)?,
                team_count: parse_or(&lookup, "MIRO_TEAM_COUNT", defaults.team_count)?,
            },
            throttle: Duration::from_millis(parse_or(&lookup, "MIRO_THROTTLE_MS", 150u64)?),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Output locations for the local document generators.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl OutputConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        OutputConfig {
            output_dir: lookup("WORKSHOP_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn handout_path(&self) -> PathBuf {
        self.output_dir.join("participant").join("learner-handout.pdf")
    }

    pub fn slides_pdf_path(&self) -> PathBuf {
        self.output_dir.join("slides").join("workshop-slides.pdf")
    }

    pub fn slides_pptx_path(&self) -> PathBuf {
        self.output_dir.join("slides").join("workshop-slides.pptx")
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_board_config_defaults() {
        let config = BoardConfig::from_lookup(vars(&[("MIRO_ACCESS_TOKEN", "tok")])).unwrap();
        assert_eq!(config.access_token, "tok");
        assert_eq!(config.team_id, None);
        assert_eq!(config.layout.participant_slots, 16);
        assert_eq!(config.layout.team_count, 4);
        assert_eq!(config.throttle, Duration::from_millis(150));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_token_names_the_variable() {
        let err = BoardConfig::from_lookup(vars(&[])).unwrap_err();
        assert!(err.to_string().contains("MIRO_ACCESS_TOKEN"));

        let err = BoardConfig::from_lookup(vars(&[("MIRO_ACCESS_TOKEN", "  ")])).unwrap_err();
        assert!(err.to_string().contains("MIRO_ACCESS_TOKEN"));
    }

    #[test]
    fn test_overrides_and_invalid_numbers() {
        let config = BoardConfig::from_lookup(vars(&[
            ("MIRO_ACCESS_TOKEN", "tok"),
            ("MIRO_TEAM_ID", "3458764"),
            ("MIRO_PARTICIPANT_SLOTS", "24"),
            ("MIRO_THROTTLE_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.team_id.as_deref(), Some("3458764"));
        assert_eq!(config.layout.participant_slots, 24);
        assert!(config.throttle.is_zero());

        let err = BoardConfig::from_lookup(vars(&[
            ("MIRO_ACCESS_TOKEN", "tok"),
            ("MIRO_TEAM_COUNT", "four"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("MIRO_TEAM_COUNT"));
    }

    #[test]
    fn test_output_paths() {
        let config = OutputConfig::from_lookup(vars(&[("WORKSHOP_OUTPUT_DIR", "/tmp/ws")]));
        assert_eq!(config.handout_path(), PathBuf::from("/tmp/ws/participant/learner-handout.pdf"));
        assert_eq!(config.slides_pdf_path(), PathBuf::from("/tmp/ws/slides/workshop-slides.pdf"));
        assert_eq!(config.slides_pptx_path(), PathBuf::from("/tmp/ws/slides/workshop-slides.pptx"));

        let default = OutputConfig::from_lookup(vars(&[]));
        assert_eq!(default.output_dir, PathBuf::from("."));
    }
}
