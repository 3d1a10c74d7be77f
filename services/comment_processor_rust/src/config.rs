//! Configuration for the comment processor
//!
//! Everything comes from environment variables (a `.env` file is loaded by
//! `main`). Reddit credentials are only required when a thread URL is set.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::reddit::RedditCredentials;

pub const DEFAULT_PREDICTIONS_CSV: &str = "data/predictions.csv";
pub const DEFAULT_NAME_VARIATIONS_JSON: &str = "data/name_variations.json";
pub const DEFAULT_OUTPUT_LOG: &str = "query_log.txt";

/// Record sink format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Four labelled lines plus a separator per record
    Text,
    /// One JSON object per line
    JsonLines,
}

/// Where comments come from
#[derive(Debug, Clone)]
pub enum CommentInput {
    Reddit {
        thread_url: String,
        credentials: RedditCredentials,
    },
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub predictions_csv: PathBuf,
    pub name_variations_json: PathBuf,
    pub input: CommentInput,
    pub output_log: PathBuf,
    pub output_format: OutputFormat,
    pub parallel: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let predictions_csv = get("PREDICTIONS_CSV")
            .unwrap_or_else(|| DEFAULT_PREDICTIONS_CSV.to_string())
            .into();
        let name_variations_json = get("NAME_VARIATIONS_JSON")
            .unwrap_or_else(|| DEFAULT_NAME_VARIATIONS_JSON.to_string())
            .into();

        let input = match get("REDDIT_THREAD_URL") {
            Some(thread_url) => {
                let require = |key: &str| {
                    get(key).with_context(|| format!("{key} must be set when REDDIT_THREAD_URL is set"))
                };
                CommentInput::Reddit {
                    thread_url,
                    credentials: RedditCredentials {
                        client_id: require("REDDIT_CLIENT_ID")?,
                        client_secret: require("REDDIT_CLIENT_SECRET")?,
                        username: require("REDDIT_USERNAME")?,
                        password: require("REDDIT_PASSWORD")?,
                        user_agent: require("REDDIT_USER_AGENT")?,
                    },
                }
            }
            None => CommentInput::File(
                get("COMMENTS_FILE")
                    .context("Either REDDIT_THREAD_URL or COMMENTS_FILE must be set")?
                    .into(),
            ),
        };

        let output_log = get("OUTPUT_LOG")
            .unwrap_or_else(|| DEFAULT_OUTPUT_LOG.to_string())
            .into();
        let output_format = parse_output_format(get("OUTPUT_FORMAT").as_deref())?;
        let parallel = parse_bool(get("PARALLEL").as_deref(), false);

        Ok(Self {
            predictions_csv,
            name_variations_json,
            input,
            output_log,
            output_format,
            parallel,
        })
    }
}

fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    raw.map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "y" | "on"))
        .unwrap_or(default)
}

fn parse_output_format(raw: Option<&str>) -> Result<OutputFormat> {
    match raw.map(str::to_lowercase).as_deref() {
        None | Some("text") => Ok(OutputFormat::Text),
        Some("json") | Some("jsonl") => Ok(OutputFormat::JsonLines),
        Some(other) => Err(anyhow!("Invalid OUTPUT_FORMAT: {other} (expected text|json)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_file_input_with_defaults() {
        let config = Config::from_lookup(lookup(&[("COMMENTS_FILE", "comments.txt")])).unwrap();
        assert_eq!(config.predictions_csv, PathBuf::from(DEFAULT_PREDICTIONS_CSV));
        assert_eq!(config.name_variations_json, PathBuf::from(DEFAULT_NAME_VARIATIONS_JSON));
        assert_eq!(config.output_log, PathBuf::from(DEFAULT_OUTPUT_LOG));
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.parallel);
        assert!(matches!(config.input, CommentInput::File(ref p) if p == &PathBuf::from("comments.txt")));
    }

    #[test]
    fn test_reddit_input_requires_credentials() {
        let err = Config::from_lookup(lookup(&[(
            "REDDIT_THREAD_URL",
            "https://www.reddit.com/r/FantasyPL/comments/abc123/rmt/",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("REDDIT_CLIENT_ID"));

        let config = Config::from_lookup(lookup(&[
            ("REDDIT_THREAD_URL", "https://www.reddit.com/r/FantasyPL/comments/abc123/rmt/"),
            ("REDDIT_CLIENT_ID", "id"),
            ("REDDIT_CLIENT_SECRET", "secret"),
            ("REDDIT_USERNAME", "user"),
            ("REDDIT_PASSWORD", "pass"),
            ("REDDIT_USER_AGENT", "fplbot/0.1"),
            ("OUTPUT_FORMAT", "JSON"),
            ("PARALLEL", "true"),
        ]))
        .unwrap();
        assert!(matches!(config.input, CommentInput::Reddit { .. }));
        assert_eq!(config.output_format, OutputFormat::JsonLines);
        assert!(config.parallel);
    }

    #[test]
    fn test_missing_input_is_error() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn test_invalid_output_format() {
        let err = Config::from_lookup(lookup(&[
            ("COMMENTS_FILE", "c.txt"),
            ("OUTPUT_FORMAT", "xml"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("OUTPUT_FORMAT"));
    }
}
