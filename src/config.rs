//! Runtime configuration for the `graph-works` binary.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! the binary). The core algorithms never read configuration.

use std::path::PathBuf;

/// Weight matrix read in spanning tree mode
pub const INPUT_PATH_VAR: &str = "GRAPH_WORKS_INPUT";
/// File truncated and then filled in graph generation mode
pub const OUTPUT_PATH_VAR: &str = "GRAPH_WORKS_OUTPUT";

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "generated_graphs.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to the defaults for
    /// unset or empty values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            input_path: path(INPUT_PATH_VAR, DEFAULT_INPUT_PATH),
            output_path: path(OUTPUT_PATH_VAR, DEFAULT_OUTPUT_PATH),
        }
    }
}
