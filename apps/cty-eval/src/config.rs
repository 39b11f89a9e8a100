use std::path::PathBuf;

use anyhow::Result;

/// Runtime configuration loaded from environment variables.
/// Everything has a default; CLI flags override these.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory evaluations are written to. Defaults to the working directory.
    pub out_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            out_dir: optional_env("CTY_EVAL_OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_is_none() {
        assert_eq!(optional_env("CTY_EVAL_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
