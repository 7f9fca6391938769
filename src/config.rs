//! Runtime configuration and command-line parsing.
use crate::error::{ReviewError, Result};
use crate::store::DEFAULT_FILE_NAME;
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the review file location
pub const FILE_ENV_VAR: &str = "GAME_REVIEWS_FILE";

/// Settings for one interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    /// Seed the sample reviews when the loaded store is empty
    pub demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_FILE_NAME),
            demo: false,
        }
    }
}

/// What the user asked the binary to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(AppConfig),
    Help,
    Version,
    Unknown(String),
}

impl Invocation {
    /// Parse process arguments (without the program name), reading the
    /// environment for defaults.
    pub fn from_env(args: &[String]) -> Result<Self> {
        Self::parse(args, env::var(FILE_ENV_VAR).ok())
    }

    /// Parse arguments on top of an optional `GAME_REVIEWS_FILE` value.
    ///
    /// `--file` beats the environment, which beats `reviews.json`.
    pub fn parse(args: &[String], env_file: Option<String>) -> Result<Self> {
        let mut config = AppConfig::default();

        if let Some(path) = env_file.filter(|p| !p.trim().is_empty()) {
            config.store_path = PathBuf::from(path);
        }

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "help" | "-h" | "--help" => return Ok(Invocation::Help),
                "version" | "-v" | "--version" => return Ok(Invocation::Version),
                "--demo" => config.demo = true,
                "--file" | "-f" => {
                    i += 1;
                    let path = args
                        .get(i)
                        .filter(|p| !p.starts_with('-'))
                        .ok_or_else(|| {
                            ReviewError::Config("--file needs a path".to_string())
                        })?;
                    config.store_path = PathBuf::from(path);
                }
                other => return Ok(Invocation::Unknown(other.to_string())),
            }
            i += 1;
        }

        Ok(Invocation::Run(config))
    }
}
