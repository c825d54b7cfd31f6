use std::env;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

const BUCKET_NAME: &str = "BUCKET_NAME";
const SCRATCH_DIR: &str = "SCRATCH_DIR";
const DEFAULT_SCRATCH_DIR: &str = "/tmp";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bucket_name: String,
    pub scratch_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::load(|name| env::var(name).ok())
    }

    pub fn load<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let bucket_name = value(BUCKET_NAME).with_context(|| format!("can not find env, name={BUCKET_NAME}"))?;
        let scratch_dir = value(SCRATCH_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRATCH_DIR));

        Ok(Config {
            bucket_name,
            scratch_dir,
        })
    }
}
