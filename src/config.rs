//! Runtime configuration from environment variables.
//!
//! - `TETRIS_SEED`: RNG seed (default: derived from the system clock)
//! - `TETRIS_BASE_INTERVAL_MS`: gravity interval at level 0 (default: 1000)
//! - `TETRIS_GRAVITY_DECAY`: per-level interval factor in (0, 1] (default: 0.66)
//! - `TETRIS_LOG_PATH`: append session records as JSON lines (default: off)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::types::{BASE_GRAVITY_MS, GRAVITY_DECAY};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u32,
    pub base_interval_ms: u64,
    pub gravity_decay: f64,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            base_interval_ms: BASE_GRAVITY_MS,
            gravity_decay: GRAVITY_DECAY,
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(v) = get("TETRIS_SEED") {
            config.seed = v
                .parse()
                .map_err(|_| anyhow!("TETRIS_SEED: invalid seed: {}", v))?;
        }

        if let Some(v) = get("TETRIS_BASE_INTERVAL_MS") {
            let ms: u64 = v
                .parse()
                .map_err(|_| anyhow!("TETRIS_BASE_INTERVAL_MS: invalid value: {}", v))?;
            if ms == 0 {
                bail!("TETRIS_BASE_INTERVAL_MS: must be greater than 0");
            }
            config.base_interval_ms = ms;
        }

        if let Some(v) = get("TETRIS_GRAVITY_DECAY") {
            let decay: f64 = v
                .parse()
                .map_err(|_| anyhow!("TETRIS_GRAVITY_DECAY: invalid value: {}", v))?;
            if !(decay > 0.0 && decay <= 1.0) {
                bail!("TETRIS_GRAVITY_DECAY: must be in (0, 1], got {}", decay);
            }
            config.gravity_decay = decay;
        }

        config.log_path = get("TETRIS_LOG_PATH").map(PathBuf::from);

        Ok(config)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_interval_ms, 1000);
        assert_eq!(config.gravity_decay, 0.66);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_lookup(lookup(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_BASE_INTERVAL_MS", "500"),
            ("TETRIS_GRAVITY_DECAY", "0.5"),
            ("TETRIS_LOG_PATH", " /tmp/session.jsonl "),
        ]))
        .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.base_interval_ms, 500);
        assert_eq!(config.gravity_decay, 0.5);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/session.jsonl")));
    }

    #[test]
    fn blank_log_path_disables_logging() {
        let config = Config::from_lookup(lookup(&[("TETRIS_LOG_PATH", "   ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("TETRIS_SEED", "-1")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TETRIS_BASE_INTERVAL_MS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TETRIS_GRAVITY_DECAY", "1.5")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TETRIS_GRAVITY_DECAY", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TETRIS_GRAVITY_DECAY", "NaN")])).is_err());
    }
}
