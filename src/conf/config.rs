// Copyright 2026 Mountutil Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use mountutil::defs;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_DEFAULT: &str = defs::CONFIG_FILE;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
}

fn default_table_path() -> PathBuf {
    PathBuf::from(defs::PROC_MOUNTS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_path: default_table_path(),
            log_file: None,
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).context("failed to read config file")?;

        let config: Config = toml::from_str(&content).context("failed to parse config file")?;

        Ok(config)
    }

    pub fn load_default() -> Result<Self> {
        Self::from_file(CONFIG_FILE_DEFAULT)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }

        fs::write(path.as_ref(), content).context("failed to write config file")?;

        Ok(())
    }

    pub fn merge_with_cli(&mut self, table_path: Option<PathBuf>, verbose: bool) {
        if let Some(path) = table_path {
            self.table_path = path;
        }

        if verbose {
            self.verbose = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.table_path, Path::new("/proc/mounts"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("log_file = \"/var/log/mountutil.log\"").unwrap();
        assert_eq!(
            config.log_file.as_deref(),
            Some(Path::new("/var/log/mountutil.log"))
        );
        assert!(!config.verbose);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let config = Config {
            table_path: PathBuf::from("/etc/fstab"),
            log_file: None,
            verbose: true,
        };

        config.save_to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn cli_overrides_file() {
        let mut config = Config::default();
        config.merge_with_cli(Some(PathBuf::from("/etc/fstab")), true);
        assert_eq!(config.table_path, Path::new("/etc/fstab"));
        assert!(config.verbose);

        config.merge_with_cli(None, false);
        assert!(config.verbose);
    }
}
