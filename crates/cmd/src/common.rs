// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sitegen::SiteConfig;

/// Environment variable naming the default site config file.
pub const CONFIG_ENV: &str = "MARKETSITE_CONFIG";

/// Shared state for every command: where the site config comes from.
#[derive(Debug, Clone, Default)]
pub struct SiteContext {
    config_path: Option<PathBuf>,
}

impl SiteContext {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// The explicit `--config` path, falling back to MARKETSITE_CONFIG.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load the site config, or the built-in default when none is named.
    pub fn load_config(&self) -> Result<SiteConfig> {
        match self.config_path() {
            Some(path) => SiteConfig::load(&path)
                .with_context(|| format!("Failed to load site config: {}", path.display())),
            None => {
                diagnostics::debug!("no site config given, using defaults");
                Ok(SiteConfig::default())
            }
        }
    }
}
