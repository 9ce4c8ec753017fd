// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration, parsed from `site.yaml`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "Acme AI"
///   base_url: "/"
///
/// cta:
///   label: "Book a demo"
///   href: "/contact"
///   phone: "(555) 010-0000"
///
/// layout: landing
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub cta: CallToAction,
    /// Layout used for every page; unknown names fall back to `default`
    #[serde(default = "default_layout")]
    pub layout: String,
}

/// Site-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// The call-to-action block closing every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    #[serde(default = "default_cta_label")]
    pub label: String,
    #[serde(default = "default_cta_href")]
    pub href: String,
    #[serde(default)]
    pub phone: Option<String>,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_layout() -> String {
    "default".to_string()
}

fn default_cta_label() -> String {
    "Book a demo".to_string()
}

fn default_cta_href() -> String {
    "/contact".to_string()
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            label: default_cta_label(),
            href: default_cta_href(),
            phone: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta {
                title: "AI Agents for Local Business".to_string(),
                base_url: default_base_url(),
            },
            cta: CallToAction::default(),
            layout: default_layout(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: SiteConfig = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_yaml(&yaml)?;
        diagnostics::debug!("loaded site config from {path}", path: path.display().to_string());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(Error::config("site.title cannot be empty"));
        }
        if !self.site.base_url.starts_with('/') {
            return Err(Error::config(format!(
                "site.base_url must start with '/': {:?}",
                self.site.base_url
            )));
        }
        if self.cta.label.trim().is_empty() {
            return Err(Error::config("cta.label cannot be empty"));
        }
        Ok(())
    }

    /// Base URL without its trailing `/` (empty string means root).
    pub fn base(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// The call to action with its link resolved against the base URL.
    pub fn cta_link(&self) -> CallToAction {
        CallToAction {
            href: self.href(&self.cta.href),
            ..self.cta.clone()
        }
    }

    /// Prepend the base URL to a site-absolute path.
    pub fn href(&self, path: &str) -> String {
        let base = self.base();
        if base.is_empty() || !path.starts_with('/') {
            path.to_string()
        } else {
            format!("{}{}", base, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let yaml = r#"
site:
  title: "Test Site"
"#;
        let config = SiteConfig::from_yaml(yaml).expect("parse config");
        assert_eq!(config.site.title, "Test Site");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.layout, "default");
        assert_eq!(config.cta, CallToAction::default());
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
site:
  title: "Acme AI"
  base_url: "/acme/"
cta:
  label: "Talk to us"
  href: "/talk"
  phone: "(555) 010-0000"
layout: landing
"#;
        let config = SiteConfig::from_yaml(yaml).expect("parse config");
        assert_eq!(config.base(), "/acme");
        assert_eq!(config.cta.label, "Talk to us");
        assert_eq!(config.cta.phone.as_deref(), Some("(555) 010-0000"));
        assert_eq!(config.layout, "landing");
    }

    #[test]
    fn reject_empty_title() {
        let err = SiteConfig::from_yaml("site:\n  title: \"  \"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err}");
    }

    #[test]
    fn reject_relative_base_url() {
        let err = SiteConfig::from_yaml("site:\n  title: T\n  base_url: acme\n").unwrap_err();
        assert!(err.to_string().contains("base_url"), "got {err}");
    }

    #[test]
    fn reject_malformed_yaml() {
        let err = SiteConfig::from_yaml("site: [").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn href_prefixes_base() {
        let mut config = SiteConfig::default();
        assert_eq!(config.href("/locations"), "/locations");
        config.site.base_url = "/acme/".to_string();
        assert_eq!(config.href("/locations"), "/acme/locations");
        assert_eq!(config.href("/"), "/acme/");
        assert_eq!(config.href("https://example.com"), "https://example.com");
    }

    #[test]
    fn cta_link_follows_base() {
        let mut config = SiteConfig::default();
        assert_eq!(config.cta_link().href, "/contact");
        config.site.base_url = "/acme/".to_string();
        assert_eq!(config.cta_link().href, "/acme/contact");
        assert_eq!(config.cta_link().label, config.cta.label);

        config.cta.href = "https://calendly.com/acme".to_string();
        assert_eq!(config.cta_link().href, "https://calendly.com/acme");
    }
}
