// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site generation.
//!
//! 1. Checks the catalog invariants
//! 2. Expands every page into page jobs
//! 3. Renders each page: components → body → layout
//! 4. Writes the complete site to the output directory

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::layouts::{self, LayoutContext};
use crate::pages;
use crate::routes::{self, Page, PageJob};
use std::path::{Path, PathBuf};

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub pages: usize,
    pub output_dir: PathBuf,
}

/// Render one page job to a complete HTML document.
pub fn render_job(config: &SiteConfig, job: &PageJob) -> String {
    let body = pages::render_body(config, job).into_string();
    let nav = site_nav(config);
    let home = config.href("/");

    layouts::apply_layout(
        &config.layout,
        &LayoutContext {
            title: &job.title,
            site_title: &config.site.title,
            home_href: &home,
            content: &body,
            nav: &nav,
            accent: pages::accent(&job.page),
        },
    )
}

/// Resolve a URL path and render it.
///
/// Fails with [`Error::NotFound`] when the path names no page.
pub fn render_path(config: &SiteConfig, path: &str) -> Result<String> {
    let page = routes::resolve_path(path)?;
    Ok(render_job(config, &PageJob::new(page, config)))
}

/// Generate the complete static site into `output_dir`.
pub fn generate_site(config: &SiteConfig, output_dir: &Path) -> Result<SiteReport> {
    config.validate()?;
    catalog::validate()?;

    let jobs = routes::expand_pages(config);
    diagnostics::info!("page expansion: {count} pages to generate", count: jobs.len());

    for job in &jobs {
        let html = render_job(config, job);
        write_page(output_dir, &job.output_path, &html)?;
        diagnostics::debug!("wrote {path}", path: job.output_path.as_str());
    }

    diagnostics::info!(
        "site generation complete: {count} pages to {dir}",
        count: jobs.len(),
        dir: output_dir.display().to_string()
    );

    Ok(SiteReport {
        pages: jobs.len(),
        output_dir: output_dir.to_path_buf(),
    })
}

fn write_page(output_dir: &Path, relative: &str, html: &str) -> Result<()> {
    let out_path = output_dir.join(relative);
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(&out_path, html.as_bytes()).map_err(|e| Error::io(&out_path, e))
}

fn site_nav(config: &SiteConfig) -> Vec<(String, String)> {
    [Page::SolutionIndex, Page::IndustryIndex, Page::LocationIndex]
        .iter()
        .map(|page| (page.title(), config.href(&page.path())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path_solution() {
        let html = render_path(&SiteConfig::default(), "/locations/chicago/ai-voice-agents")
            .expect("render");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>AI Voice Agents in Chicago, IL | "), "got: {}", html);
        assert!(html.contains("accent-blue"));
    }

    #[test]
    fn test_render_path_not_found() {
        let err = render_path(&SiteConfig::default(), "/locations/nowhere/automotive").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_site_nav_uses_base_url() {
        let mut config = SiteConfig::default();
        config.site.base_url = "/acme".to_string();
        let nav = site_nav(&config);
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[2], ("Locations".to_string(), "/acme/locations".to_string()));
    }
}
