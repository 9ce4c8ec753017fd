// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Path routing and page expansion.
//!
//! `resolve_path` maps one URL path to a [`Page`]. `expand_pages` enumerates
//! every page the site contains and flattens them into `PageJob`s, one per
//! output HTML file.

use crate::config::SiteConfig;
use crate::dispatch::{self, Route};
use crate::error::{Error, Result};
use catalog::{City, Industry, Solution};

/// Every kind of page the site renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Home,
    LocationIndex,
    City(&'static City),
    /// `/locations/{city}/{slug}`, decided by the dispatcher
    Combination(Route),
    IndustryIndex,
    Industry(&'static Industry),
    SolutionIndex,
    Solution(&'static Solution),
    NotFound,
}

impl Page {
    /// Site-absolute URL path, without the base URL.
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::LocationIndex => "/locations".to_string(),
            Page::City(city) => format!("/locations/{}", city.slug),
            Page::Combination(route) => route.path(),
            Page::IndustryIndex => "/industries".to_string(),
            Page::Industry(industry) => format!("/industries/{}", industry.slug),
            Page::SolutionIndex => "/solutions".to_string(),
            Page::Solution(solution) => format!("/solutions/{}", solution.slug),
            Page::NotFound => "/404".to_string(),
        }
    }

    /// Output file relative to the output directory.
    pub fn output_path(&self) -> String {
        match self {
            Page::Home => "index.html".to_string(),
            Page::NotFound => "404.html".to_string(),
            _ => format!("{}/index.html", self.path().trim_start_matches('/')),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Page::Home => "AI Agents for Every Business".to_string(),
            Page::LocationIndex => "Locations".to_string(),
            Page::City(city) => format!("AI Agents in {}", city.display_name()),
            Page::Combination(route) => {
                format!("{} in {}", route.subject(), route.city().display_name())
            }
            Page::IndustryIndex => "Industries".to_string(),
            Page::Industry(industry) => format!("AI Agents for {}", industry.name),
            Page::SolutionIndex => "Solutions".to_string(),
            Page::Solution(solution) => solution.name.to_string(),
            Page::NotFound => "Page Not Found".to_string(),
        }
    }

    /// Breadcrumb trail as (label, site-absolute path).
    pub fn trail(&self) -> Vec<(String, String)> {
        let mut trail = vec![("Home".to_string(), "/".to_string())];
        let locations = ("Locations".to_string(), "/locations".to_string());
        match self {
            Page::Home => {}
            Page::LocationIndex | Page::IndustryIndex | Page::SolutionIndex | Page::NotFound => {
                trail.push((self.title(), self.path()));
            }
            Page::City(city) => {
                trail.push(locations);
                trail.push((city.name.to_string(), self.path()));
            }
            Page::Combination(route) => {
                let city = route.city();
                trail.push(locations);
                trail.push((city.name.to_string(), Page::City(city).path()));
                trail.push((route.subject().to_string(), self.path()));
            }
            Page::Industry(industry) => {
                trail.push(("Industries".to_string(), "/industries".to_string()));
                trail.push((industry.name.to_string(), self.path()));
            }
            Page::Solution(solution) => {
                trail.push(("Solutions".to_string(), "/solutions".to_string()));
                trail.push((solution.name.to_string(), self.path()));
            }
        }
        trail
    }
}

/// Resolve a URL path to a page.
///
/// Leading and trailing slashes, a trailing `index.html` and a `.html`
/// suffix are tolerated. The base URL must already be stripped.
pub fn resolve_path(path: &str) -> Result<Page> {
    let normalized = normalize(path);
    let segments: Vec<&str> = if normalized.is_empty() {
        vec![]
    } else {
        normalized.split('/').collect()
    };

    if segments.iter().any(|s| s.is_empty()) {
        return Err(Error::not_found(path));
    }

    let page = match segments.as_slice() {
        [] => Page::Home,
        ["locations"] => Page::LocationIndex,
        ["locations", city] => {
            Page::City(catalog::city(city).ok_or_else(|| Error::not_found(path))?)
        }
        ["locations", city, slug] => Page::Combination(dispatch::dispatch(city, slug)?),
        ["industries"] => Page::IndustryIndex,
        ["industries", industry] => {
            Page::Industry(catalog::industry(industry).ok_or_else(|| Error::not_found(path))?)
        }
        ["solutions"] => Page::SolutionIndex,
        ["solutions", solution] => {
            Page::Solution(catalog::solution(solution).ok_or_else(|| Error::not_found(path))?)
        }
        _ => return Err(Error::not_found(path)),
    };

    diagnostics::debug!("resolved {path} to {page}", path, page: page.path());
    Ok(page)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim().trim_matches('/');
    // `index.html` only counts as a whole final segment
    let trimmed = if trimmed == "index.html" {
        ""
    } else {
        trimmed.strip_suffix("/index.html").unwrap_or(trimmed)
    };
    trimmed.strip_suffix(".html").unwrap_or(trimmed)
}

/// One page to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct PageJob {
    pub page: Page,
    /// Output path relative to the output directory (e.g. "locations/chicago/index.html")
    pub output_path: String,
    /// Public URL including the base URL
    pub url: String,
    pub title: String,
    /// Breadcrumb trail: (label, url including the base URL)
    pub breadcrumbs: Vec<(String, String)>,
}

impl PageJob {
    pub fn new(page: Page, config: &SiteConfig) -> Self {
        let breadcrumbs = page
            .trail()
            .into_iter()
            .map(|(label, path)| (label, config.href(&path)))
            .collect();
        Self {
            output_path: page.output_path(),
            url: config.href(&page.path()),
            title: page.title(),
            breadcrumbs,
            page,
        }
    }
}

/// Enumerate every page of the site.
///
/// Order: home, the indexes, solutions, industries, then each city followed
/// by its solution and industry combinations, and finally the 404 page.
pub fn expand_pages(config: &SiteConfig) -> Vec<PageJob> {
    let mut pages = vec![
        Page::Home,
        Page::SolutionIndex,
        Page::IndustryIndex,
        Page::LocationIndex,
    ];

    pages.extend(catalog::all_solutions().iter().map(Page::Solution));
    pages.extend(catalog::all_industries().iter().map(Page::Industry));

    for city in catalog::all_cities() {
        pages.push(Page::City(city));
        let slugs = catalog::SOLUTION_SLUGS
            .iter()
            .copied()
            .chain(catalog::industry_slugs());
        for slug in slugs {
            match dispatch::dispatch(city.slug, slug) {
                Ok(route) => pages.push(Page::Combination(route)),
                Err(e) => diagnostics::warn!("skipping {slug} for {city}: {reason}", slug, city: city.slug, reason: e.to_string()),
            }
        }
    }

    pages.push(Page::NotFound);

    pages
        .into_iter()
        .map(|page| PageJob::new(page, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Template;
    use std::collections::BTreeSet;

    #[test]
    fn test_resolve_home_and_indexes() {
        assert_eq!(resolve_path("/").expect("home"), Page::Home);
        assert_eq!(resolve_path("").expect("home"), Page::Home);
        assert_eq!(resolve_path("/index.html").expect("home"), Page::Home);
        assert_eq!(resolve_path("/locations/").expect("index"), Page::LocationIndex);
        assert_eq!(resolve_path("/industries").expect("index"), Page::IndustryIndex);
        assert_eq!(resolve_path("/solutions").expect("index"), Page::SolutionIndex);
    }

    #[test]
    fn test_resolve_city() {
        match resolve_path("/locations/chicago").expect("city") {
            Page::City(city) => assert_eq!(city.name, "Chicago"),
            other => panic!("expected city page, got {other:?}"),
        }
        assert!(resolve_path("/locations/nowhere").unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve_combination_forms() {
        for path in [
            "/locations/chicago/automotive",
            "/locations/chicago/automotive/",
            "locations/chicago/automotive",
            "/locations/chicago/automotive/index.html",
            "/locations/chicago/automotive.html",
        ] {
            match resolve_path(path).expect(path) {
                Page::Combination(route) => assert_eq!(route.template(), Template::Industry),
                other => panic!("{path}: expected combination, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_shapes() {
        for path in [
            "/locations/chicago/bogus-slug",
            "/locations//automotive",
            "/locations/chicago/automotive/extra",
            "/industries/bogus",
            "/solutions/ai-bogus",
            "/pricing",
        ] {
            let err = resolve_path(path).unwrap_err();
            assert!(err.is_not_found(), "{path}: {err}");
        }
    }

    #[test]
    fn test_index_html_must_be_its_own_segment() {
        for path in [
            "/locations/chicagoindex.html",
            "/locations/chicago/automotiveindex.html",
            "/solutions/ai-chatbotsindex.html",
            "/locationsindex.html",
        ] {
            let err = resolve_path(path).unwrap_err();
            assert!(err.is_not_found(), "{path}: {err}");
        }
        match resolve_path("/locations/chicago/index.html").expect("city") {
            Page::City(city) => assert_eq!(city.slug, "chicago"),
            other => panic!("expected city page, got {other:?}"),
        }
        assert!(resolve_path("/locations/chicago/index.html/").is_ok());
    }

    #[test]
    fn test_expand_pages_skips_nothing() {
        // Every city × slug pair dispatches, so no page is dropped with a warning
        let config = SiteConfig::default();
        let combinations = expand_pages(&config)
            .into_iter()
            .filter(|job| matches!(job.page, Page::Combination(_)))
            .count();
        assert_eq!(
            combinations,
            catalog::all_cities().len() * (catalog::SOLUTION_SLUGS.len() + catalog::INDUSTRY_NAMES.len())
        );
    }

    #[test]
    fn test_industry_pages_are_separate_from_dispatch() {
        match resolve_path("/industries/automotive").expect("industry") {
            Page::Industry(industry) => assert_eq!(industry.name, "Automotive & Dealership"),
            other => panic!("expected industry page, got {other:?}"),
        }
        // A solution id is not an industry page
        assert!(resolve_path("/industries/ai-chatbots").is_err());
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(Page::Home.output_path(), "index.html");
        assert_eq!(Page::NotFound.output_path(), "404.html");
        assert_eq!(Page::LocationIndex.output_path(), "locations/index.html");
        let route = dispatch::dispatch("chicago", "ai-chatbots").expect("route");
        assert_eq!(
            Page::Combination(route).output_path(),
            "locations/chicago/ai-chatbots/index.html"
        );
    }

    #[test]
    fn test_expand_pages_counts() {
        let config = SiteConfig::default();
        let jobs = expand_pages(&config);
        let cities = catalog::all_cities().len();
        // home + 3 indexes + 4 solutions + 10 industries + 404, plus 1 + 14 per city
        assert_eq!(jobs.len(), 1 + 3 + 4 + 10 + 1 + cities * 15);
        assert_eq!(jobs[0].output_path, "index.html");
        assert_eq!(jobs.last().map(|j| j.page), Some(Page::NotFound));

        let unique: BTreeSet<_> = jobs.iter().map(|j| j.output_path.as_str()).collect();
        assert_eq!(unique.len(), jobs.len(), "output paths must be unique");
    }

    #[test]
    fn test_expanded_pages_round_trip_through_resolve() {
        let config = SiteConfig::default();
        for job in expand_pages(&config) {
            if job.page == Page::NotFound {
                continue;
            }
            let resolved = resolve_path(&job.page.path()).expect(&job.url);
            assert_eq!(resolved, job.page);
        }
    }

    #[test]
    fn test_breadcrumbs_with_base_url() {
        let mut config = SiteConfig::default();
        config.site.base_url = "/acme/".to_string();
        let route = dispatch::dispatch("chicago", "ai-voice-agents").expect("route");
        let job = PageJob::new(Page::Combination(route), &config);

        assert_eq!(job.url, "/acme/locations/chicago/ai-voice-agents");
        let labels: Vec<_> = job.breadcrumbs.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["Home", "Locations", "Chicago", "AI Voice Agents"]);
        assert_eq!(job.breadcrumbs[0].1, "/acme/");
        assert_eq!(job.breadcrumbs[2].1, "/acme/locations/chicago");
    }

    #[test]
    fn test_titles() {
        let route = dispatch::dispatch("chicago", "automotive").expect("route");
        assert_eq!(
            Page::Combination(route).title(),
            "Automotive & Dealership in Chicago, IL"
        );
    }
}
