// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Catalog: static content tables for the marketing site
//!
//! Cities, solutions and industry descriptors, plus the two fixed slug sets
//! that decide what a `/locations/{city}/{slug}` page is.

mod cities;
mod error;
mod industries;
mod model;
mod solutions;

use std::collections::BTreeSet;

pub use error::{Error, Result};
pub use model::{Challenge, City, Faq, Feature, Industry, Solution, Stat};

/// The fixed solution ids.
pub const SOLUTION_SLUGS: [&str; 4] = [
    "ai-voice-agents",
    "ai-chatbots",
    "ai-video-agents",
    "ai-automation",
];

/// The fixed industry ids and their display names.
pub const INDUSTRY_NAMES: [(&str, &str); 10] = [
    ("automotive", "Automotive & Dealership"),
    ("healthcare", "Healthcare & Medical"),
    ("real-estate", "Real Estate"),
    ("legal", "Legal Services"),
    ("restaurants", "Restaurants & Food Service"),
    ("home-services", "Home Services"),
    ("insurance", "Insurance"),
    ("financial-services", "Financial Services"),
    ("retail", "Retail & E-commerce"),
    ("hospitality", "Hospitality & Hotels"),
];

pub fn is_solution_slug(slug: &str) -> bool {
    SOLUTION_SLUGS.contains(&slug)
}

pub fn is_industry_slug(slug: &str) -> bool {
    INDUSTRY_NAMES.iter().any(|(id, _)| *id == slug)
}

/// Display name for an industry id, from the fixed mapping.
pub fn industry_name(slug: &str) -> Option<&'static str> {
    INDUSTRY_NAMES
        .iter()
        .find(|(id, _)| *id == slug)
        .map(|(_, name)| *name)
}

/// Industry ids in their canonical order.
pub fn industry_slugs() -> impl Iterator<Item = &'static str> {
    INDUSTRY_NAMES.iter().map(|(id, _)| *id)
}

pub fn all_cities() -> &'static [City] {
    cities::CITIES
}

pub fn all_solutions() -> &'static [Solution] {
    solutions::SOLUTIONS
}

pub fn all_industries() -> &'static [Industry] {
    industries::INDUSTRIES
}

pub fn city(slug: &str) -> Option<&'static City> {
    cities::CITIES.iter().find(|c| c.slug == slug)
}

pub fn solution(slug: &str) -> Option<&'static Solution> {
    solutions::SOLUTIONS.iter().find(|s| s.slug == slug)
}

pub fn industry(slug: &str) -> Option<&'static Industry> {
    industries::INDUSTRIES.iter().find(|i| i.slug == slug)
}

/// Lowercase ASCII letters, digits and single interior hyphens.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Check the invariants the site relies on.
///
/// - every slug is URL-safe and unique within its table
/// - the solution and industry id sets are disjoint
/// - every fixed id has a record and every record has a fixed id
/// - industry record names agree with the name mapping
/// - cities only reference known industries
/// - every industry carries FAQs
pub fn validate() -> Result<()> {
    unique_slugs("city", cities::CITIES.iter().map(|c| c.slug))?;
    let solution_records = unique_slugs("solution", solutions::SOLUTIONS.iter().map(|s| s.slug))?;
    let industry_records = unique_slugs("industry", industries::INDUSTRIES.iter().map(|i| i.slug))?;

    let fixed_solutions = unique_slugs("solution", SOLUTION_SLUGS.iter().copied())?;
    let fixed_industries = unique_slugs("industry", industry_slugs())?;

    if let Some(slug) = fixed_solutions.intersection(&fixed_industries).next() {
        return Err(Error::OverlappingSlug {
            slug: slug.to_string(),
        });
    }

    check_coverage("solution", &fixed_solutions, &solution_records)?;
    check_coverage("industry", &fixed_industries, &industry_records)?;

    for record in industries::INDUSTRIES {
        let mapped = industry_name(record.slug).unwrap_or_default();
        if mapped != record.name {
            return Err(Error::NameMismatch {
                slug: record.slug.to_string(),
                record: record.name.to_string(),
                mapped: mapped.to_string(),
            });
        }
        if record.faqs.is_empty() {
            return Err(Error::MissingFaqs {
                slug: record.slug.to_string(),
            });
        }
    }

    for city in cities::CITIES {
        if let Some(unknown) = city.industries.iter().find(|i| !is_industry_slug(i)) {
            return Err(Error::UnknownCityIndustry {
                city: city.slug.to_string(),
                industry: unknown.to_string(),
            });
        }
    }

    Ok(())
}

fn unique_slugs<'a>(
    kind: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<BTreeSet<&'a str>> {
    let mut seen = BTreeSet::new();
    for slug in slugs {
        if !is_url_safe(slug) {
            return Err(Error::InvalidSlug {
                slug: slug.to_string(),
            });
        }
        if !seen.insert(slug) {
            return Err(Error::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    Ok(seen)
}

fn check_coverage(
    kind: &'static str,
    fixed: &BTreeSet<&str>,
    records: &BTreeSet<&str>,
) -> Result<()> {
    if let Some(slug) = fixed.difference(records).next() {
        return Err(Error::MissingRecord {
            kind,
            slug: slug.to_string(),
        });
    }
    if let Some(slug) = records.difference(fixed).next() {
        return Err(Error::UnlistedRecord {
            kind,
            slug: slug.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_slug_sets_are_disjoint() {
        for slug in SOLUTION_SLUGS {
            assert!(!is_industry_slug(slug), "{slug} is in both sets");
        }
        for slug in industry_slugs() {
            assert!(!is_solution_slug(slug), "{slug} is in both sets");
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(city("chicago").map(|c| c.name), Some("Chicago"));
        assert_eq!(
            solution("ai-voice-agents").map(|s| s.name),
            Some("AI Voice Agents")
        );
        assert_eq!(industry_name("automotive"), Some("Automotive & Dealership"));
        assert!(city("nowhere").is_none());
        assert!(industry_name("bogus-slug").is_none());
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(all_solutions().len(), 4);
        assert_eq!(all_industries().len(), 10);
        assert!(!all_cities().is_empty());
    }

    #[test]
    fn test_url_safe() {
        assert!(is_url_safe("new-york"));
        assert!(is_url_safe("ai-chatbots"));
        assert!(!is_url_safe(""));
        assert!(!is_url_safe("New-York"));
        assert!(!is_url_safe("-leading"));
        assert!(!is_url_safe("double--hyphen"));
        assert!(!is_url_safe("with space"));
    }

    #[test]
    fn test_unique_slugs_rejects_duplicates() {
        let err = unique_slugs("city", ["a", "b", "a"].into_iter()).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateSlug {
                kind: "city",
                slug: "a".to_string()
            }
        );
    }

    #[test]
    fn test_check_coverage_reports_missing_and_unlisted() {
        let fixed: BTreeSet<&str> = ["a", "b"].into_iter().collect();
        let records: BTreeSet<&str> = ["a"].into_iter().collect();
        assert!(matches!(
            check_coverage("solution", &fixed, &records),
            Err(Error::MissingRecord { .. })
        ));
        assert!(matches!(
            check_coverage("solution", &records, &fixed),
            Err(Error::UnlistedRecord { .. })
        ));
    }

    #[test]
    fn test_city_display_name() {
        let chicago = city("chicago").unwrap();
        assert_eq!(chicago.display_name(), "Chicago, IL");
    }
}
