// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use sitegen::{Page, Route};

/// Route command - prints which page a path resolves to
///
/// Fails when the path names no page.
pub fn route_command<F>(path: &str, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    let page = sitegen::resolve_path(path)?;
    handler(&describe_page(&page));
    Ok(())
}

/// One-line description of a routing decision, e.g.
/// `industry chicago automotive "Automotive & Dealership"`.
pub fn describe_page(page: &Page) -> String {
    match page {
        Page::Home => "home".to_string(),
        Page::LocationIndex => "locations".to_string(),
        Page::IndustryIndex => "industries".to_string(),
        Page::SolutionIndex => "solutions".to_string(),
        Page::City(city) => format!("city {} {:?}", city.slug, city.display_name()),
        Page::Combination(route @ Route::Solution { .. }) => format!(
            "solution {} {} {:?}",
            route.city().slug,
            route.slug(),
            route.subject()
        ),
        Page::Combination(route @ Route::Industry { .. }) => format!(
            "industry {} {} {:?}",
            route.city().slug,
            route.slug(),
            route.subject()
        ),
        Page::Industry(industry) => format!("industry-page {} {:?}", industry.slug, industry.name),
        Page::Solution(solution) => format!("solution-page {} {:?}", solution.slug, solution.name),
        Page::NotFound => "not-found".to_string(),
    }
}
