// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Combination-page dispatch for `/locations/{city}/{slug}`.
//!
//! The second segment is either one of the fixed solution ids or one of the
//! fixed industry ids. Anything else, or an unknown city, is not found.

use crate::error::{Error, Result};
use catalog::{City, Industry, Solution};

/// Which template a combination page renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Solution,
    Industry,
}

/// A resolved combination page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    Solution {
        city: &'static City,
        solution: &'static Solution,
        solutions: &'static [Solution],
    },
    Industry {
        city: &'static City,
        industry: &'static Industry,
        solutions: &'static [Solution],
    },
}

impl Route {
    pub fn template(&self) -> Template {
        match self {
            Route::Solution { .. } => Template::Solution,
            Route::Industry { .. } => Template::Industry,
        }
    }

    pub fn city(&self) -> &'static City {
        match self {
            Route::Solution { city, .. } | Route::Industry { city, .. } => *city,
        }
    }

    /// The second path segment this route was dispatched on.
    pub fn slug(&self) -> &'static str {
        match self {
            Route::Solution { solution, .. } => solution.slug,
            Route::Industry { industry, .. } => industry.slug,
        }
    }

    /// Display name of the solution or industry.
    pub fn subject(&self) -> &'static str {
        match self {
            Route::Solution { solution, .. } => solution.name,
            Route::Industry { industry, .. } => industry.name,
        }
    }

    pub fn path(&self) -> String {
        format!("/locations/{}/{}", self.city().slug, self.slug())
    }
}

/// Route `(city, slug)` to a combination page.
pub fn dispatch(city: &str, slug: &str) -> Result<Route> {
    let not_found = || Error::not_found(format!("/locations/{}/{}", city, slug));

    let city = catalog::city(city).ok_or_else(not_found)?;
    let solutions = catalog::all_solutions();

    if catalog::is_solution_slug(slug) {
        let solution = catalog::solution(slug).ok_or_else(not_found)?;
        return Ok(Route::Solution {
            city,
            solution,
            solutions,
        });
    }

    if catalog::is_industry_slug(slug) {
        let industry = catalog::industry(slug).ok_or_else(not_found)?;
        return Ok(Route::Industry {
            city,
            industry,
            solutions,
        });
    }

    Err(not_found())
}
