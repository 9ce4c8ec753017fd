// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Record types for the content tables.
//!
//! Every record is `'static` and compiled into the binary; nothing here is
//! ever mutated. Long-form `description` fields hold markdown.

use serde::Serialize;

/// A headline number with its caption, e.g. `("24/7", "call coverage")`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A city served by a location page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub slug: &'static str,
    pub name: &'static str,
    pub state: &'static str,
    pub state_code: &'static str,
    pub population: u32,
    /// Markdown
    pub description: &'static str,
    pub neighborhoods: &'static [&'static str],
    /// Industry slugs that are prominent locally; each must be an industry id.
    pub industries: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub stats: &'static [Stat],
    pub lat: f64,
    pub lng: f64,
}

impl City {
    /// "Chicago, IL"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.state_code)
    }
}

/// A titled feature of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// One of the fixed product offerings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Markdown
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub features: &'static [Feature],
    pub use_cases: &'static [&'static str],
    /// Palette token used by the stylesheet (`blue`, `violet`, ...)
    pub color: &'static str,
    pub stats: &'static [Stat],
}

/// A business problem an industry page addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Content block for one business vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    /// Markdown
    pub description: &'static str,
    pub challenges: &'static [Challenge],
    pub stats: &'static [Stat],
    pub use_cases: &'static [&'static str],
    pub faqs: &'static [Faq],
}
