// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

// Error types for catalog consistency checks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("slug is both a solution and an industry: {slug}")]
    OverlappingSlug { slug: String },

    #[error("{kind} slug has no record: {slug}")]
    MissingRecord { kind: &'static str, slug: String },

    #[error("{kind} record is not in the fixed slug set: {slug}")]
    UnlistedRecord { kind: &'static str, slug: String },

    #[error("industry {slug} is named {record:?} but the name mapping says {mapped:?}")]
    NameMismatch {
        slug: String,
        record: String,
        mapped: String,
    },

    #[error("city {city} lists unknown industry {industry}")]
    UnknownCityIndustry { city: String, industry: String },

    #[error("industry {slug} has no FAQs")]
    MissingFaqs { slug: String },

    #[error("slug is not URL-safe: {slug:?}")]
    InvalidSlug { slug: String },
}
