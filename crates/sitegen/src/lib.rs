// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Sitegen: static marketing site generator
//!
//! Renders location, industry and solution pages from the catalog tables
//! with Maud components and layouts. Combination pages under
//! `/locations/{city}/{slug}` are routed by [`dispatch()`].
//!
//! ## Usage
//!
//! ```bash
//! marketsite build ./dist --config site.yaml
//! ```

mod components;
mod config;
mod dispatch;
mod error;
mod generate;
mod layouts;
pub mod markdown;
mod pages;
mod routes;

pub use config::{CallToAction, SiteConfig, SiteMeta};
pub use dispatch::{Route, Template, dispatch};
pub use error::{Error, Result};
pub use generate::{SiteReport, generate_site, render_job, render_path};
pub use routes::{Page, PageJob, expand_pages, resolve_path};
