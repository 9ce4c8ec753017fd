// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layouts.
//!
//! Layouts wrap rendered page content in a complete HTML document.
//! Selected by `layout:` in `site.yaml`.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context passed to layout functions.
pub struct LayoutContext<'a> {
    /// Page title
    pub title: &'a str,
    /// Site title (from site.yaml)
    pub site_title: &'a str,
    /// Link to the home page, base URL included
    pub home_href: &'a str,
    /// Rendered page body
    pub content: &'a str,
    /// Top navigation: (label, href)
    pub nav: &'a [(String, String)],
    /// Palette token for the page accent, if the page has one
    pub accent: Option<&'a str>,
}

/// Apply a named layout to rendered content.
pub fn apply_layout(name: &str, ctx: &LayoutContext) -> String {
    let markup = match name {
        "landing" => landing_layout(ctx),
        _ => default_layout(ctx),
    };
    markup.into_string()
}

fn head(ctx: &LayoutContext) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="generator" content=(format!("marketsite v{}", VERSION));
            title { (ctx.title) " | " (ctx.site_title) }
        }
    }
}

fn header(ctx: &LayoutContext) -> Markup {
    html! {
        header class="site-header" {
            a class="brand" href=(ctx.home_href) { (ctx.site_title) }
            @if !ctx.nav.is_empty() {
                nav class="site-nav" {
                    ul {
                        @for (label, href) in ctx.nav {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
            }
        }
    }
}

fn body_class(base: &str, accent: Option<&str>) -> String {
    match accent {
        Some(token) => format!("{} accent-{}", base, token),
        None => base.to_string(),
    }
}

/// Default layout: header, single content column.
fn default_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body class=(body_class("page", ctx.accent)) {
                (header(ctx))
                main class="content" {
                    (PreEscaped(ctx.content))
                }
            }
        }
    }
}

/// Landing layout: full-width sections and a footer repeating the navigation.
fn landing_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body class=(body_class("landing", ctx.accent)) {
                (header(ctx))
                main class="landing-sections" {
                    (PreEscaped(ctx.content))
                }
                footer class="site-footer" {
                    @for (label, href) in ctx.nav {
                        a href=(href) { (label) }
                        " "
                    }
                }
            }
        }
    }
}
