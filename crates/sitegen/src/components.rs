// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Presentational blocks shared by every page.

use crate::config::CallToAction;
use crate::markdown::{render_markdown, slugify};
use catalog::{Challenge, Faq, Feature, Stat};
use maud::{Markup, PreEscaped, html};

/// Page opener: optional eyebrow, the page heading and a markdown lede.
pub fn hero(eyebrow: Option<&str>, title: &str, lede: &str, cta: &CallToAction) -> Markup {
    html! {
        section class="hero" {
            @if let Some(eyebrow) = eyebrow {
                p class="eyebrow" { (eyebrow) }
            }
            h1 { (title) }
            div class="lede" { (PreEscaped(render_markdown(lede))) }
            a class="button primary" href=(cta.href) { (cta.label) }
        }
    }
}

pub fn stats_grid(stats: &[Stat]) -> Markup {
    html! {
        @if !stats.is_empty() {
            section class="stats" {
                dl class="stats-grid" {
                    @for stat in stats {
                        div class="stat" {
                            dt { (stat.value) }
                            dd { (stat.label) }
                        }
                    }
                }
            }
        }
    }
}

pub fn feature_grid(heading: &str, features: &[Feature]) -> Markup {
    html! {
        @if !features.is_empty() {
            section class="features" {
                h2 { (heading) }
                div class="card-grid" {
                    @for feature in features {
                        article class="card" {
                            h3 { (feature.title) }
                            p { (feature.description) }
                        }
                    }
                }
            }
        }
    }
}

pub fn challenge_list(heading: &str, challenges: &[Challenge]) -> Markup {
    html! {
        @if !challenges.is_empty() {
            section class="challenges" {
                h2 { (heading) }
                ol class="challenge-list" {
                    @for challenge in challenges {
                        li {
                            h3 { (challenge.title) }
                            p { (challenge.description) }
                        }
                    }
                }
            }
        }
    }
}

/// A titled bullet list; renders nothing when `items` is empty.
pub fn bullet_list<S: AsRef<str>>(heading: &str, class: &str, items: &[S]) -> Markup {
    html! {
        @if !items.is_empty() {
            section class=(class) {
                h2 { (heading) }
                ul {
                    @for item in items {
                        li { (item.as_ref()) }
                    }
                }
            }
        }
    }
}

/// FAQ accordion; each entry is a `<details>` anchored by its question.
pub fn faq_accordion(faqs: &[Faq]) -> Markup {
    html! {
        @if !faqs.is_empty() {
            section class="faq" {
                h2 { "Frequently asked questions" }
                @for faq in faqs {
                    details id=(slugify(faq.question)) {
                        summary { (faq.question) }
                        p { (faq.answer) }
                    }
                }
            }
        }
    }
}

pub fn cta(heading: &str, cta: &CallToAction) -> Markup {
    html! {
        section class="cta" {
            h2 { (heading) }
            a class="button primary" href=(cta.href) { (cta.label) }
            @if let Some(phone) = &cta.phone {
                p class="phone" {
                    "Or call "
                    a href=(format!("tel:{}", phone_digits(phone))) { (phone) }
                }
            }
        }
    }
}

/// Breadcrumb trail; the last entry is the current page and is not a link.
pub fn breadcrumb(crumbs: &[(String, String)]) -> Markup {
    let last = crumbs.len().saturating_sub(1);
    html! {
        @if !crumbs.is_empty() {
            nav class="breadcrumb" aria-label="breadcrumb" {
                ol {
                    @for (i, (label, href)) in crumbs.iter().enumerate() {
                        @if i == last {
                            li class="active" aria-current="page" { (label) }
                        } @else {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
            }
        }
    }
}

/// A titled list of (label, href) links.
pub fn link_list(heading: &str, class: &str, links: &[(String, String)]) -> Markup {
    html! {
        @if !links.is_empty() {
            section class=(class) {
                h2 { (heading) }
                ul class="link-list" {
                    @for (label, href) in links {
                        li { a href=(href) { (label) } }
                    }
                }
            }
        }
    }
}

fn phone_digits(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
