// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Page bodies: each page kind mapped onto the shared components.

use crate::components::{
    breadcrumb, bullet_list, challenge_list, cta, faq_accordion, feature_grid, hero, link_list,
    stats_grid,
};
use crate::config::SiteConfig;
use crate::dispatch::Route;
use crate::routes::{Page, PageJob};
use catalog::{City, Industry, Solution};
use maud::{Markup, html};

/// Render the body of a page (everything inside the layout's `<main>`).
pub fn render_body(config: &SiteConfig, job: &PageJob) -> Markup {
    let content = match job.page {
        Page::Home => home(config),
        Page::LocationIndex => location_index(config),
        Page::City(city) => city_page(config, city),
        Page::Combination(Route::Solution {
            city,
            solution,
            solutions,
        }) => solution_template(config, city, solution, solutions),
        Page::Combination(Route::Industry {
            city,
            industry,
            solutions,
        }) => industry_template(config, city, industry, solutions),
        Page::IndustryIndex => industry_index(config),
        Page::Industry(industry) => industry_page(config, industry),
        Page::SolutionIndex => solution_index(config),
        Page::Solution(solution) => solution_page(config, solution),
        Page::NotFound => not_found(config),
    };

    html! {
        @if job.page != Page::Home {
            (breadcrumb(&job.breadcrumbs))
        }
        (content)
    }
}

/// Palette token for pages tied to a single solution.
pub fn accent(page: &Page) -> Option<&'static str> {
    match page {
        Page::Solution(solution) => Some(solution.color),
        Page::Combination(Route::Solution { solution, .. }) => Some(solution.color),
        _ => None,
    }
}

fn link(config: &SiteConfig, label: &str, path: &str) -> (String, String) {
    (label.to_string(), config.href(path))
}

fn home(config: &SiteConfig) -> Markup {
    let solutions: Vec<_> = catalog::all_solutions()
        .iter()
        .map(|s| link(config, s.name, &Page::Solution(s).path()))
        .collect();
    let industries: Vec<_> = catalog::all_industries()
        .iter()
        .map(|i| link(config, i.name, &Page::Industry(i).path()))
        .collect();
    let cities: Vec<_> = catalog::all_cities()
        .iter()
        .map(|c| link(config, &c.display_name(), &Page::City(c).path()))
        .collect();

    html! {
        (hero(None, &config.site.title,
            "Voice agents, chatbots, video agents and automation built for local businesses.",
            &config.cta_link()))
        (link_list("Solutions", "solutions", &solutions))
        (link_list("Industries", "industries", &industries))
        (link_list("Locations", "locations", &cities))
        (cta("Ready to put AI to work?", &config.cta_link()))
    }
}

fn location_index(config: &SiteConfig) -> Markup {
    html! {
        (hero(None, "Locations", "AI agents for businesses in every city we serve.", &config.cta_link()))
        section class="city-grid" {
            @for city in catalog::all_cities() {
                article class="card" {
                    h2 { a href=(config.href(&Page::City(city).path())) { (city.display_name()) } }
                    p { (city.state) }
                }
            }
        }
    }
}

fn city_page(config: &SiteConfig, city: &'static City) -> Markup {
    let base = Page::City(city).path();
    let solutions: Vec<_> = catalog::all_solutions()
        .iter()
        .map(|s| link(config, &format!("{} in {}", s.name, city.name), &format!("{}/{}", base, s.slug)))
        .collect();
    let industries: Vec<_> = city
        .industries
        .iter()
        .filter_map(|slug| catalog::industry_name(slug).map(|name| (slug, name)))
        .map(|(slug, name)| link(config, &format!("{} in {}", name, city.name), &format!("{}/{}", base, slug)))
        .collect();

    html! {
        (hero(Some(&city.display_name()), &format!("AI Agents in {}", city.name), city.description, &config.cta_link()))
        (stats_grid(city.stats))
        (link_list("Solutions", "solutions", &solutions))
        (link_list(&format!("Industries in {}", city.name), "industries", &industries))
        (bullet_list("Neighborhoods we serve", "neighborhoods", city.neighborhoods))
        (cta(&format!("Bring AI agents to your {} business", city.name), &config.cta_link()))
    }
}

/// Combination template for `/locations/{city}/{solution}`.
fn solution_template(
    config: &SiteConfig,
    city: &'static City,
    solution: &'static Solution,
    solutions: &'static [Solution],
) -> Markup {
    let city_path = Page::City(city).path();
    let others: Vec<_> = solutions
        .iter()
        .filter(|s| s.slug != solution.slug)
        .map(|s| link(config, &format!("{} in {}", s.name, city.name), &format!("{}/{}", city_path, s.slug)))
        .collect();

    html! {
        (hero(
            Some(&city.display_name()),
            &format!("{} in {}", solution.name, city.name),
            &format!("{}\n\n{}", solution.tagline, solution.description),
            &config.cta_link(),
        ))
        (stats_grid(solution.stats))
        (bullet_list(&format!("Why {} businesses choose {}", city.name, solution.name), "benefits", solution.benefits))
        (feature_grid("Features", solution.features))
        (bullet_list("Use cases", "use-cases", solution.use_cases))
        (link_list(&format!("More solutions in {}", city.name), "related", &others))
        (cta(&format!("Launch {} in {}", solution.name, city.name), &config.cta_link()))
    }
}

/// Combination template for `/locations/{city}/{industry}`.
fn industry_template(
    config: &SiteConfig,
    city: &'static City,
    industry: &'static Industry,
    solutions: &'static [Solution],
) -> Markup {
    let city_path = Page::City(city).path();
    let solution_links: Vec<_> = solutions
        .iter()
        .map(|s| link(config, s.name, &format!("{}/{}", city_path, s.slug)))
        .collect();

    html! {
        (hero(Some(&city.display_name()), &format!("AI Agents for {} in {}", industry.name, city.name), industry.description, &config.cta_link()))
        (stats_grid(industry.stats))
        (challenge_list(&format!("Challenges facing {} businesses in {}", industry.name, city.name), industry.challenges))
        (bullet_list("How AI agents help", "use-cases", industry.use_cases))
        (link_list(&format!("Solutions for {} in {}", industry.name, city.name), "solutions", &solution_links))
        (faq_accordion(industry.faqs))
        (cta(&format!("Talk to us about {} in {}", industry.name, city.name), &config.cta_link()))
    }
}

fn industry_index(config: &SiteConfig) -> Markup {
    html! {
        (hero(None, "Industries", "AI agents shaped around the way your industry works.", &config.cta_link()))
        section class="industry-grid" {
            @for industry in catalog::all_industries() {
                article class="card" {
                    h2 { a href=(config.href(&Page::Industry(industry).path())) { (industry.name) } }
                    p { (industry.headline) }
                }
            }
        }
    }
}

fn industry_page(config: &SiteConfig, industry: &'static Industry) -> Markup {
    let cities: Vec<_> = catalog::all_cities()
        .iter()
        .filter(|c| c.industries.contains(&industry.slug))
        .map(|c| {
            link(
                config,
                &format!("{} in {}", industry.name, c.name),
                &format!("{}/{}", Page::City(c).path(), industry.slug),
            )
        })
        .collect();

    html! {
        (hero(Some(industry.name), industry.headline, industry.description, &config.cta_link()))
        (stats_grid(industry.stats))
        (challenge_list("Challenges we solve", industry.challenges))
        (bullet_list("Use cases", "use-cases", industry.use_cases))
        (link_list("Popular locations", "related", &cities))
        (faq_accordion(industry.faqs))
        (cta(&format!("AI agents for {}", industry.name), &config.cta_link()))
    }
}

fn solution_index(config: &SiteConfig) -> Markup {
    html! {
        (hero(None, "Solutions", "Four ways to put AI agents to work.", &config.cta_link()))
        section class="solution-grid" {
            @for solution in catalog::all_solutions() {
                article class=(format!("card accent-{}", solution.color)) {
                    h2 { a href=(config.href(&Page::Solution(solution).path())) { (solution.name) } }
                    p { (solution.tagline) }
                }
            }
        }
    }
}

fn solution_page(config: &SiteConfig, solution: &'static Solution) -> Markup {
    let cities: Vec<_> = catalog::all_cities()
        .iter()
        .map(|c| {
            link(
                config,
                &format!("{} in {}", solution.name, c.name),
                &format!("{}/{}", Page::City(c).path(), solution.slug),
            )
        })
        .collect();

    html! {
        (hero(Some(solution.tagline), solution.name, solution.description, &config.cta_link()))
        (stats_grid(solution.stats))
        (bullet_list("Benefits", "benefits", solution.benefits))
        (feature_grid("Features", solution.features))
        (bullet_list("Use cases", "use-cases", solution.use_cases))
        (link_list("Available in", "related", &cities))
        (cta(&format!("Get started with {}", solution.name), &config.cta_link()))
    }
}

fn not_found(config: &SiteConfig) -> Markup {
    html! {
        section class="not-found" {
            h1 { "Page not found" }
            p { "The page you are looking for does not exist." }
            p { a href=(config.href("/")) { "Back to home" } }
        }
    }
}
