// Routing properties of the combination-page dispatcher, checked across the
// whole catalog.

use catalog::{SOLUTION_SLUGS, all_cities, industry_slugs, is_industry_slug, is_solution_slug};
use sitegen::{Route, Template, dispatch};

#[test]
fn solution_slugs_select_the_solution_template_in_every_city() {
    for city in all_cities() {
        for slug in SOLUTION_SLUGS {
            let route = dispatch(city.slug, slug).expect("solution route");
            assert_eq!(route.template(), Template::Solution, "{}/{}", city.slug, slug);
            match route {
                Route::Solution { city: c, solution, .. } => {
                    assert_eq!(c.slug, city.slug);
                    assert_eq!(solution.slug, slug);
                }
                Route::Industry { .. } => panic!("{}/{} took the industry path", city.slug, slug),
            }
        }
    }
}

#[test]
fn industry_slugs_select_the_industry_template_in_every_city() {
    for city in all_cities() {
        for slug in industry_slugs() {
            let route = dispatch(city.slug, slug).expect("industry route");
            assert_eq!(route.template(), Template::Industry, "{}/{}", city.slug, slug);
            match route {
                Route::Industry {
                    industry,
                    solutions,
                    ..
                } => {
                    assert_eq!(industry.slug, slug);
                    assert_eq!(Some(industry.name), catalog::industry_name(slug));
                    assert_eq!(solutions.len(), SOLUTION_SLUGS.len());
                }
                Route::Solution { .. } => panic!("{}/{} took the solution path", city.slug, slug),
            }
        }
    }
}

#[test]
fn unknown_city_is_not_found_for_any_second_segment() {
    let seconds = SOLUTION_SLUGS
        .iter()
        .copied()
        .chain(industry_slugs())
        .chain(["bogus-slug", ""]);
    for slug in seconds {
        let err = dispatch("nowhere", slug).unwrap_err();
        assert!(err.is_not_found(), "nowhere/{slug}: {err}");
    }
}

#[test]
fn unknown_second_segment_is_not_found() {
    for city in all_cities() {
        for slug in ["bogus-slug", "ai-voice-agent", "automotive-", "locations", "chicago"] {
            let err = dispatch(city.slug, slug).unwrap_err();
            assert!(err.is_not_found(), "{}/{}: {}", city.slug, slug, err);
        }
    }
}

#[test]
fn solution_and_industry_sets_are_disjoint() {
    for slug in SOLUTION_SLUGS {
        assert!(!is_industry_slug(slug));
    }
    for slug in industry_slugs() {
        assert!(!is_solution_slug(slug));
    }
}

#[test]
fn dispatch_is_idempotent() {
    for (city, slug) in [
        ("chicago", "ai-voice-agents"),
        ("chicago", "automotive"),
        ("nowhere", "automotive"),
        ("chicago", "bogus-slug"),
    ] {
        let first = dispatch(city, slug);
        for _ in 0..3 {
            let again = dispatch(city, slug);
            match (&first, &again) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
                _ => panic!("{city}/{slug} changed its decision"),
            }
        }
    }
}
