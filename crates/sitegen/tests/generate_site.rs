use sitegen::{SiteConfig, expand_pages, generate_site, render_path};
use tempfile::tempdir;

fn read(dir: &std::path::Path, rel: &str) -> String {
    std::fs::read_to_string(dir.join(rel)).unwrap_or_else(|e| panic!("read {rel}: {e}"))
}

#[test]
fn generates_every_expanded_page() {
    let tmp = tempdir().expect("tempdir");
    let config = SiteConfig::default();

    let report = generate_site(&config, tmp.path()).expect("generate");
    let jobs = expand_pages(&config);
    assert_eq!(report.pages, jobs.len());
    assert_eq!(report.output_dir, tmp.path());

    for job in &jobs {
        assert!(tmp.path().join(&job.output_path).is_file(), "missing {}", job.output_path);
    }

    let combo = read(tmp.path(), "locations/chicago/automotive/index.html");
    assert!(combo.contains("Automotive &amp; Dealership"));
    assert!(combo.contains("<details"));

    let not_found = read(tmp.path(), "404.html");
    assert!(not_found.contains("Page not found"));
}

#[test]
fn generated_page_matches_render_path() {
    let tmp = tempdir().expect("tempdir");
    let config = SiteConfig::default();
    generate_site(&config, tmp.path()).expect("generate");

    let written = read(tmp.path(), "locations/chicago/ai-voice-agents/index.html");
    let rendered = render_path(&config, "/locations/chicago/ai-voice-agents").expect("render");
    assert_eq!(written, rendered);
}

#[test]
fn base_url_and_layout_from_config() {
    let tmp = tempdir().expect("tempdir");
    let config_path = tmp.path().join("site.yaml");
    std::fs::write(
        &config_path,
        "site:\n  title: Acme AI\n  base_url: /acme/\ncta:\n  phone: \"(555) 010-0000\"\nlayout: landing\n",
    )
    .expect("write config");

    let config = SiteConfig::load(&config_path).expect("load config");
    let out = tmp.path().join("dist");
    generate_site(&config, &out).expect("generate");

    let city = read(&out, "locations/chicago/index.html");
    assert!(city.contains(r#"href="/acme/locations/chicago/ai-chatbots""#), "got: {city}");
    assert!(city.contains("site-footer"));
    assert!(city.contains("tel:5550100000"));
    assert!(city.contains(r#"href="/acme/contact""#), "got: {city}");
    assert!(!city.contains(r#"href="/contact""#));
    assert!(city.contains("<title>AI Agents in Chicago, IL | Acme AI</title>"));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let tmp = tempdir().expect("tempdir");
    let err = SiteConfig::load(tmp.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, sitegen::Error::Io { .. }), "got {err}");
}

#[test]
fn unwritable_output_is_reported() {
    let tmp = tempdir().expect("tempdir");
    let blocker = tmp.path().join("dist");
    std::fs::write(&blocker, "not a directory").expect("write blocker");

    let err = generate_site(&SiteConfig::default(), &blocker).unwrap_err();
    assert!(matches!(err, sitegen::Error::Io { .. }), "got {err}");
}
