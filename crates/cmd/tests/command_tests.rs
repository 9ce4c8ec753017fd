use tempfile::tempdir;

use cmd::commands::{build_command, list_command, render_command, route_command};
use cmd::common::SiteContext;

/// Collect handler output into a vector of lines
fn capture<F>(run: F) -> anyhow::Result<Vec<String>>
where
    F: FnOnce(&mut dyn FnMut(&str)) -> anyhow::Result<()>,
{
    let mut lines = Vec::new();
    run(&mut |line: &str| lines.push(line.to_string()))?;
    Ok(lines)
}

fn write_config(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("site.yaml");
    std::fs::write(&path, "site:\n  title: \"Test Site\"\n  base_url: /\n").expect("write config");
    path
}

#[test]
fn build_writes_site_and_reports_count() {
    let tmp = tempdir().expect("tempdir");
    let ctx = SiteContext::new(Some(write_config(tmp.path())));
    let out = tmp.path().join("dist");

    let lines = capture(|h| build_command(&ctx, &out, h)).expect("build");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Generated "), "got {:?}", lines);

    let home = std::fs::read_to_string(out.join("index.html")).expect("index.html");
    assert!(home.contains("Test Site"));
    assert!(out.join("locations/miami/hospitality/index.html").is_file());
    assert!(out.join("industries/legal/index.html").is_file());
}

#[test]
fn build_fails_with_bad_config() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("site.yaml");
    std::fs::write(&config, "site:\n  title: \"\"\n").expect("write config");
    let ctx = SiteContext::new(Some(config));

    let err = capture(|h| build_command(&ctx, &tmp.path().join("dist"), h)).unwrap_err();
    assert!(format!("{err:#}").contains("site.title"), "got {err:#}");
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn route_reports_decisions_and_not_found() {
    let lines = capture(|h| route_command("/locations/chicago/automotive", h)).expect("route");
    assert_eq!(lines, [r#"industry chicago automotive "Automotive & Dealership""#]);

    let lines = capture(|h| route_command("/industries/automotive", h)).expect("route");
    assert_eq!(lines, [r#"industry-page automotive "Automotive & Dealership""#]);

    assert!(capture(|h| route_command("/locations/nowhere/automotive", h)).is_err());
}

#[test]
fn render_prints_one_document() {
    let ctx = SiteContext::default();
    let lines = capture(|h| render_command(&ctx, "/solutions/ai-automation", h)).expect("render");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("<!DOCTYPE html>"));
    assert!(lines[0].contains("AI Automation"));
}

#[test]
fn list_text_and_json_agree() {
    let ctx = SiteContext::default();
    let text = capture(|h| list_command(&ctx, false, h)).expect("list");
    let json = capture(|h| list_command(&ctx, true, h)).expect("list --json");
    assert_eq!(json.len(), 1);

    let parsed: serde_json::Value = serde_json::from_str(&json[0]).expect("valid json");
    let entries = parsed.as_array().expect("array");
    assert_eq!(entries.len(), text.len());
    assert_eq!(entries[0]["url"], "/");
    assert_eq!(entries[0]["output_path"], "index.html");
    assert!(text.iter().any(|l| l.starts_with("/locations/chicago/ai-voice-agents\t")));
}
