/*
 * build_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end build tests over fixture sites in a tempdir.
 */

use std::fs;
use std::path::Path;

use quoin_core::{BuildConfig, CoreError, Website, new_site};

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| panic!("missing {}", path.display()))
}

#[test]
fn test_build_seeded_site_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("mysite");
    new_site(&site_dir, &BuildConfig::default()).unwrap();

    let website = Website::open(&site_dir, None, BuildConfig::default()).unwrap();
    website.build().unwrap();

    let build_dir = site_dir.join("build");

    let home = read(&build_dir.join("index.html"));
    assert!(home.starts_with("<!DOCTYPE html>"));
    assert!(home.contains("<html lang=\"en\">"));
    assert!(home.contains("<meta charset=\"utf-8\">"));
    assert!(home.contains("<title>"));
    assert!(home.contains("A Quoin Site"));
    assert!(home.contains("Welcome"));
    // The home link is active on the home page, the about link is not.
    assert!(home.contains(r#"<a class="activenavlink" href="/">"#));
    assert!(home.contains(r#"<a class="navlink" href="/about">"#));
    assert!(home.contains("© A Quoin Site"));

    let about = read(&build_dir.join("about/index.html"));
    assert!(about.contains(r#"<a class="activenavlink" href="/about">"#));
    assert!(about.contains(r#"<a class="navlink" href="/">"#));
    assert!(about.contains("Tell your story here."));

    let css = read(&build_dir.join("page.css"));
    assert!(css.starts_with("@charset \"UTF-8\";"));
    assert!(css.contains("activenavlink"));
}

#[test]
fn test_raw_index_page_and_assets() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("mysite");
    new_site(&site_dir, &BuildConfig::default()).unwrap();

    // A page shipping its own index.html bypasses spec composition.
    let legacy = site_dir.join("content/pages/legacy");
    fs::create_dir_all(&legacy).unwrap();
    fs::write(legacy.join("index.html"), "<p>legacy page</p>").unwrap();

    // Page assets (*.css) ride along into the page's build dir.
    fs::write(site_dir.join("content/home/extra.css"), "body { color: red }").unwrap();

    let website = Website::open(&site_dir, None, BuildConfig::default()).unwrap();
    website.build().unwrap();

    let build_dir = site_dir.join("build");
    assert_eq!(read(&build_dir.join("legacy/index.html")), "<p>legacy page</p>");
    assert!(build_dir.join("extra.css").is_file());
}

#[test]
fn test_per_page_spec_layer_overrides_theme() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("mysite");
    new_site(&site_dir, &BuildConfig::default()).unwrap();

    fs::write(
        site_dir.join("content/pages/about/pagespecs.yaml"),
        concat!(
            "content:\n",
            "  default:\n",
            "    inherit: null\n",
            "    title: About Override\n",
            "    main: null\n",
            "    footer: local footer\n",
        ),
    )
    .unwrap();

    let website = Website::open(&site_dir, None, BuildConfig::default()).unwrap();
    website.build().unwrap();

    let about = read(&site_dir.join("build/about/index.html"));
    assert!(about.contains("About Override"));
    assert!(about.contains("local footer"));

    // Other pages are untouched by the per-page layer.
    let home = read(&site_dir.join("build/index.html"));
    assert!(home.contains("© A Quoin Site"));
}

#[test]
fn test_unused_content_aborts_build() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("mysite");
    new_site(&site_dir, &BuildConfig::default()).unwrap();
    fs::write(
        site_dir.join("content/pages/about/_extra.md"),
        "not in the schema\n",
    )
    .unwrap();

    let website = Website::open(&site_dir, None, BuildConfig::default()).unwrap();
    assert!(matches!(
        website.build(),
        Err(CoreError::UnusedContent { keys }) if keys == vec!["extra"]
    ));
}

#[test]
fn test_rebuild_clobber_and_clean() {
    let tmp = tempfile::tempdir().unwrap();
    let site_dir = tmp.path().join("mysite");
    new_site(&site_dir, &BuildConfig::default()).unwrap();

    let website = Website::open(&site_dir, None, BuildConfig::default()).unwrap();
    website.build().unwrap();
    // A rebuild starts from a clean build dir.
    website.build().unwrap();
    assert!(site_dir.join("build/index.html").is_file());

    website.clobber().unwrap();
    assert!(!site_dir.join("build").exists());

    // clean tolerates a missing build dir; clobber does not.
    website.clean().unwrap();
    assert!(matches!(
        website.clobber(),
        Err(CoreError::PathNotFound { .. })
    ));
}
