// Full page-load lifecycle against a content directory on disk: preference
// -> fetch -> render -> serialize, including the failure path.

use portfolio_site::content::ContentSource;
use portfolio_site::locale::{Locale, LocaleStore};
use portfolio_site::{detail, nav, pages, render, Error};
use std::fs;
use tempfile::tempdir;

const EN_DOC: &str = r#"{
    "nav_home": "Home",
    "nav_projects": "Projects",
    "hero_title": "Software Engineer",
    "about_highlights": ["ships on time", "writes docs"],
    "skills_backend": ["Rust", "Postgres"],
    "projects": [
        {"id": "viewer", "title": "Viewer", "desc": "Image viewer",
         "details": "A small image viewer.", "stack": "Rust"},
        {"id": "bot", "title": "Bot", "desc": "Chat bot",
         "details": "A chat bot.", "stack": "Python"}
    ]
}"#;

fn content_dir(doc: &str) -> tempfile::TempDir {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("en.json"), doc).expect("write en.json");
    dir
}

#[test]
fn index_page_renders_bindings_lists_and_grid() {
    let dir = content_dir(EN_DOC);
    let source = ContentSource::new(dir.path());
    let doc = source.fetch(Locale::En).expect("fetch");

    let mut page = pages::index();
    render::render_page(&mut page, &doc);
    nav::highlight_active_nav(&mut page);
    render::update_lang_label(&mut page, Locale::En);

    let html = page.to_html();
    assert!(html.contains("Software Engineer"));
    assert!(html.contains("href=\"/projects/viewer\""));
    assert!(html.contains("href=\"/projects/bot\""));
    assert!(html.contains(">EN</span>"));

    // The home link is the active one on "/".
    let home = page
        .root
        .children
        .iter()
        .find(|el| el.tag == "header")
        .and_then(|header| header.children.first())
        .and_then(|nav| nav.children.first())
        .expect("home link");
    assert!(home.has_class("active"));
}

#[test]
fn about_page_renders_the_list_sections() {
    let dir = content_dir(EN_DOC);
    let doc = ContentSource::new(dir.path())
        .fetch(Locale::En)
        .expect("fetch");

    let mut page = pages::about();
    render::render_page(&mut page, &doc);

    let html = page.to_html();
    assert!(html.contains("<li>ships on time</li><li>writes docs</li>"));
    assert!(html.contains("<li>Rust</li><li>Postgres</li>"));
}

#[test]
fn detail_page_fills_from_the_matching_record() {
    let dir = content_dir(EN_DOC);
    let doc = ContentSource::new(dir.path())
        .fetch(Locale::En)
        .expect("fetch");

    let mut page = pages::project_detail("bot");
    render::apply_text_bindings(&mut page, &doc);
    detail::load_project_detail(&mut page, &doc);

    assert_eq!(page.by_id("project-title").expect("el").text, "Bot");
    assert_eq!(page.by_id("project-details").expect("el").text, "A chat bot.");
    assert_eq!(page.by_id("project-stack").expect("el").text, "Python");
}

#[test]
fn stale_detail_link_renders_the_initial_markup() {
    let dir = content_dir(EN_DOC);
    let doc = ContentSource::new(dir.path())
        .fetch(Locale::En)
        .expect("fetch");

    let mut page = pages::project_detail("renamed-away");
    let before = page.to_html();
    detail::load_project_detail(&mut page, &doc);
    assert_eq!(page.to_html(), before);
}

#[test]
fn malformed_document_reports_and_leaves_pages_unfilled() {
    let dir = content_dir("{ definitely not json");
    let source = ContentSource::new(dir.path());

    let err = source.fetch(Locale::En).unwrap_err();
    assert!(matches!(err, Error::Malformed { locale: Locale::En, .. }));

    // The caller keeps the bare page on failure; nothing panics.
    let mut page = pages::index();
    nav::highlight_active_nav(&mut page);
    render::update_lang_label(&mut page, Locale::En);
    let html = page.to_html();
    assert!(html.contains("data-key=\"hero_title\""));
}

#[test]
fn toggled_preference_switches_the_fetched_document() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("en.json"), r#"{"hero_title": "Hello"}"#).expect("write");
    fs::write(dir.path().join("ru.json"), r#"{"hero_title": "Привет"}"#).expect("write");

    let store = LocaleStore::at_path(dir.path().join("prefs.toml"));
    let source = ContentSource::new(dir.path());

    let doc = source.fetch(store.get()).expect("fetch ru");
    assert_eq!(doc.text("hero_title"), Some("Привет"));

    let next = store.toggle().expect("toggle");
    let doc = source.fetch(next).expect("fetch en");
    assert_eq!(doc.text("hero_title"), Some("Hello"));
}
