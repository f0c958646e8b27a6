// main.rs — renders the whole site into an output directory
//
// One run is the original's page load, applied to every page: resolve the
// locale, fetch its content document, fill each page, write the HTML. A
// fetch failure is logged and leaves the pages unfilled; it never aborts
// the run.

use log::{error, info};
use portfolio_site::content::ContentSource;
use portfolio_site::locale::{self, Locale, LocaleStore};
use portfolio_site::{detail, nav, page::Page, pages, render, ContentDocument};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

enum PageKind {
    Index,
    Detail,
}

struct Cli {
    lang: Option<Locale>,
    content: Option<PathBuf>,
    out: PathBuf,
    toggle: bool,
}

/// CLI: --lang <code>, --content <dir>, --out <dir>, --toggle-lang.
/// Unknown arguments are ignored.
fn parse_args() -> Cli {
    let mut cli = Cli {
        lang: None,
        content: None,
        out: PathBuf::from("site"),
        toggle: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--lang" => {
                if let Some(v) = it.next() {
                    cli.lang = Locale::parse(&v);
                }
            }
            "--content" => {
                if let Some(v) = it.next() {
                    cli.content = Some(PathBuf::from(v));
                }
            }
            "--out" => {
                if let Some(v) = it.next() {
                    cli.out = PathBuf::from(v);
                }
            }
            "--toggle-lang" => cli.toggle = true,
            _ => {}
        }
    }
    cli
}

fn render_one(page: &mut Page, kind: &PageKind, doc: &ContentDocument, locale: Locale) {
    match kind {
        PageKind::Index => render::render_page(page, doc),
        PageKind::Detail => {
            // The shared pass runs on detail pages too; only the three
            // detail fields come from the project record.
            render::apply_text_bindings(page, doc);
            detail::load_project_detail(page, doc);
        }
    }
    nav::highlight_active_nav(page);
    render::update_lang_label(page, locale);
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = parse_args();
    let store = LocaleStore::open_default();

    if cli.toggle {
        match store.toggle() {
            Ok(next) => info!("language preference now '{next}'"),
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let active = locale::resolve(cli.lang, &store);
    let source = match cli.content {
        Some(dir) => ContentSource::new(dir),
        None => ContentSource::discover(),
    };
    info!(
        "rendering under locale '{active}' from {}",
        source.dir().display()
    );

    let doc = match source.fetch(active) {
        Ok(doc) => Some(doc),
        Err(e) => {
            // Unfilled pages are still written below.
            error!("content fetch failed: {e}");
            None
        }
    };

    let mut outputs: Vec<(String, Page, PageKind)> = vec![
        ("index.html".into(), pages::index(), PageKind::Index),
        ("about.html".into(), pages::about(), PageKind::Index),
        (
            "projects/index.html".into(),
            pages::projects(),
            PageKind::Index,
        ),
        ("contact.html".into(), pages::contact(), PageKind::Index),
    ];
    if let Some(doc) = &doc {
        for project in &doc.projects {
            outputs.push((
                format!("projects/{}.html", project.id),
                pages::project_detail(&project.id),
                PageKind::Detail,
            ));
        }
    }

    let mut failed = false;
    for (rel, mut page, kind) in outputs {
        if let Some(doc) = &doc {
            render_one(&mut page, &kind, doc, active);
        } else {
            nav::highlight_active_nav(&mut page);
            render::update_lang_label(&mut page, active);
        }

        let target = cli.out.join(&rel);
        if let Some(parent) = target.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("cannot create {}: {e}", parent.display());
                failed = true;
                continue;
            }
        }
        match fs::write(&target, page.to_html()) {
            Ok(()) => info!("wrote {}", target.display()),
            Err(e) => {
                error!("cannot write {}: {e}", target.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
