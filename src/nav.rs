// nav.rs — active navigation link highlighting

use crate::page::Page;
use url::Url;

const ACTIVE_CLASS: &str = "active";

/// Strip one trailing slash so `/projects/` and `/projects` compare equal.
fn normalize(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Path component of an href. Absolute URLs contribute their path; anything
/// that does not parse as one is taken as a path, minus query and fragment.
fn href_path(href: &str) -> String {
    match Url::parse(href) {
        Ok(url) => url.path().to_owned(),
        Err(_) => {
            let end = href.find(|c| c == '?' || c == '#').unwrap_or(href.len());
            href[..end].to_owned()
        }
    }
}

/// Mark every nav link whose path equals the page path. Duplicate hrefs all
/// match; nothing is deduplicated.
pub fn highlight_active_nav(page: &mut Page) {
    let current = normalize(&page.path).to_owned();
    page.for_each_nav_link_mut(&mut |link| {
        let Some(href) = link.href.as_deref() else { return };
        let path = href_path(href);
        if normalize(&path) == current {
            link.add_class(ACTIVE_CLASS);
        }
    });
}
