// render.rs — fills a page from a content document
//
// One render pass serves every page of the site, and each page carries a
// different subset of the ids and keys below. A missing element, a missing
// document entry, or an entry of the wrong shape skips quietly.

use crate::content::{ContentDocument, Project};
use crate::locale::Locale;
use crate::page::{Element, Page};
use log::debug;

/// List sections rendered on the index-style pass.
pub const LIST_SECTIONS: [&str; 5] = [
    "skills_backend",
    "skills_frontend",
    "skills_infrastructure",
    "skills_industrial",
    "about_highlights",
];

/// Container id of the project card grid.
pub const PROJECT_GRID_ID: &str = "projects";

/// Composite index-style render: text bindings, the list sections, and the
/// project grid.
pub fn render_page(page: &mut Page, doc: &ContentDocument) {
    apply_text_bindings(page, doc);
    for section in LIST_SECTIONS {
        render_list(page, section, doc.list(section).as_deref());
    }
    render_project_grid(page, PROJECT_GRID_ID, &doc.projects);
}

/// Set the text of every element whose content key has a string entry in the
/// document. An empty string binds like any other; entries of a different
/// shape and missing keys leave the element untouched.
pub fn apply_text_bindings(page: &mut Page, doc: &ContentDocument) {
    page.for_each_mut(&mut |el| {
        if let Some(key) = el.content_key.as_deref() {
            if let Some(value) = doc.text(key) {
                el.text = value.to_owned();
            }
        }
    });
}

/// Clear the container and append one `li` per item, in source order.
/// No container or no entry (`None`) is a no-op; an empty slice just clears.
pub fn render_list(page: &mut Page, section_id: &str, items: Option<&[&str]>) {
    let Some(items) = items else { return };
    let Some(container) = page.by_id_mut(section_id) else {
        return;
    };

    container.children.clear();
    for item in items {
        container.children.push(Element::new("li").with_text(item));
    }
}

/// Rebuild the project grid: one link-card per project, in document order.
/// Cards are built element-by-element so titles and descriptions stay text.
pub fn render_project_grid(page: &mut Page, container_id: &str, projects: &[Project]) {
    if projects.is_empty() {
        return;
    }
    let Some(container) = page.by_id_mut(container_id) else {
        return;
    };

    container.children.clear();
    for project in projects {
        container.children.push(project_card(project));
    }
    debug!("rendered {} project cards", projects.len());
}

fn project_card(project: &Project) -> Element {
    Element::new("a")
        .with_class("card")
        .with_href(&format!("/projects/{}", project.id))
        .with_child(Element::new("h3").with_text(&project.title))
        .with_child(Element::new("p").with_text(&project.desc))
        .with_child(Element::new("small").with_text(&project.stack))
}

/// Write the uppercase locale code into the switcher label, if this page has
/// one.
pub fn update_lang_label(page: &mut Page, locale: Locale) {
    if let Some(label) = page.by_id_mut("lang-label") {
        label.text = locale.label().to_owned();
    }
}
