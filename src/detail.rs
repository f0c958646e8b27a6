// detail.rs — per-project detail page fill

use crate::content::ContentDocument;
use crate::page::Page;
use log::debug;

/// Last non-empty path segment, with query and fragment dropped.
/// `/projects/x/` yields "x"; `/` yields None.
pub fn project_id_from_path(path: &str) -> Option<&str> {
    let end = path.find(|c| c == '?' || c == '#').unwrap_or(path.len());
    path[..end].rsplit('/').find(|segment| !segment.is_empty())
}

/// Fill the detail elements from the project matching the page path. A page
/// without an id, or an id no record carries, changes nothing: a stale
/// public link shows the page's initial markup.
pub fn load_project_detail(page: &mut Page, doc: &ContentDocument) {
    let Some(id) = project_id_from_path(&page.path) else {
        return;
    };
    let Some(project) = doc.project(id) else {
        debug!("no project record for id '{id}'");
        return;
    };

    let fields = [
        ("project-title", project.title.clone()),
        ("project-details", project.details.clone()),
        ("project-stack", project.stack.clone()),
    ];
    for (element_id, value) in fields {
        if let Some(el) = page.by_id_mut(element_id) {
            el.text = value;
        }
    }
}
