// pages.rs — built-in page templates
//
// The five pages of the site, as bare element trees. The ids and content
// keys used here are the fixed contract the renderers target; text set
// inline is only a placeholder until a content document is applied.

use crate::page::{Element, Page};

fn nav_link(href: &str, key: &str, fallback: &str) -> Element {
    Element::new("a").with_href(href).with_key(key).with_text(fallback)
}

/// Shared chrome: navigation plus the language switcher.
fn shell(path: &str, main: Element) -> Page {
    let nav = Element::new("nav")
        .with_child(nav_link("/", "nav_home", "Главная"))
        .with_child(nav_link("/about", "nav_about", "Обо мне"))
        .with_child(nav_link("/projects", "nav_projects", "Проекты"))
        .with_child(nav_link("/contact", "nav_contact", "Контакты"));
    let switcher = Element::new("button")
        .with_id("lang-toggle")
        .with_child(Element::new("span").with_id("lang-label").with_text("RU"));
    let header = Element::new("header").with_child(nav).with_child(switcher);

    let root = Element::new("body").with_child(header).with_child(main);
    Page::new(path, root)
}

pub fn index() -> Page {
    let hero = Element::new("section")
        .with_class("hero")
        .with_child(Element::new("h1").with_key("hero_title"))
        .with_child(Element::new("p").with_key("hero_subtitle"));
    let grid = Element::new("section")
        .with_child(Element::new("h2").with_key("projects_title"))
        .with_child(Element::new("div").with_id("projects").with_class("grid"));
    shell("/", Element::new("main").with_child(hero).with_child(grid))
}

pub fn about() -> Page {
    let intro = Element::new("section")
        .with_child(Element::new("h1").with_key("about_title"))
        .with_child(Element::new("p").with_key("about_text"))
        .with_child(Element::new("ul").with_id("about_highlights"));

    let skills = Element::new("section")
        .with_child(Element::new("h2").with_key("skills_title"))
        .with_child(skill_group("skills_backend"))
        .with_child(skill_group("skills_frontend"))
        .with_child(skill_group("skills_infrastructure"))
        .with_child(skill_group("skills_industrial"));

    shell(
        "/about",
        Element::new("main").with_child(intro).with_child(skills),
    )
}

fn skill_group(id: &str) -> Element {
    // The heading key is the section id plus a _title suffix.
    Element::new("section")
        .with_child(Element::new("h3").with_key(&format!("{id}_title")))
        .with_child(Element::new("ul").with_id(id))
}

pub fn projects() -> Page {
    let main = Element::new("main")
        .with_child(Element::new("h1").with_key("projects_title"))
        .with_child(Element::new("div").with_id("projects").with_class("grid"));
    shell("/projects", main)
}

pub fn contact() -> Page {
    let main = Element::new("main")
        .with_child(Element::new("h1").with_key("contact_title"))
        .with_child(Element::new("p").with_key("contact_text"))
        .with_child(Element::new("p").with_key("contact_email"));
    shell("/contact", main)
}

/// Detail page for one project; the path carries the id the loader reads
/// back out.
pub fn project_detail(id: &str) -> Page {
    let main = Element::new("main")
        .with_child(Element::new("h1").with_id("project-title"))
        .with_child(Element::new("p").with_id("project-details"))
        .with_child(Element::new("small").with_id("project-stack"));
    shell(&format!("/projects/{id}"), main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_carries_the_language_label() {
        for page in [index(), about(), projects(), contact(), project_detail("x")] {
            assert!(page.by_id("lang-label").is_some(), "page {}", page.path);
        }
    }

    #[test]
    fn about_page_carries_all_list_sections() {
        let page = about();
        for id in crate::render::LIST_SECTIONS {
            if id == "about_highlights" {
                continue;
            }
            assert!(page.by_id(id).is_some(), "missing section {id}");
        }
        assert!(page.by_id("about_highlights").is_some());
    }

    #[test]
    fn detail_page_path_encodes_the_id() {
        let page = project_detail("viewer");
        assert_eq!(page.path, "/projects/viewer");
        assert_eq!(
            crate::detail::project_id_from_path(&page.path),
            Some("viewer")
        );
    }

    #[test]
    fn index_and_projects_pages_have_a_grid() {
        assert!(index().by_id("projects").is_some());
        assert!(projects().by_id("projects").is_some());
    }
}
