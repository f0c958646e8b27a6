// page.rs — the element tree the renderers write into
//
// A small stand-in for the browser DOM: enough structure for text bindings
// (data-key), id lookup, class toggling, and HTML serialization. All text
// and attribute values are escaped on serialization, so document content can
// never smuggle markup into a page.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub content_key: Option<String>,
    pub classes: Vec<String>,
    pub href: Option<String>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Tag this element with a content key (the data-key attribute).
    pub fn with_key(mut self, key: &str) -> Self {
        self.content_key = Some(key.to_owned());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_owned());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// classList.add semantics: a class is present at most once per element.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn visit_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }
}

fn find_by_id_mut<'a>(el: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if el.id.as_deref() == Some(id) {
        return Some(el);
    }
    for child in &mut el.children {
        if let Some(found) = find_by_id_mut(child, id) {
            return Some(found);
        }
    }
    None
}

/// One page of the site: its URL path plus the element tree.
#[derive(Debug, Clone)]
pub struct Page {
    pub path: String,
    pub root: Element,
}

impl Page {
    pub fn new(path: &str, root: Element) -> Self {
        Self {
            path: path.to_owned(),
            root,
        }
    }

    /// First element with the given id, depth-first.
    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_by_id_mut(&mut self.root, id)
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        fn find<'a>(el: &'a Element, id: &str) -> Option<&'a Element> {
            if el.id.as_deref() == Some(id) {
                return Some(el);
            }
            el.children.iter().find_map(|child| find(child, id))
        }
        find(&self.root, id)
    }

    /// Depth-first visit of every element, parents before children.
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        self.root.visit_mut(f);
    }

    /// Every anchor element at or below a `nav` element.
    pub fn for_each_nav_link_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        fn walk(el: &mut Element, in_nav: bool, f: &mut impl FnMut(&mut Element)) {
            let in_nav = in_nav || el.tag == "nav";
            if in_nav && el.tag == "a" {
                f(el);
            }
            for child in &mut el.children {
                walk(child, in_nav, f);
            }
        }
        walk(&mut self.root, false, f);
    }

    /// Serialize the tree. Text and attribute values come out escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&self.root, &mut out);
        out
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    if let Some(id) = &el.id {
        push_attr(out, "id", id);
    }
    if let Some(key) = &el.content_key {
        push_attr(out, "data-key", key);
    }
    if !el.classes.is_empty() {
        push_attr(out, "class", &el.classes.join(" "));
    }
    if let Some(href) = &el.href {
        push_attr(out, "href", href);
    }
    out.push('>');
    out.push_str(&escape_text(&el.text));
    for child in &el.children {
        write_element(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
