// content.rs — localized content documents
//
// One JSON document per locale lives at <content dir>/<locale>.json:
// top-level string entries feed the text bindings, arrays of strings feed
// the list sections, and `projects` holds the project records. Documents are
// loaded fresh on every render pass; nothing is cached between loads.

use crate::error::{Error, Result};
use crate::locale::Locale;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One project. `desc` is the short grid text, `details` the long text shown
/// on its own page; both views share the same record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub stack: String,
}

/// The parsed per-locale document. Ids inside `projects` are expected to be
/// unique; lookup takes the first match and does not enforce it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(flatten)]
    entries: HashMap<String, Value>,
}

impl ContentDocument {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// String entry under `key`. Only genuine strings bind; an empty string
    /// is still a binding, while numbers, booleans, and arrays are not.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Array-of-strings entry under `key`. Entries of any other shape,
    /// including arrays with non-string members, are None.
    pub fn list(&self, key: &str) -> Option<Vec<&str>> {
        let items = self.entries.get(key)?.as_array()?;
        items.iter().map(Value::as_str).collect()
    }

    /// First project whose id matches.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Where the per-locale documents live.
#[derive(Debug, Clone)]
pub struct ContentSource {
    dir: PathBuf,
}

impl ContentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Find static/content by searching:
    /// 1) <exe_dir>/static/content
    /// 2) ./static/content  (dev working dir)
    pub fn discover() -> Self {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let p = dir.join("static").join("content");
                if p.is_dir() {
                    return Self { dir: p };
                }
            }
        }

        Self {
            dir: PathBuf::from("static").join("content"),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn document_path(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.as_str()))
    }

    /// Read and parse the document for `locale`. No retries, no timeout, no
    /// fallback locale.
    pub fn fetch(&self, locale: Locale) -> Result<ContentDocument> {
        let path = self.document_path(locale);
        debug!("loading content document {}", path.display());
        let text =
            fs::read_to_string(&path).map_err(|source| Error::Retrieval { locale, source })?;
        ContentDocument::from_json(&text).map_err(|source| Error::Malformed { locale, source })
    }
}
