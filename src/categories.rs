//! Category registry and saved categorizations.
//!
//! A [`Layout`] is the ordered list of categories a book is bound from. It can
//! be built by classifying a directory listing, read back from the JSON file a
//! previous `categorize` run wrote, or recovered from the landing page's
//! navigation (see `navigation`).
//!
//! The JSON file is an object keyed by category key:
//!
//! ```json
//! { "start": { "name": "...", "description": "...", "files": [{ "filename": "...", "title": "..." }], "priority": 1 } }
//! ```

use crate::classify::{classify, CategoryKey};
use crate::ordering::{sort_documents, Ordered};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;

/// A page that has been placed in a category but not yet loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub filename: String,
    pub title: String,
}

impl DocumentEntry {
    pub fn new<F: ToString, T: ToString>(filename: F, title: T) -> DocumentEntry {
        DocumentEntry {
            filename: filename.to_string(),
            title: title.to_string(),
        }
    }
}

impl Ordered for DocumentEntry {
    fn filename(&self) -> &str {
        &self.filename
    }
    fn title(&self) -> &str {
        &self.title
    }
}

/// A named section of the book and the documents in it, in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category<D = DocumentEntry> {
    pub key: String,
    pub name: String,
    pub description: String,
    /// Lower numbers come first, both in the table of contents and the body
    pub priority: u32,
    /// Kept out of the main navigation; only affects the summary
    pub hidden: bool,
    pub documents: Vec<D>,
}

impl<D> Category<D> {
    /// Same category metadata, different documents.
    pub fn with_documents<E>(&self, documents: Vec<E>) -> Category<E> {
        Category {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            priority: self.priority,
            hidden: self.hidden,
            documents,
        }
    }
}

struct Definition {
    key: CategoryKey,
    name: &'static str,
    description: &'static str,
    priority: u32,
    hidden: bool,
}

const REGISTRY: &[Definition] = &[
    Definition {
        key: CategoryKey::Start,
        name: "🎯 Start Here",
        description: "New to Care Commons? Begin here",
        priority: 1,
        hidden: false,
    },
    Definition {
        key: CategoryKey::Using,
        name: "📖 Using Care Commons",
        description: "Feature guides organized by what you want to do",
        priority: 2,
        hidden: false,
    },
    Definition {
        key: CategoryKey::Deployment,
        name: "🚀 Deployment & Setup",
        description: "Get Care Commons running",
        priority: 3,
        hidden: false,
    },
    Definition {
        key: CategoryKey::Reference,
        name: "📚 Technical Reference",
        description: "Architecture, APIs, and compliance details",
        priority: 4,
        hidden: false,
    },
    Definition {
        key: CategoryKey::Operations,
        name: "⚙️ Operations",
        description: "Monitoring, backups, and troubleshooting",
        priority: 5,
        hidden: false,
    },
    Definition {
        key: CategoryKey::Developer,
        name: "👨‍💻 Developer Docs",
        description: "Contributing and development (hidden from main nav)",
        priority: 6,
        hidden: true,
    },
];

/// Every registered category, empty, in priority order.
pub fn registry() -> Vec<Category> {
    REGISTRY
        .iter()
        .map(|def| Category {
            key: def.key.key().to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            priority: def.priority,
            hidden: def.hidden,
            documents: Vec::new(),
        })
        .collect()
}

/// The ordered categories a book is bound from.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub categories: Vec<Category>,
}

impl Layout {
    /// Build a layout from categories, putting them in priority order.
    pub fn new(mut categories: Vec<Category>) -> Layout {
        categories.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.key.cmp(&b.key)));
        Layout { categories }
    }

    /// Classify every entry into the registry and order each category.
    pub fn classify(entries: Vec<DocumentEntry>) -> Layout {
        let mut categories = registry();
        for entry in entries {
            let key = classify(&entry.filename, &entry.title);
            log::debug!("{} -> {key}", entry.filename);
            // every key has a registry entry
            if let Some(category) = categories.iter_mut().find(|c| c.key == key.key()) {
                category.documents.push(entry);
            }
        }
        for category in categories.iter_mut() {
            sort_documents(&mut category.documents);
        }
        Layout::new(categories)
    }

    pub fn document_count(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }

    /// Read a categorization written by [`Layout::save`].
    pub fn load(path: &Path) -> Result<Layout> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read categorization {}", path.display()))?;
        Layout::from_json(&contents)
            .with_context(|| format!("Failed to parse categorization {}", path.display()))
    }

    pub fn from_json(contents: &str) -> Result<Layout> {
        let records: BTreeMap<String, CategoryRecord> = serde_json::from_str(contents)?;
        let categories = records
            .into_iter()
            .map(|(key, record)| Category {
                key,
                name: record.name,
                description: record.description,
                priority: record.priority,
                hidden: record.hidden,
                documents: record.files,
            })
            .collect();
        Ok(Layout::new(categories))
    }

    /// Write the categorization as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize categories")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write categorization {}", path.display()))
    }
}

#[derive(Deserialize)]
struct CategoryRecord {
    name: String,
    description: String,
    files: Vec<DocumentEntry>,
    priority: u32,
    #[serde(default)]
    hidden: bool,
}

#[derive(Serialize)]
struct CategoryRecordRef<'a> {
    name: &'a str,
    description: &'a str,
    files: &'a [DocumentEntry],
    priority: u32,
    hidden: bool,
}

// keyed by category key, in priority order
impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.categories.iter().map(|c| {
            (
                c.key.as_str(),
                CategoryRecordRef {
                    name: &c.name,
                    description: &c.description,
                    files: &c.documents,
                    priority: c.priority,
                    hidden: c.hidden,
                },
            )
        }))
    }
}
