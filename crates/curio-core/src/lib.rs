//! curio-core: catalog model, filter engine, and HTML card rendering

use serde::{Deserialize, Serialize};

pub mod filter;
pub mod loader;
pub mod render;
pub mod theme;

pub use filter::Filter;
pub use loader::{CatalogError, Source};
pub use theme::Theme;

/// One catalog record. Fields other than `name` are optional; the catalog
/// file is taken as-is and malformed text is handled by escaping at render
/// time, not by validation here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Item {
    /// Space-joined haystack for substring search: name, brand, model,
    /// notes, and tags. Absent or empty fields contribute nothing (no
    /// placeholder separators).
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.push(&self.name);
        parts.extend(self.brand.as_deref());
        parts.extend(self.model.as_deref());
        parts.extend(self.notes.as_deref());
        parts.extend(self.tags.iter().map(String::as_str));
        parts.retain(|s| !s.is_empty());
        parts.join(" ")
    }
}

/// Distinct tag labels across all items, lexicographically sorted.
pub fn tag_index(items: &[Item]) -> Vec<String> {
    let mut tags: Vec<String> = items
        .iter()
        .flat_map(|it| it.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Browsing state for one loaded catalog: the immutable item list, the
/// current filter, and the matching view (as indices into `items`). The
/// view is recomputed in full on every filter change, never patched.
#[derive(Debug, Clone)]
pub struct Session {
    items: Vec<Item>,
    tags: Vec<String>,
    filter: Filter,
    matching: Vec<usize>,
}

impl Session {
    pub fn new(items: Vec<Item>) -> Self {
        let tags = tag_index(&items);
        let matching = (0..items.len()).collect();
        Self {
            items,
            tags,
            filter: Filter::default(),
            matching,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Tag facet values, computed once at construction.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.filter.query = query.into();
        self.refilter();
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.filter.tag = tag;
        self.refilter();
    }

    /// Current matching items, in original catalog order.
    pub fn matches(&self) -> Vec<&Item> {
        self.matching
            .iter()
            .filter_map(|&i| self.items.get(i))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }

    fn refilter(&mut self) {
        self.matching = self.filter.apply_indices(&self.items);
    }
}
