use crate::Item;

/// Current search input: free text plus a single-select tag facet.
///
/// An empty (post-trim) query matches everything; `None` or an empty tag
/// selection matches everything. Both predicates must hold for an item to
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub query: String,
    pub tag: Option<String>,
}

impl Filter {
    pub fn new<S: Into<String>>(query: S, tag: Option<String>) -> Self {
        Self {
            query: query.into(),
            tag,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty() && self.tag.as_deref().unwrap_or("").is_empty()
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.matches_text(item) && self.matches_tag(item)
    }

    // Case-insensitive substring over the joined search text. No
    // tokenization, no fuzzy matching.
    fn matches_text(&self, item: &Item) -> bool {
        let q = self.query.trim().to_lowercase();
        q.is_empty() || item.search_text().to_lowercase().contains(&q)
    }

    // Exact, case-sensitive membership.
    fn matches_tag(&self, item: &Item) -> bool {
        match self.tag.as_deref() {
            None | Some("") => true,
            Some(t) => item.tags.iter().any(|x| x == t),
        }
    }

    /// Matching items in original catalog order (filtering, not sorting).
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|it| self.matches(it)).collect()
    }

    pub(crate) fn apply_indices(&self, items: &[Item]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, it)| self.matches(it))
            .map(|(i, _)| i)
            .collect()
    }
}
