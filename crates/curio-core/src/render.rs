//! Card rendering: matching items to an HTML grid fragment.
//!
//! All interpolated text goes through [`escape`], for attribute values as
//! well as text content, so an item whose fields contain markup renders as
//! literal entities.

use std::io::Write;

use crate::Item;

/// Image path substituted when an item carries none.
pub const PLACEHOLDER_IMAGE: &str = "assets/placeholder.svg";

/// HTML-entity escaping for `&`, `<`, `>`, `"` and `'`. One routine for
/// both text and attribute contexts; attribute values need at least the
/// double quote, and the full set is a superset of that.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A fully rendered grid. `is_empty` drives the empty-state indicator and
/// is the exact negation of "any item matched".
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub html: String,
    pub is_empty: bool,
}

/// Output seam for rendered grids, so rendering is testable on strings
/// rather than a live display.
pub trait RenderTarget {
    fn present(&mut self, grid: &Grid) -> anyhow::Result<()>;
}

/// Keeps the last presented grid in memory.
#[derive(Debug, Default)]
pub struct StringTarget {
    pub html: String,
    pub empty_state: bool,
}

impl RenderTarget for StringTarget {
    fn present(&mut self, grid: &Grid) -> anyhow::Result<()> {
        self.html = grid.html.clone();
        self.empty_state = grid.is_empty;
        Ok(())
    }
}

/// Writes grid markup to any `io::Write` sink.
pub struct WriterTarget<W: Write> {
    w: W,
}

impl<W: Write> WriterTarget<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> RenderTarget for WriterTarget<W> {
    fn present(&mut self, grid: &Grid) -> anyhow::Result<()> {
        self.w.write_all(grid.html.as_bytes())?;
        Ok(())
    }
}

/// One `<article class="card">` fragment for an item.
pub fn card(item: &Item, placeholder: &str) -> String {
    let image = item
        .image
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(placeholder);

    let mut body = String::new();
    body.push_str(&format!(
        "<h2 class=\"title\">{}</h2>\n",
        escape(&item.name)
    ));

    // Subtitle is omitted entirely when brand and model are both absent.
    let subtitle: Vec<&str> = [item.brand.as_deref(), item.model.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if !subtitle.is_empty() {
        body.push_str(&format!(
            "<div class=\"brand\">{}</div>\n",
            escape(&subtitle.join(" · "))
        ));
    }

    if let Some(notes) = item.notes.as_deref().filter(|s| !s.is_empty()) {
        body.push_str(&format!("<p class=\"notes\">{}</p>\n", escape(notes)));
    }

    if !item.tags.is_empty() {
        let badges: String = item
            .tags
            .iter()
            .map(|t| format!("<span class=\"tag\">{}</span>", escape(t)))
            .collect();
        body.push_str(&format!("<div class=\"tags\">{}</div>\n", badges));
    }

    if !item.links.is_empty() {
        let anchors: String = item.links.iter().map(link).collect();
        body.push_str(&format!("<div class=\"links\">{}</div>\n", anchors));
    }

    format!(
        "<article class=\"card\">\n<div class=\"media\">\n<img src=\"{}\" alt=\"{}\" loading=\"lazy\" />\n</div>\n<div class=\"body\">\n{}</div>\n</article>\n",
        escape(image),
        escape(&item.name),
        body
    )
}

// Outbound reference: opens in a new context with no-referrer/no-opener
// isolation.
fn link(l: &crate::Link) -> String {
    let label = l.label.as_deref().filter(|s| !s.is_empty()).unwrap_or("Link");
    let url = l.url.as_deref().filter(|s| !s.is_empty()).unwrap_or("#");
    format!(
        "<a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{} ↗</a>",
        escape(url),
        escape(label)
    )
}

/// Renders the full replacement content for the grid container.
pub fn render_grid(items: &[&Item], placeholder: &str) -> Grid {
    let mut html = String::new();
    for it in items {
        html.push_str(&card(it, placeholder));
    }
    Grid {
        html,
        is_empty: items.is_empty(),
    }
}
