use std::fmt;
use std::path::PathBuf;

use reqwest::header::CACHE_CONTROL;
use thiserror::Error;

use crate::Item;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not a valid JSON item array: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog JSON lives: an http(s) URL or a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Source::Url(s.to_string())
        } else {
            Source::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(u) => f.write_str(u),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// One-shot retrieval of the catalog. HTTP requests carry
/// `Cache-Control: no-store` so no intermediate cache is reused; file
/// reads are inherently fresh. No retry, no reload.
pub fn load(source: &Source) -> Result<Vec<Item>, CatalogError> {
    let body = match source {
        Source::Url(url) => {
            let client = reqwest::blocking::Client::new();
            client
                .get(url)
                .header(CACHE_CONTROL, "no-store")
                .send()?
                .error_for_status()?
                .text()?
        }
        Source::File(path) => std::fs::read_to_string(path)?,
    };
    Ok(serde_json::from_str(&body)?)
}

/// Load policy for startup: any failure is logged and an empty catalog is
/// substituted, so the rest of the pipeline runs normally (empty grid,
/// empty-state indicator shown).
pub fn load_or_empty(source: &Source) -> Vec<Item> {
    match load(source) {
        Ok(items) => {
            tracing::debug!(count = items.len(), %source, "catalog loaded");
            items
        }
        Err(e) => {
            tracing::error!(%source, error = %e, "failed to load catalog, continuing with an empty one");
            Vec::new()
        }
    }
}
