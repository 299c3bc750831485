use std::path::PathBuf;

use curio_core::Theme;

use crate::config;

/// Preference store for the theme flag: one small state file holding
/// `""`, `"light"` or `"dark"`. Access is best-effort; a missing or
/// unreadable file reads as `Unset` and write failures are ignored.
#[derive(Debug, Clone)]
pub struct ThemeFile {
    path: PathBuf,
}

impl ThemeFile {
    pub fn new() -> Self {
        Self {
            path: config::state_dir().join("theme"),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Theme {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Theme::parse(&s),
            Err(_) => Theme::Unset,
        }
    }

    pub fn store(&self, theme: Theme) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(&self.path, theme.as_str());
    }

    /// Cycle to the next theme and persist it.
    pub fn toggle(&self) -> Theme {
        let next = self.load().cycle();
        self.store(next);
        next
    }
}

impl Default for ThemeFile {
    fn default() -> Self {
        Self::new()
    }
}
