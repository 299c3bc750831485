/// Persisted visual mode. Stored as `""`, `"light"` or `"dark"`; anything
/// else reads back as `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Unset,
    Light,
    Dark,
}

impl Theme {
    /// Toggle order: unset → dark → light → unset.
    pub fn cycle(self) -> Self {
        match self {
            Theme::Unset => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Unset,
        }
    }

    /// String form used in the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Unset => "",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Human-readable name for display.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Unset => "unset",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::Unset,
        }
    }
}
