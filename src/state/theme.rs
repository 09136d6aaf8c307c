#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light/dark visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable string form used for the document attribute and storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `"light"` / `"dark"` is treated
    /// as no stored preference.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Icon class for the toggle control. The icon shows the mode a click
    /// would switch *to*: a sun while dark, a moon while light.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "bi bi-sun-fill",
            Self::Light => "bi bi-moon-fill",
        }
    }

    /// Accessible label for the toggle control, describing the next state.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

/// Resolved theme preference plus whether it came from an explicit choice.
///
/// Resolution priority is stored choice, then OS preference, then light.
/// Only explicit choices are sticky: while the preference is OS-derived,
/// later OS changes keep flowing through; after a toggle (or a stored
/// value) they are ignored.
#[derive(Clone, Debug)]
pub struct ThemeModel {
    applied: Theme,
    explicit: bool,
}

impl ThemeModel {
    /// Resolve the initial theme from the stored value and the OS signal.
    #[must_use]
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => Self { applied: theme, explicit: true },
            None => Self {
                applied: Theme::from_prefers_dark(system_prefers_dark),
                explicit: false,
            },
        }
    }

    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    /// Whether the applied theme should be persisted.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Explicit choice; from here on OS preference changes are ignored.
    pub fn set(&mut self, theme: Theme) {
        self.applied = theme;
        self.explicit = true;
    }

    /// Explicit toggle to the inverse theme; returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.applied.toggled();
        self.set(next);
        next
    }

    /// OS preference change. Returns the theme to apply, or `None` when an
    /// explicit choice exists and the event must be ignored.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        self.applied = Theme::from_prefers_dark(prefers_dark);
        Some(self.applied)
    }
}
