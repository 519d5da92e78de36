use std::fmt;

use crate::config::THEME_KEY;
use crate::errors::StoreError;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown names fall back to [`Theme::Light`].
    pub fn from_name(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The persisted preference, if one was ever stored.
    pub fn load<S: KeyValueStore>(store: &S) -> Option<Self> {
        store.get(THEME_KEY).map(|name| Self::from_name(&name))
    }

    pub fn persist<S: KeyValueStore>(self, store: &S) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_toggle_survives_reload() {
        let store = MemoryStore::new();
        let theme = Theme::load(&store).unwrap_or_default();
        assert_eq!(theme, Theme::Light);

        let toggled = theme.toggled();
        toggled.persist(&store).unwrap();

        // A reload reads the same storage from scratch.
        let reloaded = Theme::load(&store.clone());
        assert_eq!(reloaded, Some(Theme::Dark));

        reloaded.unwrap().toggled().persist(&store).unwrap();
        assert_eq!(Theme::load(&store), Some(Theme::Light));
    }

    #[test]
    fn test_unknown_name_is_light() {
        assert_eq!(Theme::from_name("sepia"), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
    }

    #[test]
    fn test_nothing_persisted() {
        assert_eq!(Theme::load(&MemoryStore::new()), None);
    }
}
