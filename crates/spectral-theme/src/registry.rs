use crate::{ThemeError, builtin, config::ThemeConfig, theme::ThemeDefinition};
use std::collections::BTreeMap;
use tracing::debug;

///
/// ThemeRegistry
///
/// Themes keyed by id, loaded once. The default theme is always present.
///

#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, ThemeDefinition>,
    default_id: String,
}

impl ThemeRegistry {
    pub fn from_themes(
        themes: impl IntoIterator<Item = ThemeDefinition>,
        default_id: impl Into<String>,
    ) -> Result<Self, ThemeError> {
        let mut map = BTreeMap::new();
        for theme in themes {
            if theme.id.trim().is_empty() {
                return Err(ThemeError::EmptyId);
            }
            if map.contains_key(&theme.id) {
                return Err(ThemeError::DuplicateTheme(theme.id));
            }
            debug!(theme = %theme.id, "registered theme");
            map.insert(theme.id.clone(), theme);
        }

        let default_id = default_id.into();
        if !map.contains_key(&default_id) {
            return Err(ThemeError::UnknownDefault(default_id));
        }

        Ok(Self {
            themes: map,
            default_id,
        })
    }

    /// The builtin themes with the configured default.
    pub fn builtin(config: &ThemeConfig) -> Result<Self, ThemeError> {
        Self::from_themes(builtin::builtin_themes(), config.default_theme.clone())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ThemeDefinition> {
        self.themes.get(id)
    }

    pub fn require(&self, id: &str) -> Result<&ThemeDefinition, ThemeError> {
        self.get(id)
            .ok_or_else(|| ThemeError::UnknownTheme(id.to_string()))
    }

    #[must_use]
    pub fn default_theme(&self) -> &ThemeDefinition {
        // present by construction
        &self.themes[&self.default_id]
    }

    /// Look up `id`, falling back to the default when it is absent or unknown.
    #[must_use]
    pub fn resolve(&self, id: Option<&str>) -> &ThemeDefinition {
        id.and_then(|id| self.get(id))
            .unwrap_or_else(|| self.default_theme())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeDefinition> {
        self.themes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

///
/// TESTS
///
