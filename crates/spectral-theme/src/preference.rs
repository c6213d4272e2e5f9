use crate::{
    ThemeError, config::ThemeConfig, css::generate_theme_css, registry::ThemeRegistry,
    theme::ThemeDefinition,
};
use std::collections::BTreeMap;
use tracing::debug;

///
/// PreferenceStore
///
/// Client-side string storage (a browser's local storage, a settings file).
///

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

///
/// MemoryPreferenceStore
///

#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

///
/// StyleSheet
///
/// The single style slot themes are written into, plus the value of the
/// document's `data-theme` attribute. Applying a theme replaces both.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyleSheet {
    pub css: String,
    pub data_theme: String,
}

impl StyleSheet {
    fn apply(&mut self, theme: &ThemeDefinition) {
        self.css = generate_theme_css(theme);
        self.data_theme.clone_from(&theme.id);
    }
}

///
/// ThemeSelector
///
/// Resolves the stored preference on construction, then applies and
/// persists each selection.
///

#[derive(Debug)]
pub struct ThemeSelector<'r, S> {
    registry: &'r ThemeRegistry,
    store: S,
    storage_key: String,
    active: &'r ThemeDefinition,
    sheet: StyleSheet,
}

impl<'r, S: PreferenceStore> ThemeSelector<'r, S> {
    pub fn new(registry: &'r ThemeRegistry, store: S, config: &ThemeConfig) -> Self {
        let stored = store.get(&config.storage_key);
        let active = registry.resolve(stored.as_deref());

        if let Some(stored) = stored.as_deref()
            && stored != active.id
        {
            debug!(stored, fallback = %active.id, "stored theme not found; using default");
        }

        let mut sheet = StyleSheet::default();
        sheet.apply(active);

        Self {
            registry,
            store,
            storage_key: config.storage_key.clone(),
            active,
            sheet,
        }
    }

    #[must_use]
    pub const fn active(&self) -> &'r ThemeDefinition {
        self.active
    }

    #[must_use]
    pub const fn style_sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Switch to `id` and remember it. Unknown ids leave everything as is.
    pub fn select(&mut self, id: &str) -> Result<&'r ThemeDefinition, ThemeError> {
        let registry = self.registry;
        let theme = registry.require(id)?;

        self.sheet.apply(theme);
        self.store.set(&self.storage_key, &theme.id);
        self.active = theme;
        debug!(theme = %theme.id, "theme selected");

        Ok(theme)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{CURSED_ARENA, HAUNTED_CLINIC};

    fn registry() -> ThemeRegistry {
        ThemeRegistry::builtin(&ThemeConfig::default()).unwrap()
    }

    #[test]
    fn starts_from_stored_preference() {
        let registry = registry();
        let store = MemoryPreferenceStore::new().with("spectral-theme", HAUNTED_CLINIC);
        let selector = ThemeSelector::new(&registry, store, &ThemeConfig::default());

        assert_eq!(selector.active().id, HAUNTED_CLINIC);
        assert_eq!(selector.style_sheet().data_theme, HAUNTED_CLINIC);
        assert!(
            selector
                .style_sheet()
                .css
                .starts_with(":root {\n  --theme-id: haunted-clinic;\n")
        );
    }

    #[test]
    fn unknown_stored_id_falls_back_without_persisting() {
        let registry = registry();
        let mut store = MemoryPreferenceStore::new().with("spectral-theme", "vaporwave");
        let selector = ThemeSelector::new(&registry, &mut store, &ThemeConfig::default());

        assert_eq!(selector.active().id, CURSED_ARENA);
        drop(selector);
        assert_eq!(store.get("spectral-theme").as_deref(), Some("vaporwave"));
    }

    #[test]
    fn select_applies_and_persists() {
        let registry = registry();
        let config = ThemeConfig {
            storage_key: "arena.theme".into(),
            ..ThemeConfig::default()
        };
        let mut selector = ThemeSelector::new(&registry, MemoryPreferenceStore::new(), &config);

        let theme = selector.select(HAUNTED_CLINIC).unwrap();
        assert_eq!(theme.name, "Haunted Clinic");
        assert_eq!(selector.style_sheet().data_theme, HAUNTED_CLINIC);
        assert_eq!(
            selector.store().get("arena.theme").as_deref(),
            Some(HAUNTED_CLINIC)
        );
    }

    #[test]
    fn select_unknown_keeps_current_theme() {
        let registry = registry();
        let mut selector =
            ThemeSelector::new(&registry, MemoryPreferenceStore::new(), &ThemeConfig::default());
        let before = selector.style_sheet().clone();

        let err = selector.select("vaporwave").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(_)));
        assert_eq!(selector.active().id, CURSED_ARENA);
        assert_eq!(selector.style_sheet(), &before);
        assert_eq!(selector.store().get("spectral-theme"), None);
    }
}
