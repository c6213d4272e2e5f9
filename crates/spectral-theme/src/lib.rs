//! Theme skins: palette model, color parsing, WCAG contrast auditing, CSS
//! custom-property generation, a theme registry, preference-backed theme
//! selection, and `spectral.toml` configuration.

pub mod audit;
pub mod builtin;
pub mod color;
pub mod config;
pub mod contrast;
pub mod css;
pub mod preference;
pub mod registry;
pub mod theme;

use thiserror::Error as ThisError;

pub use audit::{ThemeReport, audit_all, audit_theme, validate_theme};
pub use color::{ColorError, Rgb};
pub use config::{ConfigError, SpectralConfig, ThemeConfig};
pub use contrast::{calculate_contrast_ratio, meets_wcag_aa};
pub use css::{generate_all_themes_css, generate_theme_css};
pub use registry::ThemeRegistry;
pub use theme::ThemeDefinition;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        audit::{ThemeReport, audit_all, audit_theme, validate_theme},
        config::{SpectralConfig, ThemeConfig},
        contrast::{calculate_contrast_ratio, meets_wcag_aa},
        css::{generate_all_themes_css, generate_theme_css},
        preference::{MemoryPreferenceStore, PreferenceStore, StyleSheet, ThemeSelector},
        registry::ThemeRegistry,
        theme::ThemeDefinition,
    };
}

///
/// ThemeError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ThemeError {
    #[error("theme '{0}' is already registered")]
    DuplicateTheme(String),

    #[error("theme id is empty")]
    EmptyId,

    #[error("default theme '{0}' is not registered")]
    UnknownDefault(String),

    #[error("theme '{0}' not found")]
    UnknownTheme(String),
}
