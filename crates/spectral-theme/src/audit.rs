//! Fixed contrast battery run over every theme.
//!
//! Seventeen checks per theme: each text tier on each background tier,
//! both accents and all four status colors on the primary background, and
//! primary-background text on each accent (filled buttons). Accents and
//! status colors are UI indicators and use the large-text threshold.

use crate::{
    color::{ColorError, Rgb},
    config::ThemeConfig,
    contrast::{AA_LARGE, AA_NORMAL, contrast_ratio},
    registry::ThemeRegistry,
    theme::ThemeDefinition,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

///
/// ContrastCheck
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    pub label: String,
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub large_text: bool,
    pub passes: bool,
}

impl ContrastCheck {
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        if self.large_text { AA_LARGE } else { AA_NORMAL }
    }
}

///
/// ColorDiagnostic
///
/// A palette color that did not parse. Its checks ran against black.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ColorDiagnostic {
    pub path: String,
    pub value: String,

    #[serde(serialize_with = "serialize_display")]
    pub error: ColorError,
}

///
/// ThemeReport
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeReport {
    pub theme_id: String,
    pub passes: bool,
    pub checks: Vec<ContrastCheck>,
    pub failures: Vec<String>,
    pub diagnostics: Vec<ColorDiagnostic>,
}

/// Run the battery with unparseable colors reported as diagnostics only.
#[must_use]
pub fn validate_theme(theme: &ThemeDefinition) -> ThemeReport {
    run(theme, false)
}

/// Run the battery under `config`; with `strict_colors` every diagnostic
/// is also a failure.
#[must_use]
pub fn audit_theme(theme: &ThemeDefinition, config: &ThemeConfig) -> ThemeReport {
    run(theme, config.strict_colors)
}

/// Audit every registered theme, in id order.
#[must_use]
pub fn audit_all(registry: &ThemeRegistry, config: &ThemeConfig) -> Vec<ThemeReport> {
    registry
        .iter()
        .map(|theme| {
            let report = audit_theme(theme, config);
            if !report.passes {
                info!(
                    theme = %report.theme_id,
                    failures = report.failures.len(),
                    "theme failed contrast audit"
                );
            }

            report
        })
        .collect()
}

fn run(theme: &ThemeDefinition, strict_colors: bool) -> ThemeReport {
    let mut palette = Palette::default();
    let colors = &theme.colors;
    let bg = &colors.bg;

    let mut pairs: Vec<((String, &str), (String, &str), bool)> = Vec::new();
    for (text_tier, text) in colors.text.tiers() {
        for (bg_tier, bg) in bg.tiers() {
            pairs.push((
                (format!("text.{text_tier}"), text),
                (format!("bg.{bg_tier}"), bg),
                false,
            ));
        }
    }

    let bg_primary = ("bg.primary".to_string(), bg.primary.as_str());
    let accents = [
        ("accent.primary".to_string(), colors.accent.primary.as_str()),
        ("accent.secondary".to_string(), colors.accent.secondary.as_str()),
    ];
    for accent in &accents {
        pairs.push((accent.clone(), bg_primary.clone(), true));
    }
    for (name, value) in colors.status.entries() {
        pairs.push(((format!("status.{name}"), value), bg_primary.clone(), true));
    }
    for accent in accents {
        pairs.push((bg_primary.clone(), accent, false));
    }

    let checks: Vec<ContrastCheck> = pairs
        .into_iter()
        .map(|((fg_path, fg), (bg_path, bg), large_text)| {
            let ratio = contrast_ratio(palette.get(&fg_path, fg), palette.get(&bg_path, bg));
            let threshold = if large_text { AA_LARGE } else { AA_NORMAL };

            ContrastCheck {
                label: format!("{fg_path} on {bg_path}"),
                foreground: fg.to_string(),
                background: bg.to_string(),
                ratio,
                large_text,
                passes: ratio >= threshold,
            }
        })
        .collect();

    let mut failures: Vec<String> = checks
        .iter()
        .filter(|c| !c.passes)
        .map(|c| format!("{}: {:.2}:1 (needs {}:1)", c.label, c.ratio, c.threshold()))
        .collect();

    let diagnostics = palette.into_diagnostics();
    if strict_colors {
        failures.extend(diagnostics.iter().map(|d| format!("{}: {}", d.path, d.error)));
    }

    ThemeReport {
        theme_id: theme.id.clone(),
        passes: failures.is_empty(),
        checks,
        failures,
        diagnostics,
    }
}

///
/// Palette
///
/// Parse cache so each bad color is diagnosed once however many checks
/// use it.
///

#[derive(Default)]
struct Palette {
    parsed: BTreeMap<String, Rgb>,
    diagnostics: Vec<ColorDiagnostic>,
}

impl Palette {
    fn get(&mut self, path: &str, value: &str) -> Rgb {
        if let Some(rgb) = self.parsed.get(path) {
            return *rgb;
        }

        let rgb = Rgb::parse(value).unwrap_or_else(|error| {
            warn!(path, value, %error, "unrecognized theme color; treating as black");
            self.diagnostics.push(ColorDiagnostic {
                path: path.to_string(),
                value: value.to_string(),
                error,
            });

            Rgb::BLACK
        });
        self.parsed.insert(path.to_string(), rgb);

        rgb
    }

    fn into_diagnostics(self) -> Vec<ColorDiagnostic> {
        self.diagnostics
    }
}

fn serialize_display<S: serde::Serializer>(
    value: &ColorError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

///
/// TESTS
///
