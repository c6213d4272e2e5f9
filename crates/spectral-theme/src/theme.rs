use serde::{Deserialize, Serialize};

///
/// ThemeDefinition
///
/// Palette, animation timing and effect flags for one skin, keyed by a
/// stable `id`. Themes are static data; switching themes swaps the active
/// reference and never edits a palette.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDefinition {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
    pub animations: ThemeAnimations,
    pub effects: ThemeEffects,
}

///
/// ThemeColors
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    pub bg: ColorTiers,
    pub text: ColorTiers,
    pub accent: AccentColors,
    pub status: StatusColors,
}

impl ThemeColors {
    /// Every palette color as `(path segments, value)`, in declaration order.
    #[must_use]
    pub fn entries(&self) -> Vec<([&'static str; 2], &str)> {
        let mut out = self.bg.grouped("bg");
        out.extend(self.text.grouped("text"));
        out.extend([
            (["accent", "primary"], self.accent.primary.as_str()),
            (["accent", "secondary"], self.accent.secondary.as_str()),
            (["accent", "glow"], self.accent.glow.as_str()),
        ]);
        out.extend(
            self.status
                .entries()
                .into_iter()
                .map(|(name, value)| (["status", name], value)),
        );

        out
    }
}

///
/// ColorTiers
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ColorTiers {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl ColorTiers {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: tertiary.into(),
        }
    }

    fn grouped(&self, group: &'static str) -> Vec<([&'static str; 2], &str)> {
        self.tiers()
            .into_iter()
            .map(|(name, value)| ([group, name], value))
            .collect()
    }

    /// `(tier name, color)` from primary to tertiary.
    #[must_use]
    pub fn tiers(&self) -> [(&'static str, &str); 3] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("tertiary", self.tertiary.as_str()),
        ]
    }
}

///
/// AccentColors
///
/// `glow` is decorative (shadows, halos) and never carries text.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccentColors {
    pub primary: String,
    pub secondary: String,
    pub glow: String,
}

///
/// StatusColors
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatusColors {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl StatusColors {
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
            ("info", self.info.as_str()),
        ]
    }
}

///
/// ThemeAnimations
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeAnimations {
    pub duration: AnimationDurations,
    pub easing: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<String>,
}

impl ThemeAnimations {
    /// Named animations the theme provides, in a fixed order.
    #[must_use]
    pub fn named(&self) -> Vec<(&'static str, &str)> {
        [
            ("hover", &self.hover),
            ("loading", &self.loading),
            ("entrance", &self.entrance),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

///
/// AnimationDurations
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationDurations {
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

///
/// ThemeEffects
///
/// Intensities are `0.0..=1.0`; absent values render as `0.5`.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeEffects {
    pub shadows: bool,
    pub glows: bool,
    pub blur: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_intensity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_intensity: Option<f64>,
}

impl ThemeEffects {
    pub const DEFAULT_INTENSITY: f64 = 0.5;

    #[must_use]
    pub fn shadow_intensity(&self) -> f64 {
        self.shadow_intensity.unwrap_or(Self::DEFAULT_INTENSITY)
    }

    #[must_use]
    pub fn glow_intensity(&self) -> f64 {
        self.glow_intensity.unwrap_or(Self::DEFAULT_INTENSITY)
    }
}
