//! Themes shipped with the two demo applications.

use crate::theme::{
    AccentColors, AnimationDurations, ColorTiers, StatusColors, ThemeAnimations, ThemeColors,
    ThemeDefinition, ThemeEffects,
};

pub const CURSED_ARENA: &str = "cursed-arena";
pub const HAUNTED_CLINIC: &str = "haunted-clinic";

/// Neon-on-void esports skin.
#[must_use]
pub fn cursed_arena() -> ThemeDefinition {
    ThemeDefinition {
        id: CURSED_ARENA.to_string(),
        name: "Cursed Arena".to_string(),
        colors: ThemeColors {
            bg: ColorTiers::new("#0b0710", "#150d1f", "#221530"),
            text: ColorTiers::new("#f4ecff", "#c9b8e0", "#a898c0"),
            accent: AccentColors {
                primary: "#ff3864".to_string(),
                secondary: "#2de2e6".to_string(),
                glow: "rgba(255, 56, 100, 0.6)".to_string(),
            },
            status: StatusColors {
                success: "#3ddc84".to_string(),
                warning: "#ffb627".to_string(),
                error: "#ff4d4d".to_string(),
                info: "#4da6ff".to_string(),
            },
        },
        animations: ThemeAnimations {
            duration: AnimationDurations {
                fast: "120ms".to_string(),
                normal: "250ms".to_string(),
                slow: "500ms".to_string(),
            },
            easing: "cubic-bezier(0.68, -0.55, 0.27, 1.55)".to_string(),
            hover: Some("flicker 0.3s ease-in-out".to_string()),
            loading: Some("summon 1.2s linear infinite".to_string()),
            entrance: Some("rise-from-grave 0.6s ease-out".to_string()),
        },
        effects: ThemeEffects {
            shadows: true,
            glows: true,
            blur: false,
            shadow_intensity: None,
            glow_intensity: Some(0.8),
        },
    }
}

/// Sickly-green clinical skin.
#[must_use]
pub fn haunted_clinic() -> ThemeDefinition {
    ThemeDefinition {
        id: HAUNTED_CLINIC.to_string(),
        name: "Haunted Clinic".to_string(),
        colors: ThemeColors {
            bg: ColorTiers::new("#0d1412", "#14201c", "#1c2d27"),
            text: ColorTiers::new("#e6f2ec", "#b5cfc3", "#93b3a5"),
            accent: AccentColors {
                primary: "#7fffd4".to_string(),
                secondary: "#c3a6ff".to_string(),
                glow: "rgba(127, 255, 212, 0.5)".to_string(),
            },
            status: StatusColors {
                success: "#5fd68a".to_string(),
                warning: "#f2c94c".to_string(),
                error: "#ff6b6b".to_string(),
                info: "#6cb8ff".to_string(),
            },
        },
        animations: ThemeAnimations {
            duration: AnimationDurations {
                fast: "150ms".to_string(),
                normal: "300ms".to_string(),
                slow: "600ms".to_string(),
            },
            easing: "ease-in-out".to_string(),
            hover: None,
            loading: Some("heartbeat 1.4s ease-in-out infinite".to_string()),
            entrance: Some("fade-in-mist 0.8s ease".to_string()),
        },
        effects: ThemeEffects {
            shadows: true,
            glows: false,
            blur: true,
            shadow_intensity: Some(0.35),
            glow_intensity: None,
        },
    }
}

#[must_use]
pub fn builtin_themes() -> Vec<ThemeDefinition> {
    vec![cursed_arena(), haunted_clinic()]
}
