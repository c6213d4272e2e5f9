//! CSS custom-property generation.
//!
//! Names are fixed: `--theme-id` first, then `--color-<group>-<name>` for
//! the palette, `--animation-*` for timing and `--effect-*` for effect
//! flags. Effect flags render as `1`/`0` so stylesheets can use them in
//! `calc()`. Output depends only on the theme, byte for byte.

use crate::theme::ThemeDefinition;

/// Ordered `(property, value)` pairs for a theme.
#[must_use]
pub fn theme_variables(theme: &ThemeDefinition) -> Vec<(String, String)> {
    let mut vars = vec![("--theme-id".to_string(), theme.id.clone())];

    vars.extend(
        theme
            .colors
            .entries()
            .into_iter()
            .map(|(path, value)| (format!("--color-{}", path.join("-")), value.to_string())),
    );

    let anim = &theme.animations;
    for (name, value) in [
        ("fast", &anim.duration.fast),
        ("normal", &anim.duration.normal),
        ("slow", &anim.duration.slow),
    ] {
        vars.push((format!("--animation-duration-{name}"), value.clone()));
    }
    vars.push(("--animation-easing".to_string(), anim.easing.clone()));
    for (name, value) in anim.named() {
        vars.push((format!("--animation-{name}"), value.to_string()));
    }

    let fx = &theme.effects;
    for (name, on) in [("shadows", fx.shadows), ("glows", fx.glows), ("blur", fx.blur)] {
        vars.push((format!("--effect-{name}"), flag(on).to_string()));
    }
    vars.push((
        "--effect-shadow-intensity".to_string(),
        fx.shadow_intensity().to_string(),
    ));
    vars.push((
        "--effect-glow-intensity".to_string(),
        fx.glow_intensity().to_string(),
    ));

    vars
}

/// A `:root { ... }` block for one theme.
#[must_use]
pub fn generate_theme_css(theme: &ThemeDefinition) -> String {
    render_block(":root", &theme_variables(theme))
}

/// One `[data-theme="<id>"]` block per theme, separated by a blank line.
#[must_use]
pub fn generate_all_themes_css<'a>(themes: impl IntoIterator<Item = &'a ThemeDefinition>) -> String {
    themes
        .into_iter()
        .map(|theme| {
            let selector = format!("[data-theme=\"{}\"]", theme.id);
            render_block(&selector, &theme_variables(theme))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const fn flag(on: bool) -> &'static str {
    if on { "1" } else { "0" }
}

fn render_block(selector: &str, vars: &[(String, String)]) -> String {
    let body: String = vars
        .iter()
        .map(|(name, value)| format!("  {name}: {value};\n"))
        .collect();

    format!("{selector} {{\n{body}}}\n")
}

///
/// TESTS
///
