//! Theme config → CSS custom properties

use crate::types::{
    ThemeConfig, DEFAULT_BG_PRIMARY, DEFAULT_BG_SECONDARY, DEFAULT_TEXT_PRIMARY,
    DEFAULT_TEXT_SECONDARY,
};

/// Resolved CSS variables for one theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeVars {
    vars: Vec<(&'static str, String)>,
    font_family: String,
}

impl ThemeVars {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        let colors = &theme.colors;
        let text = colors.text.as_ref();
        let background = colors.background.as_ref();
        let layout = theme.layout.clone().unwrap_or_default();
        let typography = &theme.typography;

        let pick = |value: Option<&String>, fallback: &str| -> String {
            value
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        let font = |name: &str| format!("{}, system-ui, sans-serif", name);

        let vars = vec![
            ("--color-primary", colors.primary.clone()),
            ("--color-secondary", colors.secondary.clone()),
            ("--color-accent", colors.accent.clone()),
            (
                "--color-text-primary",
                pick(text.map(|t| &t.primary), DEFAULT_TEXT_PRIMARY),
            ),
            (
                "--color-text-secondary",
                pick(text.map(|t| &t.secondary), DEFAULT_TEXT_SECONDARY),
            ),
            (
                "--color-bg-primary",
                pick(background.map(|b| &b.primary), DEFAULT_BG_PRIMARY),
            ),
            (
                "--color-bg-secondary",
                pick(background.map(|b| &b.secondary), DEFAULT_BG_SECONDARY),
            ),
            ("--font-family", font(&typography.font_family)),
            ("--font-heading", font(&typography.heading_font)),
            ("--font-body", font(&typography.body_font)),
            ("--layout-max-width", pick(Some(&layout.max_width), "1280px")),
            ("--layout-padding", pick(Some(&layout.container_padding), "2rem")),
            ("--header-height", pick(Some(&layout.header_height), "80px")),
            ("--animation-duration", theme.animation_duration().to_string()),
        ];

        Self {
            vars,
            font_family: typography.font_family.clone(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Stylesheet body injected into `<head>`
    pub fn css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            css.push_str("  ");
            css.push_str(name);
            css.push_str(": ");
            // A theme value must not be able to close the style element
            css.push_str(&value.replace(['<', '>', ';', '{', '}'], ""));
            css.push_str(";\n");
        }
        css.push_str("}\n");
        css.push_str("body { font-family: var(--font-body); color: var(--color-text-primary); }\n");
        css.push_str("h1, h2, h3, h4, h5, h6 { font-family: var(--font-heading); }\n");
        css
    }

    /// Google Fonts stylesheet for the primary font family
    pub fn font_stylesheet_url(&self) -> String {
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@400;500;600;700;800;900&display=swap",
            self.font_family.trim().replace(' ', "+")
        )
    }
}
