//! Theme configuration (theme-config.json) and its built-in fallback

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

pub const DEFAULT_TEXT_PRIMARY: &str = "#1f2937";
pub const DEFAULT_TEXT_SECONDARY: &str = "#6b7280";
pub const DEFAULT_BG_PRIMARY: &str = "#ffffff";
pub const DEFAULT_BG_SECONDARY: &str = "#f9fafb";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub schema_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: ColorsConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub typography: TypographyConfig,
    pub logo: Option<LogoConfig>,
    pub layout: Option<LayoutConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub components: ComponentsConfig,
    pub animations: Option<AnimationsConfig>,
}

impl ThemeConfig {
    /// Logo URL, only when the theme explicitly configures one
    pub fn logo_url(&self) -> Option<&str> {
        self.logo
            .as_ref()
            .map(|l| l.url.as_str())
            .filter(|u| !u.is_empty())
    }

    pub fn animation_duration(&self) -> &str {
        match &self.animations {
            Some(a) if a.enabled => &a.duration,
            _ => "300ms",
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            schema_version: "1.0".into(),
            last_updated: chrono::Utc::now().to_rfc3339(),
            colors: ColorsConfig::default(),
            typography: TypographyConfig::default(),
            logo: None,
            layout: Some(LayoutConfig::default()),
            components: ComponentsConfig::default(),
            animations: Some(AnimationsConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub primary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub accent: String,
    pub text: Option<ColorPair>,
    pub background: Option<ColorPair>,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            primary: "#2563eb".into(),
            secondary: "#8b5cf6".into(),
            accent: "#f59e0b".into(),
            text: None,
            background: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPair {
    #[serde(deserialize_with = "null_as_default")]
    pub primary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub font_family: String,
    #[serde(deserialize_with = "null_as_default")]
    pub heading_font: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body_font: String,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            font_family: "Inter".into(),
            heading_font: "Inter".into(),
            body_font: "Inter".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub max_width: String,
    #[serde(deserialize_with = "null_as_default")]
    pub container_padding: String,
    #[serde(deserialize_with = "null_as_default")]
    pub header_height: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: "1280px".into(),
            container_padding: "2rem".into(),
            header_height: "80px".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentsConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub hero: HeroTheme,
    #[serde(deserialize_with = "null_as_default")]
    pub trust_badges: TrustBadgesTheme,
    #[serde(deserialize_with = "null_as_default")]
    pub categories_section: CategoriesSectionTheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroTheme {
    #[serde(deserialize_with = "null_as_default")]
    pub badge: HeroBadgeTheme,
    /// centered | left | right
    #[serde(deserialize_with = "null_as_default")]
    pub layout: String,
    /// gradient | solid | none
    #[serde(deserialize_with = "null_as_default")]
    pub background_style: String,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
}

impl Default for HeroTheme {
    fn default() -> Self {
        Self {
            badge: HeroBadgeTheme::default(),
            layout: "centered".into(),
            background_style: "gradient".into(),
            headline: Some("Find the Top Picks,<br />Make Smarter Choices".into()),
            subheadline: Some(
                "Expert reviews, honest comparisons, and real-world testing to help you choose products with confidence."
                    .into(),
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBadgeTheme {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    pub text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
}

impl Default for HeroBadgeTheme {
    fn default() -> Self {
        Self {
            enabled: true,
            text: Some("✨ Updated for 2026".into()),
            style: "blue".into(),
            position: "top".into(),
        }
    }
}

/// How the home page trust row is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustBadgeMode {
    #[default]
    Auto,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustBadgesTheme {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: TrustBadgeMode,
    #[serde(deserialize_with = "null_as_default")]
    pub style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_badges: Vec<CustomBadge>,
}

impl Default for TrustBadgesTheme {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: TrustBadgeMode::Auto,
            style: "minimal".into(),
            custom_badges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomBadge {
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesSectionTheme {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    /// grid | list
    #[serde(deserialize_with = "null_as_default")]
    pub layout: String,
    #[serde(deserialize_with = "null_as_default")]
    pub columns: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub gap: String,
    pub title: Option<String>,
}

impl Default for CategoriesSectionTheme {
    fn default() -> Self {
        Self {
            enabled: true,
            layout: "grid".into(),
            columns: 3,
            gap: "2rem".into(),
            title: Some("Browse by Category".into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationsConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: "300ms".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_values() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.colors.primary, "#2563eb");
        assert_eq!(theme.typography.heading_font, "Inter");
        assert!(theme.components.hero.badge.enabled);
        assert_eq!(theme.components.trust_badges.mode, TrustBadgeMode::Auto);
        assert_eq!(theme.components.categories_section.columns, 3);
        assert!(theme.logo_url().is_none());
    }

    #[test]
    fn test_partial_theme_fills_defaults() {
        let theme: ThemeConfig =
            serde_json::from_str(r##"{"colors": {"primary": "#000000"}}"##).unwrap();
        assert_eq!(theme.colors.primary, "#000000");
        assert_eq!(theme.colors.secondary, "#8b5cf6");
        assert_eq!(theme.components.hero.layout, "centered");
    }

    #[test]
    fn test_custom_trust_mode() {
        let theme: ThemeConfig = serde_json::from_str(
            r#"{"components": {"trustBadges": {"enabled": true, "mode": "custom", "customBadges": [{"value": "10+", "label": "Years"}]}}}"#,
        )
        .unwrap();
        assert_eq!(theme.components.trust_badges.mode, TrustBadgeMode::Custom);
        assert_eq!(theme.components.trust_badges.custom_badges.len(), 1);
    }

    #[test]
    fn test_empty_logo_url_is_absent() {
        let theme: ThemeConfig = serde_json::from_str(r#"{"logo": {"url": ""}}"#).unwrap();
        assert!(theme.logo_url().is_none());
    }

    #[test]
    fn test_animation_duration_disabled_falls_back() {
        let theme: ThemeConfig =
            serde_json::from_str(r#"{"animations": {"enabled": false, "duration": "900ms"}}"#)
                .unwrap();
        assert_eq!(theme.animation_duration(), "300ms");
    }

    #[test]
    fn test_null_sections_use_defaults() {
        let theme: ThemeConfig = serde_json::from_str(
            r#"{"colors": null, "components": {"trustBadges": {"customBadges": null, "style": null}}}"#,
        )
        .unwrap();
        assert_eq!(theme.colors.primary, "#2563eb");
        assert!(theme.components.trust_badges.custom_badges.is_empty());
        assert_eq!(theme.components.trust_badges.style, "");
    }
}
