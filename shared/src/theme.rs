use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// What the user picked on the profile screen. Persisted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Auto,
        ThemePreference::Light,
        ThemePreference::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Only `Auto` tracks the host's color scheme; explicit choices ignore host theme changes.
    pub fn follows_host(&self) -> bool {
        matches!(self, ThemePreference::Auto)
    }

    /// Reads a stored value; anything unrecognised falls back to `Auto`.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ThemePreference::Auto),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme preference: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_host(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ColorScheme::Dark
    }
}

pub fn resolve(preference: ThemePreference, host_scheme: Option<ColorScheme>) -> ColorScheme {
    match preference {
        ThemePreference::Light => ColorScheme::Light,
        ThemePreference::Dark => ColorScheme::Dark,
        ThemePreference::Auto => host_scheme.unwrap_or(ColorScheme::Dark),
    }
}

/// Colors published as `--tg-theme-*` CSS variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKey {
    Background,
    Text,
    Hint,
    Link,
    Button,
    ButtonText,
    SecondaryBackground,
    HeaderBackground,
    BottomBarBackground,
    AccentText,
    SectionBackground,
    SectionHeaderText,
    SubtitleText,
    DestructiveText,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 14] = [
        ThemeKey::Background,
        ThemeKey::Text,
        ThemeKey::Hint,
        ThemeKey::Link,
        ThemeKey::Button,
        ThemeKey::ButtonText,
        ThemeKey::SecondaryBackground,
        ThemeKey::HeaderBackground,
        ThemeKey::BottomBarBackground,
        ThemeKey::AccentText,
        ThemeKey::SectionBackground,
        ThemeKey::SectionHeaderText,
        ThemeKey::SubtitleText,
        ThemeKey::DestructiveText,
    ];

    /// Field name inside the host's `themeParams`.
    pub fn host_param(&self) -> &'static str {
        match self {
            ThemeKey::Background => "bg_color",
            ThemeKey::Text => "text_color",
            ThemeKey::Hint => "hint_color",
            ThemeKey::Link => "link_color",
            ThemeKey::Button => "button_color",
            ThemeKey::ButtonText => "button_text_color",
            ThemeKey::SecondaryBackground => "secondary_bg_color",
            ThemeKey::HeaderBackground => "header_bg_color",
            ThemeKey::BottomBarBackground => "bottom_bar_bg_color",
            ThemeKey::AccentText => "accent_text_color",
            ThemeKey::SectionBackground => "section_bg_color",
            ThemeKey::SectionHeaderText => "section_header_text_color",
            ThemeKey::SubtitleText => "subtitle_text_color",
            ThemeKey::DestructiveText => "destructive_text_color",
        }
    }

    pub fn css_var(&self) -> String {
        format!("--tg-theme-{}", self.host_param().replace('_', "-"))
    }

    pub fn fallback(&self, scheme: ColorScheme) -> &'static str {
        let (light, dark) = match self {
            ThemeKey::Background => ("#ffffff", "#1c1c1e"),
            ThemeKey::Text => ("#000000", "#ffffff"),
            ThemeKey::Hint => ("#999999", "#98989e"),
            ThemeKey::Link => ("#2481cc", "#0a84ff"),
            ThemeKey::Button => ("#2481cc", "#007aff"),
            ThemeKey::ButtonText => ("#ffffff", "#ffffff"),
            ThemeKey::SecondaryBackground => ("#efeff3", "#2c2c2e"),
            ThemeKey::HeaderBackground => ("#f1f1f2", "#1c1c1e"),
            ThemeKey::BottomBarBackground => ("#f1f1f2", "#1e1e1e"),
            ThemeKey::AccentText => ("#2481cc", "#0a84ff"),
            ThemeKey::SectionBackground => ("#ffffff", "#2c2c2e"),
            ThemeKey::SectionHeaderText => ("#6d6d72", "#8e8e93"),
            ThemeKey::SubtitleText => ("#999999", "#98989e"),
            ThemeKey::DestructiveText => ("#ff3b30", "#ff453a"),
        };
        match scheme {
            ColorScheme::Light => light,
            ColorScheme::Dark => dark,
        }
    }
}

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Builds the full set of theme variables for `scheme`.
///
/// Host colors win per key when they describe the same scheme we resolved to
/// and are well-formed `#RRGGBB` values; everything else uses the built-in
/// palette. A forced light/dark override against the host scheme ignores the
/// host colors entirely.
pub fn resolve_palette(
    scheme: ColorScheme,
    host_scheme: Option<ColorScheme>,
    host_params: &HashMap<String, String>,
) -> Vec<(ThemeKey, String)> {
    let use_host = host_scheme.map_or(true, |host| host == scheme);

    ThemeKey::ALL
        .iter()
        .map(|key| {
            let host_value = host_params
                .get(key.host_param())
                .filter(|_| use_host)
                .filter(|value| {
                    let valid = is_hex_color(value);
                    if !valid {
                        log::warn!("Ignoring host color {}={:?}", key.host_param(), value);
                    }
                    valid
                });
            let value = match host_value {
                Some(value) => value.to_lowercase(),
                None => key.fallback(scheme).to_string(),
            };
            (*key, value)
        })
        .collect()
}

/// Colors requested for the host's own chrome around the web view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeColors {
    pub header: &'static str,
    pub background: &'static str,
    pub bottom_bar: &'static str,
}

impl ChromeColors {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                header: "#1C1C1E",
                background: "#1C1C1E",
                bottom_bar: "#1E1E1E",
            },
            ColorScheme::Light => Self {
                header: "#F1F1F2",
                background: "#FFFFFF",
                bottom_bar: "#F1F1F2",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_truth_table() {
        for host in [None, Some(ColorScheme::Light), Some(ColorScheme::Dark)] {
            assert_eq!(resolve(ThemePreference::Light, host), ColorScheme::Light);
            assert_eq!(resolve(ThemePreference::Dark, host), ColorScheme::Dark);
        }
        assert_eq!(resolve(ThemePreference::Auto, Some(ColorScheme::Light)), ColorScheme::Light);
        assert_eq!(resolve(ThemePreference::Auto, Some(ColorScheme::Dark)), ColorScheme::Dark);
        assert_eq!(resolve(ThemePreference::Auto, None), ColorScheme::Dark);
    }

    #[test]
    fn test_only_auto_follows_host() {
        assert!(ThemePreference::Auto.follows_host());
        assert!(!ThemePreference::Light.follows_host());
        assert!(!ThemePreference::Dark.follows_host());
    }

    #[test]
    fn test_preference_storage_round_trip() {
        for pref in ThemePreference::ALL {
            assert_eq!(ThemePreference::from_stored(Some(pref.as_str())), pref);
        }
        assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Auto);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Auto);
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
    }

    #[test]
    fn test_css_var_names() {
        assert_eq!(ThemeKey::Background.css_var(), "--tg-theme-bg-color");
        assert_eq!(
            ThemeKey::SectionHeaderText.css_var(),
            "--tg-theme-section-header-text-color"
        );
    }

    #[test]
    fn test_palette_prefers_valid_host_colors() {
        let mut params = HashMap::new();
        params.insert("bg_color".to_string(), "#17212B".to_string());
        params.insert("text_color".to_string(), "white".to_string());

        let palette = resolve_palette(ColorScheme::Dark, Some(ColorScheme::Dark), &params);
        assert_eq!(palette.len(), 14);
        let lookup = |key: ThemeKey| {
            palette
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(lookup(ThemeKey::Background), "#17212b");
        assert_eq!(lookup(ThemeKey::Text), "#ffffff");
        assert_eq!(lookup(ThemeKey::Link), "#0a84ff");
    }

    #[test]
    fn test_forced_scheme_ignores_host_colors() {
        let mut params = HashMap::new();
        params.insert("bg_color".to_string(), "#17212b".to_string());

        let palette = resolve_palette(ColorScheme::Light, Some(ColorScheme::Dark), &params);
        assert_eq!(palette[0], (ThemeKey::Background, "#ffffff".to_string()));
    }

    #[test]
    fn test_chrome_colors() {
        assert_eq!(ChromeColors::for_scheme(ColorScheme::Dark).bottom_bar, "#1E1E1E");
        assert_eq!(ChromeColors::for_scheme(ColorScheme::Light).background, "#FFFFFF");
    }
}
