// Theme specific colors
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the operating system colour scheme.
    #[default]
    System,
    Dark,
    Light,
}

impl Theme {
    /// Concrete theme for the given OS preference. Only `System` consults it.
    pub fn resolve(self, os_prefers_dark: bool) -> Self {
        match self {
            Theme::System if os_prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            explicit => explicit,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::System => Theme::System,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark | Theme::System => ThemePalette::default_dark(),
            Theme::Light => ThemePalette::default_light(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub surface: String,
    pub border: String,
    pub muted: String,
    /// Axis labels and tooltip text.
    pub label: String,
    pub marker: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#000000".to_string(),
            foreground: "#ffffff".to_string(),
            surface: "#1e1e1e".to_string(),
            border: "#3a3a3a".to_string(),
            muted: "#9a9a9a".to_string(),
            label: "white".to_string(),
            marker: "grey".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            surface: "#f2f2f2".to_string(),
            border: "#d6d6d6".to_string(),
            muted: "#666666".to_string(),
            label: "black".to_string(),
            marker: "grey".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_contrast_with_background() {
        assert_eq!(Theme::Dark.palette().label, "white");
        assert_eq!(Theme::Dark.palette().background, "#000000");
        assert_eq!(Theme::Light.palette().label, "black");
        assert_eq!(Theme::Light.palette().background, "#ffffff");
    }

    #[test]
    fn toggling_flips_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn system_follows_the_os_preference() {
        assert_eq!(Theme::System.resolve(true), Theme::Dark);
        assert_eq!(Theme::System.resolve(false), Theme::Light);
        assert_eq!(Theme::Light.resolve(true), Theme::Light);
        assert_eq!(Theme::Dark.resolve(false), Theme::Dark);
        assert_eq!(Theme::System.resolve(false).toggled(), Theme::Dark);
    }

    #[test]
    fn theme_ids_parse_from_config() {
        let parse = |id: &str| serde_json::from_str::<Theme>(&format!("\"{}\"", id)).unwrap();
        assert_eq!(parse("system"), Theme::System);
        assert_eq!(parse("dark"), Theme::Dark);
        assert_eq!(parse("light"), Theme::Light);
        assert!(serde_json::from_str::<Theme>("\"auto\"").is_err());
        assert_eq!(Theme::default(), Theme::System);
    }
}
