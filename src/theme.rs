use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

#[cfg(feature = "ssr")]
pub const PRIMARY_COLOR_VAR: &str = "AUTHGATE_PRIMARY_COLOR";
#[cfg(feature = "ssr")]
pub const DARK_GREY_COLOR_VAR: &str = "AUTHGATE_DARK_GREY_COLOR";

/// A CSS hex color, either `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = trimmed
            .strip_prefix('#')
            .map(|hex| {
                matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
            })
            .unwrap_or(false);

        if valid {
            Ok(Color(trimmed.to_string()))
        } else {
            Err(ThemeError::InvalidColor(s.to_string()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named color tokens consumed by the auth screen components.
///
/// Passed to components explicitly. The server may place one in context for
/// the app shell to pick up, but components never look it up themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: Color,
    pub dark_grey_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: Color("#615EFF".to_string()),
            dark_grey_color: Color("#8B8BA0".to_string()),
        }
    }
}

impl Theme {
    pub fn new(primary_color: &str, dark_grey_color: &str) -> Result<Self, ThemeError> {
        Ok(Self {
            primary_color: primary_color.parse()?,
            dark_grey_color: dark_grey_color.parse()?,
        })
    }

    /// Builds a theme from `AUTHGATE_*` variables, keeping the default for any
    /// token that isn't set.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ThemeError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    #[cfg(feature = "ssr")]
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ThemeError> {
        let mut theme = Self::default();

        let parse = |var: &'static str, value: String| {
            value
                .parse::<Color>()
                .map_err(|e| ThemeError::InvalidEnvVar {
                    var,
                    source: Box::new(e),
                })
        };

        if let Some(value) = lookup(PRIMARY_COLOR_VAR) {
            theme.primary_color = parse(PRIMARY_COLOR_VAR, value)?;
        }
        if let Some(value) = lookup(DARK_GREY_COLOR_VAR) {
            theme.dark_grey_color = parse(DARK_GREY_COLOR_VAR, value)?;
        }

        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_accepts_short_and_long_hex() {
        assert_eq!("#fff".parse::<Color>().unwrap().as_str(), "#fff");
        assert_eq!("#1A2b3C".parse::<Color>().unwrap().as_str(), "#1A2b3C");
        assert_eq!(" #000000 ".parse::<Color>().unwrap().as_str(), "#000000");
    }

    #[test]
    fn test_color_rejects_garbage() {
        for input in ["", "#", "fff", "#ffff", "#ggg", "red", "#12345g", "rgb(0,0,0)"] {
            assert!(
                matches!(input.parse::<Color>(), Err(ThemeError::InvalidColor(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_theme_deserialize_validates_colors() {
        let theme: Theme =
            serde_json::from_str(r##"{"primary_color":"#123","dark_grey_color":"#456789"}"##)
                .unwrap();
        assert_eq!(theme, Theme::new("#123", "#456789").unwrap());

        let bad = serde_json::from_str::<Theme>(
            r##"{"primary_color":"blue","dark_grey_color":"#456789"}"##,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_theme_serializes_as_plain_strings() {
        let json = serde_json::to_string(&Theme::default()).unwrap();
        assert_eq!(
            json,
            r##"{"primary_color":"#615EFF","dark_grey_color":"#8B8BA0"}"##
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_from_lookup_overrides_only_set_tokens() {
        let theme = Theme::from_lookup(|var| {
            (var == PRIMARY_COLOR_VAR).then(|| "#abcdef".to_string())
        })
        .unwrap();
        assert_eq!(theme.primary_color.as_str(), "#abcdef");
        assert_eq!(theme.dark_grey_color, Theme::default().dark_grey_color);

        let err = Theme::from_lookup(|var| {
            (var == DARK_GREY_COLOR_VAR).then(|| "grey".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(DARK_GREY_COLOR_VAR));
    }
}
