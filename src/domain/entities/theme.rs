//! UI theme value and its reducer.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Visual theme of the page. Exactly one value is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Actions accepted by [`Theme::reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Toggle,
    Set(Theme),
}

impl Theme {
    /// Pure state transition; the store applies it atomically.
    pub fn reduce(self, action: ThemeAction) -> Theme {
        match action {
            ThemeAction::Toggle => self.toggled(),
            ThemeAction::Set(theme) => theme,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppError::validation(format!(
                "Unknown theme '{other}', expected 'light' or 'dark'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            let twice = theme
                .reduce(ThemeAction::Toggle)
                .reduce(ThemeAction::Toggle);
            assert_eq!(twice, theme);
        }
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.reduce(ThemeAction::Toggle), Theme::Dark);
        assert_eq!(Theme::Dark.reduce(ThemeAction::Toggle), Theme::Light);
    }

    #[test]
    fn test_set() {
        assert_eq!(
            Theme::Light.reduce(ThemeAction::Set(Theme::Dark)),
            Theme::Dark
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" LIGHT ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
