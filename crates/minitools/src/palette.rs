use colored::{Color, ColoredString, Colorize};
use minitools_core::theme::{Subscription, Theme, ThemeSource};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub heading: Color,
    pub label: Color,
    pub value: Color,
    pub accent: Color,
    pub muted: Color,
}

const DARK: Colors = Colors {
    heading: Color::BrightCyan,
    label: Color::Green,
    value: Color::BrightWhite,
    accent: Color::BrightYellow,
    muted: Color::BrightBlack,
};

const LIGHT: Colors = Colors {
    heading: Color::Blue,
    label: Color::Magenta,
    value: Color::Black,
    accent: Color::Red,
    muted: Color::BrightBlack,
};

fn colors_for(theme: Theme) -> Colors {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// Read-only view of the current theme for terminal renderers
///
/// The palette subscribes to its [`ThemeSource`] and swaps colours when the
/// theme changes; the subscription ends when the last clone is dropped.
#[derive(Clone)]
pub struct Palette {
    colors: Arc<Mutex<Colors>>,
    _subscription: Arc<Subscription>,
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette").field("colors", &self.colors()).finish()
    }
}

impl Palette {
    pub fn new(source: ThemeSource) -> Self {
        let colors = Arc::new(Mutex::new(colors_for(source.current())));
        let cached = Arc::clone(&colors);
        let subscription = source.subscribe(move |theme| {
            *cached.lock().unwrap_or_else(PoisonError::into_inner) = colors_for(theme);
        });
        Self {
            colors,
            _subscription: Arc::new(subscription),
        }
    }

    pub fn colors(&self) -> Colors {
        *self.colors.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.color(self.colors().heading).bold()
    }

    pub fn label(&self, text: &str) -> ColoredString {
        text.color(self.colors().label)
    }

    pub fn value(&self, text: &str) -> ColoredString {
        text.color(self.colors().value).bold()
    }

    pub fn accent(&self, text: &str) -> ColoredString {
        text.color(self.colors().accent)
    }

    pub fn muted(&self, text: &str) -> ColoredString {
        text.color(self.colors().muted)
    }

    /// Three-line section header: rule, title, rule
    pub fn banner(&self, title: &str) -> String {
        let rule = "=".repeat(80);
        format!(
            "\n{}\n{}\n{}\n",
            rule.color(self.colors().heading),
            self.heading(title),
            rule.color(self.colors().heading)
        )
    }

    /// `label: value` line used by every formatted result
    pub fn field(&self, label: &str, value: &str) -> String {
        format!("  {}: {}\n", self.label(label), self.value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme_source() {
        let source = ThemeSource::new(Theme::Dark);
        let palette = Palette::new(source.clone());
        assert_eq!(palette.colors(), DARK);

        source.set(Theme::Light);
        assert_eq!(palette.colors(), LIGHT);
    }

    #[test]
    fn test_dropping_palette_unsubscribes() {
        let source = ThemeSource::new(Theme::Dark);
        let palette = Palette::new(source.clone());
        let copy = palette.clone();
        assert_eq!(source.observer_count(), 1);

        drop(palette);
        assert_eq!(source.observer_count(), 1);
        drop(copy);
        assert_eq!(source.observer_count(), 0);
    }

    #[test]
    fn test_banner_contains_title() {
        let palette = Palette::new(ThemeSource::new(Theme::Dark));
        let banner = palette.banner("HEX CALCULATOR");
        assert!(banner.contains("HEX CALCULATOR"));
        assert!(banner.contains(&"=".repeat(80)));
    }

    #[test]
    fn test_field_contains_label_and_value() {
        let palette = Palette::new(ThemeSource::new(Theme::Light));
        let line = palette.field("Result", "45");
        assert!(line.contains("Result"));
        assert!(line.contains("45"));
    }
}
