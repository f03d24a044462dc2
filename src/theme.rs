use crate::platform::{Platform, ThemeTransition};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Class that must be removed from the document root when this theme is applied.
    pub fn other_class(self) -> &'static str {
        self.toggled().root_class()
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().root_class();
        format!("Switch to {next} theme")
    }
}

/// Session-wide theme flag. Every change is mirrored onto the document root.
pub struct ThemeState {
    current: Cell<Theme>,
    platform: Rc<dyn Platform>,
}

impl ThemeState {
    pub fn new(platform: Rc<dyn Platform>) -> Self {
        let initial = Theme::default();
        platform.apply_theme(initial, ThemeTransition::Instant);
        Self {
            current: Cell::new(initial),
            platform,
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        self.platform.apply_theme(next, ThemeTransition::Animated);
        log::debug!("theme switched to {}", next.root_class());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::{Effect, RecordingPlatform};

    #[test]
    fn starts_dark_and_reflects_onto_root() {
        let platform = Rc::new(RecordingPlatform::default());
        let theme = ThemeState::new(platform.clone());

        assert_eq!(theme.current(), Theme::Dark);
        assert_eq!(
            platform.effects(),
            vec![Effect::Theme(Theme::Dark, ThemeTransition::Instant)]
        );
    }

    #[test]
    fn toggle_flips_and_applies_with_transition() {
        let platform = Rc::new(RecordingPlatform::default());
        let theme = ThemeState::new(platform.clone());

        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(
            platform.effects(),
            vec![
                Effect::Theme(Theme::Dark, ThemeTransition::Instant),
                Effect::Theme(Theme::Light, ThemeTransition::Animated),
                Effect::Theme(Theme::Dark, ThemeTransition::Animated),
            ]
        );
    }

    #[test]
    fn root_classes_are_mutually_exclusive() {
        assert_eq!(Theme::Dark.root_class(), "dark");
        assert_eq!(Theme::Dark.other_class(), "light");
        assert_eq!(Theme::Light.other_class(), "dark");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
