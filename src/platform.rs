//! Browser services the core depends on, behind a trait so the navigation
//! and theme logic can be driven without a DOM.

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeTransition {
    Instant,
    Animated,
}

pub trait Platform {
    fn scroll_to_top(&self);

    /// Smoothly scrolls the element with `id` into view. Returns `false` when
    /// no such element is mounted.
    fn scroll_to_element(&self, id: &str) -> bool;

    /// Runs `task` once, after `delay_ms`, on the event loop.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);

    fn apply_theme(&self, theme: Theme, transition: ThemeTransition);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum Effect {
        ScrollTop,
        ScrollTo(String),
        ScrollMissed(String),
        Deferred(u32),
        Theme(Theme, ThemeTransition),
    }

    /// Records every side effect and holds deferred tasks until the test
    /// releases them with [`RecordingPlatform::run_deferred`].
    #[derive(Default)]
    pub(crate) struct RecordingPlatform {
        mounted: RefCell<HashSet<String>>,
        effects: RefCell<Vec<Effect>>,
        pending: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    impl RecordingPlatform {
        pub(crate) fn mount(&self, id: &str) {
            self.mounted.borrow_mut().insert(id.to_string());
        }

        pub(crate) fn unmount_all(&self) {
            self.mounted.borrow_mut().clear();
        }

        pub(crate) fn effects(&self) -> Vec<Effect> {
            self.effects.borrow().clone()
        }

        pub(crate) fn clear_effects(&self) {
            self.effects.borrow_mut().clear();
        }

        pub(crate) fn pending_tasks(&self) -> usize {
            self.pending.borrow().len()
        }

        pub(crate) fn run_deferred(&self) {
            let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for task in tasks {
                task();
            }
        }
    }

    impl Platform for RecordingPlatform {
        fn scroll_to_top(&self) {
            self.effects.borrow_mut().push(Effect::ScrollTop);
        }

        fn scroll_to_element(&self, id: &str) -> bool {
            let mounted = self.mounted.borrow().contains(id);
            let effect = if mounted {
                Effect::ScrollTo(id.to_string())
            } else {
                Effect::ScrollMissed(id.to_string())
            };
            self.effects.borrow_mut().push(effect);
            mounted
        }

        fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.effects.borrow_mut().push(Effect::Deferred(delay_ms));
            self.pending.borrow_mut().push(task);
        }

        fn apply_theme(&self, theme: Theme, transition: ThemeTransition) {
            self.effects.borrow_mut().push(Effect::Theme(theme, transition));
        }
    }
}
