//! Image carousel for the project overlay.
//!
//! Index changes go through a `Transitioning` state that lasts
//! [`TRANSITION_MS`]; requests received meanwhile are dropped so two fades
//! never overlap.

pub const AUTO_ADVANCE_MS: u32 = 4_000;
pub const TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselState {
    Showing(usize),
    Transitioning { from: usize, to: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
    /// Fired by the transition timer.
    Commit,
    /// Fired by the auto-advance timer.
    Tick,
    Jump(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKey {
    Close,
    Next,
    Previous,
}

impl OverlayKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    state: CarouselState,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            state: CarouselState::Showing(0),
        }
    }

    pub fn image_count(&self) -> usize {
        self.len
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Image currently on screen; during a transition that is still the
    /// outgoing one.
    pub fn index(&self) -> usize {
        match self.state {
            CarouselState::Showing(index) => index,
            CarouselState::Transitioning { from, .. } => from,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, CarouselState::Transitioning { .. })
    }

    fn begin(&mut self, to: usize) -> bool {
        let CarouselState::Showing(from) = self.state else {
            return false;
        };

        self.state = CarouselState::Transitioning { from, to };
        true
    }

    pub fn next(&mut self) -> bool {
        let to = (self.index() + 1) % self.len;
        self.begin(to)
    }

    pub fn previous(&mut self) -> bool {
        let to = (self.index() + self.len - 1) % self.len;
        self.begin(to)
    }

    /// Ends the running transition. Returns the committed index.
    pub fn commit(&mut self) -> Option<usize> {
        let CarouselState::Transitioning { to, .. } = self.state else {
            return None;
        };

        self.state = CarouselState::Showing(to);
        Some(to)
    }

    /// Direct selection from the indicator dots; no fade.
    pub fn jump(&mut self, index: usize) -> bool {
        match self.state {
            CarouselState::Showing(current) if index < self.len && index != current => {
                self.state = CarouselState::Showing(index);
                true
            }
            _ => false,
        }
    }

    /// Applies `action`. Returns whether the state changed.
    pub fn apply(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Next | CarouselAction::Tick => self.next(),
            CarouselAction::Previous => self.previous(),
            CarouselAction::Commit => self.commit().is_some(),
            CarouselAction::Jump(index) => self.jump(index),
        }
    }

    pub fn counter_label(&self) -> String {
        format!("{:02} / {:02}", self.index() + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_nexts_wrap_back_to_start() {
        let mut carousel = Carousel::new(3);

        for _ in 0..3 {
            assert!(carousel.next());
            carousel.commit();
        }

        assert_eq!(carousel.state(), CarouselState::Showing(0));
    }

    #[test]
    fn requests_while_transitioning_are_ignored() {
        let mut carousel = Carousel::new(3);

        assert!(carousel.next());
        assert!(!carousel.next());
        assert!(!carousel.previous());
        assert!(!carousel.apply(CarouselAction::Tick));
        assert!(!carousel.jump(2));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.state(), CarouselState::Transitioning { from: 0, to: 1 });

        assert_eq!(carousel.commit(), Some(1));
        assert_eq!(carousel.commit(), None);
    }

    #[test]
    fn previous_wraps_to_last_image() {
        let mut carousel = Carousel::new(3);

        carousel.previous();
        assert_eq!(carousel.commit(), Some(2));
    }

    #[test]
    fn skyline_harbor_walkthrough() {
        let mut carousel = Carousel::new(2);
        assert_eq!(carousel.counter_label(), "01 / 02");

        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Commit);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.counter_label(), "02 / 02");

        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Commit);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn counter_label_pads_to_two_digits_only() {
        let mut carousel = Carousel::new(12);
        assert_eq!(carousel.counter_label(), "01 / 12");

        carousel.jump(9);
        carousel.commit();
        assert_eq!(carousel.index(), 9);
        assert_eq!(carousel.counter_label(), "10 / 12");
    }

    #[test]
    fn jump_only_accepts_other_valid_indices() {
        let mut carousel = Carousel::new(3);

        assert!(!carousel.jump(0));
        assert!(!carousel.jump(3));
        assert!(carousel.jump(2));
        assert_eq!(carousel.state(), CarouselState::Showing(2));
    }

    #[test]
    fn overlay_keys_map_to_actions() {
        assert_eq!(OverlayKey::from_key("Escape"), Some(OverlayKey::Close));
        assert_eq!(OverlayKey::from_key("ArrowRight"), Some(OverlayKey::Next));
        assert_eq!(OverlayKey::from_key("ArrowLeft"), Some(OverlayKey::Previous));
        assert_eq!(OverlayKey::from_key("Enter"), None);
    }

    #[test]
    fn empty_image_list_is_treated_as_single_image() {
        let mut carousel = Carousel::new(0);

        assert_eq!(carousel.image_count(), 1);
        carousel.next();
        assert_eq!(carousel.commit(), Some(0));
    }
}
