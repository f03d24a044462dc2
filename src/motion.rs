//! Scroll, visibility and pointer signals, reduced to plain state machines
//! and arithmetic so they can be driven by synthetic frames in tests.

pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const SHOWCASE_OVERSCROLL_PX: f64 = 300.0;
pub const SHOWCASE_REMEASURE_DELAY_MS: u32 = 500;
pub const PARTNER_STRIP_STEP_RATIO: f64 = 0.6;
pub const FEATURED_DESKTOP_MIN_WIDTH: f64 = 1_024.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// One-shot reveal: a tenth of the element on screen.
pub const REVEAL_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px",
};

/// Active-section band, 20% to 40% from the top of the viewport.
pub const ACTIVE_SECTION_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.0,
    root_margin: "-20% 0px -60% 0px",
};

pub const ACTIVE_SECTION_BAND: ViewportBand = ViewportBand {
    top_ratio: 0.2,
    bottom_ratio: 0.4,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Waiting,
    Triggered,
}

/// Visibility signal that flips to `Triggered` once and never reverts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    state: Visibility,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Used when the platform cannot observe intersections: reveal content
    /// rather than hide it forever.
    pub fn unsupported() -> Self {
        Self {
            state: Visibility::Triggered,
        }
    }

    /// Feeds one observation. Returns `true` only for the observation that
    /// caused the transition, so the caller knows when to stop observing.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match (self.state, is_intersecting) {
            (Visibility::Waiting, true) => {
                self.state = Visibility::Triggered;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Triggered
    }
}

/// Frame-driven count from `start` to `end` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    start: u32,
    end: u32,
    duration_ms: f64,
    started_at: Option<f64>,
    value: u32,
}

impl CountUp {
    pub fn new(start: u32, end: u32, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            started_at: None,
            value: start,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.value == self.end
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms <= 0.0 {
            return self.end;
        }

        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let span = f64::from(self.end) - f64::from(self.start);
        (progress * span + f64::from(self.start)).floor() as u32
    }

    /// Advances to the frame timestamp `now_ms`. The first frame fixes the
    /// start time. Returns whether another frame is needed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let next = self.value_at(now_ms - started_at);

        self.value = if self.end >= self.start {
            next.max(self.value)
        } else {
            next.min(self.value)
        };

        !self.is_finished()
    }
}

/// Progress through a tall scroll region: 0 when its top meets the viewport
/// top, 1 once the excess height has scrolled past.
pub fn scroll_fraction(rect_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let total_distance = element_height - viewport_height;
    if total_distance <= 0.0 {
        return 0.0;
    }

    (-rect_top / total_distance).clamp(0.0, 1.0)
}

/// Horizontal travel for a filmstrip driven by vertical scroll.
pub fn horizontal_offset(
    fraction: f64,
    content_width: f64,
    viewport_width: f64,
    overscroll: f64,
) -> f64 {
    let max_scroll = (content_width - viewport_width + overscroll).max(0.0);
    fraction.clamp(0.0, 1.0) * max_scroll
}

/// Pointer position relative to a centre, in [-1, 1] on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: normalize_axis(client_x, width),
            y: normalize_axis(client_y, height),
        }
    }

    pub fn scaled(self, coefficient: f64) -> (f64, f64) {
        (self.x * coefficient, self.y * coefficient)
    }
}

fn normalize_axis(position: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }

    ((position / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBand {
    pub top_ratio: f64,
    pub bottom_ratio: f64,
}

impl ViewportBand {
    pub fn intersects(&self, rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
        let band_top = viewport_height * self.top_ratio;
        let band_bottom = viewport_height * self.bottom_ratio;
        rect_top < band_bottom && rect_bottom > band_top
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
}

/// Which of an ordered list of sections currently owns the active band.
///
/// When several sections intersect in the same batch, the one latest in
/// document order wins, independent of how the batch was delivered. This
/// replaces "last entry in delivery order wins"; the two agree whenever the
/// browser reports entries in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Applies one batch of observations. Returns whether the active section changed.
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> bool {
        let winner = entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter_map(|entry| {
                self.sections
                    .iter()
                    .position(|section| *section == entry.id)
            })
            .max();

        let Some(index) = winner else {
            return false;
        };

        let next = &self.sections[index];
        if self.active.as_ref() == Some(next) {
            return false;
        }

        self.active = Some(next.clone());
        true
    }
}

/// Label shown in the sidebar for the active section; nothing on the hero.
pub fn section_label(id: &str) -> Option<String> {
    if id.is_empty() || id == "home" {
        return None;
    }

    Some(id.replacen('-', " ", 1))
}

/// Last span, as `(top, bottom)`, that contains `line`.
pub fn trigger_line_index(spans: &[(f64, f64)], line: f64) -> Option<usize> {
    spans
        .iter()
        .rposition(|&(top, bottom)| top <= line && bottom >= line)
}

/// First card whose centre is closest to the container centre.
pub fn nearest_to_center(card_centres: &[f64], container_centre: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, centre) in card_centres.iter().enumerate() {
        let distance = (container_centre - centre).abs();
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Hero letter reveal delay in seconds.
pub fn letter_reveal_delay(word_index: usize, char_index: usize) -> f64 {
    0.3 + word_index as f64 * 0.5 + char_index as f64 * 0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            id: id.to_string(),
            is_intersecting,
        }
    }

    #[test]
    fn visibility_latch_never_reverts() {
        let mut latch = VisibilityLatch::new();

        assert!(!latch.observe(false));
        assert_eq!(latch.state(), Visibility::Waiting);
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn unsupported_observer_fails_open() {
        assert!(VisibilityLatch::unsupported().is_visible());
    }

    #[test]
    fn count_up_is_monotonic_and_lands_on_end() {
        let mut counter = CountUp::new(0, 150, COUNTER_DURATION_MS);
        let mut observed = vec![counter.value()];
        let mut now = 1_000.0;

        while counter.frame(now) {
            observed.push(counter.value());
            now += 16.7;
        }
        observed.push(counter.value());

        assert_eq!(observed[0], 0);
        assert!(observed.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(observed.last().copied(), Some(150));
    }

    #[test]
    fn count_up_ignores_out_of_order_frames() {
        let mut counter = CountUp::new(10, 20, 1_000.0);

        counter.frame(0.0);
        counter.frame(500.0);
        let midway = counter.value();
        counter.frame(100.0);

        assert_eq!(midway, 15);
        assert_eq!(counter.value(), 15);
    }

    #[test]
    fn count_up_with_zero_duration_jumps_to_end() {
        let mut counter = CountUp::new(0, 40, 0.0);

        assert!(!counter.frame(5.0));
        assert_eq!(counter.value(), 40);
    }

    #[test]
    fn scroll_fraction_clamps_to_unit_range() {
        assert_eq!(scroll_fraction(0.0, 4_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_fraction(200.0, 4_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_fraction(-1_500.0, 4_000.0, 1_000.0), 0.5);
        assert_eq!(scroll_fraction(-9_000.0, 4_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_fraction(-10.0, 800.0, 1_000.0), 0.0);
    }

    #[test]
    fn horizontal_offset_follows_fraction() {
        assert_eq!(horizontal_offset(0.5, 3_000.0, 1_000.0, 0.0), 1_000.0);
        assert_eq!(
            horizontal_offset(1.0, 3_000.0, 1_000.0, SHOWCASE_OVERSCROLL_PX),
            2_300.0
        );
        assert_eq!(horizontal_offset(0.7, 500.0, 1_000.0, 0.0), 0.0);
    }

    #[test]
    fn pointer_offset_is_centred_and_bounded() {
        let centre = PointerOffset::from_client(640.0, 360.0, 1_280.0, 720.0);
        assert_eq!(centre, PointerOffset { x: 0.0, y: 0.0 });

        let corner = PointerOffset::from_client(0.0, 720.0, 1_280.0, 720.0);
        assert_eq!(corner, PointerOffset { x: -1.0, y: 1.0 });
        assert_eq!(corner.scaled(-25.0), (25.0, -25.0));

        let degenerate = PointerOffset::from_client(10.0, 10.0, 0.0, 0.0);
        assert_eq!(degenerate, PointerOffset::default());
    }

    #[test]
    fn band_covers_twenty_to_forty_percent() {
        let band = ACTIVE_SECTION_BAND;

        assert!(band.intersects(150.0, 250.0, 1_000.0));
        assert!(band.intersects(-500.0, 1_500.0, 1_000.0));
        assert!(!band.intersects(400.0, 900.0, 1_000.0));
        assert!(!band.intersects(-300.0, 200.0, 1_000.0));
    }

    #[test]
    fn later_section_wins_when_both_intersect() {
        let mut tracker = SectionTracker::new(["about", "showcase"]);

        assert!(tracker.apply(&[entry("about", true), entry("showcase", true)]));
        assert_eq!(tracker.active(), Some("showcase"));

        let mut reversed = SectionTracker::new(["about", "showcase"]);
        reversed.apply(&[entry("showcase", true), entry("about", true)]);
        assert_eq!(reversed.active(), Some("showcase"));
    }

    #[test]
    fn tracker_keeps_last_section_when_nothing_intersects() {
        let mut tracker = SectionTracker::new(["home", "about", "contact"]);

        tracker.apply(&[entry("about", true)]);
        assert!(!tracker.apply(&[entry("about", false), entry("contact", false)]));
        assert!(!tracker.apply(&[entry("unknown", true)]));
        assert_eq!(tracker.active(), Some("about"));
        assert!(tracker.apply(&[entry("home", true)]));
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn section_labels_replace_first_hyphen() {
        assert_eq!(section_label(""), None);
        assert_eq!(section_label("home"), None);
        assert_eq!(
            section_label("featured-categories").as_deref(),
            Some("featured categories")
        );
    }

    #[test]
    fn trigger_line_prefers_last_matching_span() {
        let spans = [(0.0, 500.0), (500.0, 1_000.0), (1_000.0, 1_500.0)];

        assert_eq!(trigger_line_index(&spans, 250.0), Some(0));
        assert_eq!(trigger_line_index(&spans, 500.0), Some(1));
        assert_eq!(trigger_line_index(&spans, 2_000.0), None);
    }

    #[test]
    fn nearest_card_prefers_first_on_tie() {
        assert_eq!(nearest_to_center(&[100.0, 500.0, 900.0], 480.0), Some(1));
        assert_eq!(nearest_to_center(&[400.0, 600.0], 500.0), Some(0));
        assert_eq!(nearest_to_center(&[], 500.0), None);
    }

    #[test]
    fn letter_delays_stagger_by_word_and_char() {
        assert_eq!(letter_reveal_delay(0, 0), 0.3);
        assert!((letter_reveal_delay(1, 2) - 0.9).abs() < 1e-9);
    }
}
