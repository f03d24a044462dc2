//! View routing without a router: which page is shown and which project
//! overlay, if any, sits on top of it.

use crate::content::{ProjectId, SiteContent};
use crate::platform::Platform;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;
use thiserror::Error;

/// Delay before a fragment scroll is retried, long enough for a view switch
/// to mount the home sections.
pub const FRAGMENT_SCROLL_DEFER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Privacy,
    Success,
    Changelog,
    StyleGuide,
    SiteMap,
    NotFound,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown view `{0}`")]
pub struct ViewParseError(pub String);

impl View {
    pub const ALL: [View; 7] = [
        View::Home,
        View::Privacy,
        View::Success,
        View::Changelog,
        View::StyleGuide,
        View::SiteMap,
        View::NotFound,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Privacy => "privacy",
            Self::Success => "success",
            Self::Changelog => "changelog",
            Self::StyleGuide => "styleguide",
            Self::SiteMap => "sitemap",
            Self::NotFound => "404",
        }
    }

    /// Unknown identifiers are a programming error; render home rather than nothing.
    pub fn parse_or_home(value: &str) -> Self {
        value.parse().unwrap_or_else(|error: ViewParseError| {
            warn!("{error}, falling back to home");
            Self::Home
        })
    }
}

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "privacy" => Ok(Self::Privacy),
            "success" => Ok(Self::Success),
            "changelog" => Ok(Self::Changelog),
            "styleguide" => Ok(Self::StyleGuide),
            "sitemap" => Ok(Self::SiteMap),
            "404" | "notfound" => Ok(Self::NotFound),
            _ => Err(ViewParseError(value.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("project {0} does not exist")]
    UnknownProject(ProjectId),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_view: View,
    pub selected_project: Option<ProjectId>,
}

pub type NavigationSubscriber = Rc<dyn Fn(&NavigationState)>;

/// Keeps a subscriber registered until dropped.
pub struct NavigationSubscription {
    subscriber: NavigationSubscriber,
    subscribers: Rc<RefCell<Vec<NavigationSubscriber>>>,
}

impl Drop for NavigationSubscription {
    fn drop(&mut self) {
        self.subscribers
            .borrow_mut()
            .retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

/// Single writer for [`NavigationState`]. Views read snapshots and are
/// notified through subscriptions; all mutation goes through `navigate`,
/// `open_project` and `close_project`.
pub struct Navigator {
    state: RefCell<NavigationState>,
    content: Rc<SiteContent>,
    platform: Rc<dyn Platform>,
    subscribers: Rc<RefCell<Vec<NavigationSubscriber>>>,
    this: Weak<Navigator>,
}

impl Navigator {
    pub fn new(content: Rc<SiteContent>, platform: Rc<dyn Platform>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            state: RefCell::new(NavigationState::default()),
            content,
            platform,
            subscribers: Rc::new(RefCell::new(Vec::new())),
            this: this.clone(),
        })
    }

    pub fn snapshot(&self) -> NavigationState {
        *self.state.borrow()
    }

    pub fn content(&self) -> &Rc<SiteContent> {
        &self.content
    }

    pub fn subscribe(&self, subscriber: NavigationSubscriber) -> NavigationSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        NavigationSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let state = self.snapshot();
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&state);
        }
    }

    fn replace_state(&self, next: NavigationState) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let changed = *state != next;
            *state = next;
            changed
        };

        if changed {
            self.notify();
        }
    }

    /// Shows `view`. Going home also closes any open overlay and then scrolls,
    /// either to the `hash` fragment or to the top of the document.
    pub fn navigate(&self, view: View, hash: Option<&str>) {
        let previous = self.snapshot();
        let selected_project = match view {
            View::Home => None,
            _ => previous.selected_project,
        };

        info!("navigate {} -> {}", previous.current_view, view);
        self.replace_state(NavigationState {
            current_view: view,
            selected_project,
        });

        if view != View::Home {
            return;
        }

        match hash.map(fragment_id).filter(|id| !id.is_empty()) {
            Some(id) => {
                let switching_view = previous.current_view != View::Home;
                if switching_view || !self.platform.scroll_to_element(id) {
                    self.scroll_to_fragment_later(id);
                }
            }
            None => self.platform.scroll_to_top(),
        }
    }

    /// Scrolls to `hash` once the home sections have had time to mount.
    /// Dropped silently if the fragment never appears or the user has left
    /// the home view in the meantime.
    pub fn scroll_to_fragment_later(&self, hash: &str) {
        let id = fragment_id(hash).to_string();
        if id.is_empty() {
            return;
        }

        let navigator = self.this.clone();
        self.platform.defer(
            FRAGMENT_SCROLL_DEFER_MS,
            Box::new(move || {
                let Some(navigator) = navigator.upgrade() else {
                    return;
                };

                if navigator.snapshot().current_view != View::Home {
                    debug!("dropping scroll to #{id}: home view no longer shown");
                    return;
                }

                if !navigator.platform.scroll_to_element(&id) {
                    warn!("dropping scroll to #{id}: element not found");
                }
            }),
        );
    }

    pub fn open_project(&self, id: ProjectId) -> Result<(), NavigationError> {
        if !self.content.contains_project(id) {
            let error = NavigationError::UnknownProject(id);
            warn!("rejected open_project: {error}");
            return Err(error);
        }

        let previous = self.snapshot();
        info!("open project {id}");
        self.replace_state(NavigationState {
            selected_project: Some(id),
            ..previous
        });
        Ok(())
    }

    pub fn close_project(&self) {
        let previous = self.snapshot();
        if previous.selected_project.is_none() {
            return;
        }

        debug!("close project overlay");
        self.replace_state(NavigationState {
            selected_project: None,
            ..previous
        });
    }
}

fn fragment_id(hash: &str) -> &str {
    hash.trim().trim_start_matches('#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::{Effect, RecordingPlatform};
    use std::cell::Cell;

    fn navigator() -> (Rc<Navigator>, Rc<RecordingPlatform>) {
        let content = Rc::new(SiteContent::load().expect("embedded content is valid"));
        let platform = Rc::new(RecordingPlatform::default());
        (Navigator::new(content, platform.clone()), platform)
    }

    #[test]
    fn starts_on_home_without_overlay() {
        let (navigator, _) = navigator();

        assert_eq!(navigator.snapshot(), NavigationState::default());
        assert_eq!(navigator.snapshot().current_view, View::Home);
    }

    #[test]
    fn open_then_close_restores_every_view() {
        let (navigator, _) = navigator();
        let ids: Vec<ProjectId> = navigator.content().projects.iter().map(|p| p.id).collect();

        for view in View::ALL {
            for &id in &ids {
                navigator.navigate(view, None);
                navigator.open_project(id).expect("valid project id");
                assert_eq!(navigator.snapshot().current_view, view);
                assert_eq!(navigator.snapshot().selected_project, Some(id));

                navigator.close_project();
                assert_eq!(navigator.snapshot().current_view, view);
                assert_eq!(navigator.snapshot().selected_project, None);
            }
        }
    }

    #[test]
    fn navigating_home_always_clears_overlay() {
        let (navigator, _) = navigator();

        navigator.navigate(View::Changelog, None);
        navigator.open_project(2).expect("valid project id");
        navigator.navigate(View::Home, Some("#about"));

        assert_eq!(navigator.snapshot().selected_project, None);
        assert_eq!(navigator.snapshot().current_view, View::Home);
    }

    #[test]
    fn skyline_harbor_overlay_cycles_its_two_images() {
        use crate::carousel::Carousel;

        let (navigator, _) = navigator();
        navigator.open_project(4).expect("valid project id");

        let selected = navigator.snapshot().selected_project.expect("overlay open");
        let project = navigator.content().project(selected).expect("selected project exists");
        assert_eq!(project.title, "Skyline Harbor");

        let mut carousel = Carousel::new(project.images.len());
        assert_eq!((carousel.index(), carousel.image_count()), (0, 2));
        carousel.next();
        carousel.commit();
        assert_eq!(carousel.index(), 1);
        carousel.next();
        carousel.commit();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn navigating_elsewhere_keeps_overlay_open() {
        let (navigator, _) = navigator();

        navigator.open_project(1).expect("valid project id");
        navigator.navigate(View::Privacy, None);

        assert_eq!(navigator.snapshot().selected_project, Some(1));
    }

    #[test]
    fn unknown_project_is_rejected_without_state_change() {
        let (navigator, _) = navigator();
        navigator.navigate(View::SiteMap, None);
        let notified = Rc::new(Cell::new(0));
        let _subscription = {
            let notified = notified.clone();
            navigator.subscribe(Rc::new(move |_: &NavigationState| {
                notified.set(notified.get() + 1)
            }))
        };

        let result = navigator.open_project(99);

        assert_eq!(result, Err(NavigationError::UnknownProject(99)));
        assert_eq!(navigator.snapshot().selected_project, None);
        assert_eq!(navigator.snapshot().current_view, View::SiteMap);
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn home_without_hash_scrolls_to_top() {
        let (navigator, platform) = navigator();

        navigator.navigate(View::Privacy, None);
        assert!(platform.effects().is_empty());

        navigator.navigate(View::Home, None);
        assert_eq!(platform.effects(), vec![Effect::ScrollTop]);
    }

    #[test]
    fn hash_on_mounted_home_scrolls_immediately() {
        let (navigator, platform) = navigator();
        platform.mount("showcase");

        navigator.navigate(View::Home, Some("#showcase"));

        assert_eq!(platform.effects(), vec![Effect::ScrollTo("showcase".to_string())]);
        assert_eq!(platform.pending_tasks(), 0);
    }

    #[test]
    fn hash_from_changelog_defers_until_home_mounts() {
        let (navigator, platform) = navigator();
        navigator.navigate(View::Changelog, None);
        platform.mount("contact");

        navigator.navigate(View::Home, Some("#contact"));

        assert_eq!(navigator.snapshot().current_view, View::Home);
        assert_eq!(
            platform.effects(),
            vec![Effect::Deferred(FRAGMENT_SCROLL_DEFER_MS)]
        );

        platform.unmount_all();
        platform.mount("contact");
        platform.run_deferred();

        assert_eq!(
            platform.effects(),
            vec![
                Effect::Deferred(FRAGMENT_SCROLL_DEFER_MS),
                Effect::ScrollTo("contact".to_string()),
            ]
        );
    }

    #[test]
    fn missing_fragment_is_dropped_after_retry() {
        let (navigator, platform) = navigator();

        navigator.navigate(View::Home, Some("nowhere"));
        platform.run_deferred();

        assert_eq!(
            platform.effects(),
            vec![
                Effect::ScrollMissed("nowhere".to_string()),
                Effect::Deferred(FRAGMENT_SCROLL_DEFER_MS),
                Effect::ScrollMissed("nowhere".to_string()),
            ]
        );
        assert_eq!(platform.pending_tasks(), 0);
    }

    #[test]
    fn deferred_scroll_is_dropped_after_leaving_home() {
        let (navigator, platform) = navigator();
        navigator.navigate(View::Privacy, None);

        navigator.navigate(View::Home, Some("#history"));
        navigator.navigate(View::Success, None);
        platform.mount("history");
        platform.clear_effects();
        platform.run_deferred();

        assert!(platform.effects().is_empty());
    }

    #[test]
    fn subscribers_see_changes_until_dropped() {
        let (navigator, _) = navigator();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            navigator.subscribe(Rc::new(move |state: &NavigationState| {
                seen.borrow_mut().push(*state)
            }))
        };

        navigator.open_project(4).expect("valid project id");
        navigator.close_project();
        navigator.close_project();
        drop(subscription);
        navigator.navigate(View::Privacy, None);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].selected_project, Some(4));
        assert_eq!(seen[1].selected_project, None);
    }

    #[test]
    fn view_identifiers_round_trip_and_unknown_falls_back() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }

        assert_eq!(View::parse_or_home("notFound"), View::NotFound);
        assert_eq!(View::parse_or_home("blog"), View::Home);
        assert_eq!(
            "blog".parse::<View>(),
            Err(ViewParseError("blog".to_string()))
        );
    }
}
