mod hooks;
mod icons;
mod overlay;
mod pages;
mod sections;

use crate::content::{ProjectId, SiteContent};
use crate::navigation::{NavigationState, Navigator, View};
use crate::platform::{Platform, ThemeTransition};
use crate::theme::{Theme, ThemeState};
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use log::{error, warn};
use overlay::ProjectDetail;
use pages::{ChangelogPage, NotFoundPage, PrivacyPage, SiteMapPage, StyleGuidePage, SuccessPage};
use sections::HomeView;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// `(view, fragment)` requests emitted by every navigation control.
pub(crate) type NavigateCallback = Callback<(View, Option<String>)>;

pub(crate) fn navigate_to(
    on_navigate: &NavigateCallback,
    view: View,
    hash: Option<&str>,
) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    let hash = hash.map(ToString::to_string);
    Callback::from(move |_| on_navigate.emit((view, hash.clone())))
}

struct WebPlatform;

impl Platform for WebPlatform {
    fn scroll_to_top(&self) {
        if let Some(win) = window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn scroll_to_element(&self, id: &str) -> bool {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }

    fn apply_theme(&self, theme: Theme, transition: ThemeTransition) {
        match transition {
            ThemeTransition::Instant => apply_theme(theme),
            ThemeTransition::Animated => apply_theme_with_transition(theme),
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = classes.remove_1(theme.other_class());
        let _ = classes.add_1(theme.root_class());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

struct Services {
    navigator: Rc<Navigator>,
    theme: ThemeState,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let services = {
        let content = Rc::clone(&props.content);
        use_memo((), move |_| {
            let platform: Rc<dyn Platform> = Rc::new(WebPlatform);
            Services {
                navigator: Navigator::new(content, Rc::clone(&platform)),
                theme: ThemeState::new(platform),
            }
        })
    };
    let navigation = use_state_eq(|| services.navigator.snapshot());
    let theme = use_state_eq(|| services.theme.current());

    {
        let navigation = navigation.clone();
        let navigator = Rc::clone(&services.navigator);
        use_effect_with((), move |_| {
            let subscription = navigator.subscribe(Rc::new(move |state: &NavigationState| {
                navigation.set(*state);
            }));
            move || drop(subscription)
        });
    }

    let on_navigate: NavigateCallback = {
        let services = services.clone();
        Callback::from(move |(view, hash): (View, Option<String>)| {
            services.navigator.navigate(view, hash.as_deref());
        })
    };

    let on_open_project = {
        let services = services.clone();
        Callback::from(move |id: ProjectId| {
            if let Err(error) = services.navigator.open_project(id) {
                warn!("project card ignored: {error}");
            }
        })
    };

    let on_close_project = {
        let services = services.clone();
        Callback::from(move |_| services.navigator.close_project())
    };

    let on_toggle_theme = {
        let services = services.clone();
        let theme = theme.clone();
        Callback::from(move |_| theme.set(services.theme.toggle()))
    };

    let on_mount_fragment = {
        let services = services.clone();
        Callback::from(move |hash: String| services.navigator.scroll_to_fragment_later(&hash))
    };

    let content = Rc::clone(&props.content);
    let page = match navigation.current_view {
        View::Home => html! {
            <HomeView
                content={Rc::clone(&content)}
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                on_navigate={on_navigate.clone()}
                on_open_project={on_open_project}
                on_mount_fragment={on_mount_fragment}
            />
        },
        View::Privacy => html! { <PrivacyPage on_navigate={on_navigate.clone()} /> },
        View::Success => html! { <SuccessPage on_navigate={on_navigate.clone()} /> },
        View::Changelog => html! {
            <ChangelogPage entries={content.changelog.clone()} on_navigate={on_navigate.clone()} />
        },
        View::StyleGuide => html! { <StyleGuidePage on_navigate={on_navigate.clone()} /> },
        View::SiteMap => html! {
            <SiteMapPage groups={content.sitemap.clone()} on_navigate={on_navigate.clone()} />
        },
        View::NotFound => html! { <NotFoundPage on_navigate={on_navigate.clone()} /> },
    };

    let overlay = navigation
        .selected_project
        .and_then(|id| content.project(id))
        .map(|project| {
            html! {
                <ProjectDetail
                    key={project.id}
                    project={project.clone()}
                    on_close={on_close_project.clone()}
                />
            }
        });

    html! {
        <div class="font-sans text-stone-900 dark:text-white bg-white dark:bg-[#0a0a0a] min-h-screen transition-colors duration-300 selection:bg-teal-500 selection:text-white">
            <main class="relative z-10">
                {page}
            </main>
            {overlay}
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let content = match SiteContent::load() {
        Ok(content) => Rc::new(content),
        Err(err) => {
            error!("site content rejected: {err}");
            return;
        }
    };

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root_and_props(root, AppProps { content }).render();
}
