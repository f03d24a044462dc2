//! Home page sections, top to bottom.

use super::hooks::{
    use_active_section, use_counter, use_on_screen, use_pointer_position, use_scroll_fraction,
    viewport_size, WindowListener,
};
use super::{icons, navigate_to, NavigateCallback};
use crate::content::{Client, Era, MenuItem, Project, ProjectId, SiteContent, Stat};
use crate::motion::{
    horizontal_offset, letter_reveal_delay, nearest_to_center, section_label,
    trigger_line_index, PointerOffset, FEATURED_DESKTOP_MIN_WIDTH, PARTNER_STRIP_STEP_RATIO,
    REVEAL_OPTIONS, SHOWCASE_OVERSCROLL_PX, SHOWCASE_REMEASURE_DELAY_MS,
};
use crate::navigation::View;
use crate::theme::Theme;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions, WheelEvent};
use yew::prelude::*;

const HOME_SECTIONS: [&str; 7] = [
    "home",
    "about",
    "featured-categories",
    "showcase",
    "partners",
    "history",
    "contact",
];
const HERO_TITLE: &str = "BUILDING VISIONS";
const HERO_BACK_LAYER: f64 = -10.0;
const HERO_FRONT_LAYER: f64 = -25.0;
const ABOUT_IMAGE_DRIFT_PX: f64 = 8.0;
const HISTORY_CARD_SHIFT_PX: f64 = 30.0;
const HISTORY_CARD_TILT_DEG: f64 = 10.0;
const PARTNER_STRIP_CARDS: usize = 3;

fn open_project(on_open_project: &Callback<ProjectId>, id: ProjectId) -> Callback<MouseEvent> {
    let on_open_project = on_open_project.clone();
    Callback::from(move |_| on_open_project.emit(id))
}

fn first_image(project: &Project) -> String {
    project.images.first().cloned().unwrap_or_default()
}

fn element_span(node: &NodeRef) -> (f64, f64) {
    node.cast::<Element>()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            (rect.top(), rect.bottom())
        })
        .unwrap_or((f64::INFINITY, f64::NEG_INFINITY))
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    pub content: Rc<SiteContent>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_navigate: NavigateCallback,
    pub on_open_project: Callback<ProjectId>,
    /// Receives the location fragment present when the home view mounts.
    pub on_mount_fragment: Callback<String>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let active_section = use_active_section(&HOME_SECTIONS);

    {
        let on_mount_fragment = props.on_mount_fragment.clone();
        use_effect_with((), move |_| {
            let hash = window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            if !hash.is_empty() {
                on_mount_fragment.emit(hash);
            }
            || ()
        });
    }

    let content = &props.content;

    html! {
        <div class="animate-[fadeIn_0.5s_ease-out]">
            <Sidebar
                menu={content.menu.clone()}
                active_section={active_section}
                theme={props.theme}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_navigate={props.on_navigate.clone()}
            />
            <Hero on_navigate={props.on_navigate.clone()} />
            <Stats stats={content.stats.clone()} />
            <About />
            <FeaturedCategories
                projects={content.featured().to_vec()}
                on_open_project={props.on_open_project.clone()}
            />
            <Showcase
                projects={content.showcase().cloned().collect::<Vec<_>>()}
                on_open_project={props.on_open_project.clone()}
            />
            <Partners content={Rc::clone(content)} on_open_project={props.on_open_project.clone()} />
            <History eras={content.eras.clone()} />
            <Footer on_navigate={props.on_navigate.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub menu: Vec<MenuItem>,
    pub active_section: Option<String>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_navigate: NavigateCallback,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let open = use_state_eq(|| false);

    let on_open = {
        let open = open.clone();
        Callback::from(move |_| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };
    let on_toggle_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    let label = props.active_section.as_deref().and_then(section_label);
    let contact_active = props.active_section.as_deref() == Some("contact");
    let panel_position = if *open { "translate-x-0" } else { "-translate-x-full" };

    html! {
        <>
            <div class="fixed top-0 left-0 z-50 flex flex-col justify-between items-center transition-colors duration-300 bg-white border-black/10 dark:bg-[#0a0a0a] dark:border-white/10 w-16 md:w-20 h-full border-r">
                <div class="h-20 w-full flex items-center justify-center">
                    <button onclick={on_open} aria-label="Open Menu" class="p-4 hover:text-teal-600 dark:hover:text-teal-400 transition-colors">
                        {icons::menu()}
                    </button>
                </div>

                <button
                    onclick={navigate_to(&props.on_navigate, View::Home, Some("#contact"))}
                    aria-label="Go to Contact Section"
                    class="flex items-center justify-center p-2 hover:text-teal-600 dark:hover:text-teal-400 transition-colors md:flex-grow"
                >
                    <div class="flex flex-col items-center gap-4">
                        if let Some(label) = label {
                            <span class="text-[10px] tracking-[0.3em] uppercase text-teal-500 font-bold hidden md:block vertical-rl animate-[fadeIn_0.5s_ease-out]">
                                {label}
                            </span>
                        }
                        <span class={classes!("font-bold", "tracking-[0.2em]", "text-xs", "uppercase", "vertical-rl", contact_active.then_some("text-teal-500"))}>
                            {"Contact"}
                        </span>
                    </div>
                </button>

                <div class="h-40 w-full flex items-center justify-center pb-8">
                    <button
                        onclick={navigate_to(&props.on_navigate, View::Home, Some("#home"))}
                        aria-label="Go to Home"
                        class="font-space font-bold text-[#2dd4bf] text-xl tracking-tighter hover:opacity-80 transition-opacity vertical-rl whitespace-nowrap"
                    >
                        {"WONDROUS"}
                    </button>
                </div>
            </div>

            <div class={classes!("fixed", "inset-0", "z-[60]", "bg-white", "dark:bg-[#0a0a0a]", "transition-transform", "duration-500", panel_position)}>
                <div class="absolute top-0 left-0 w-16 md:w-20 h-full border-r border-black/10 dark:border-white/10 flex flex-col items-center z-[70] pointer-events-auto">
                    <div class="h-20 w-full flex items-center justify-center">
                        <button onclick={on_close} aria-label="Close Menu" class="p-4 hover:text-teal-600 dark:hover:text-teal-400 transition-colors">
                            {icons::close()}
                        </button>
                    </div>
                    <div class="mt-8 flex flex-col items-center gap-4">
                        <button
                            onclick={on_toggle_theme}
                            aria-label={props.theme.toggle_label()}
                            class="p-2 hover:text-teal-500 transition-colors text-gray-600 dark:text-gray-400"
                        >
                            if props.theme.is_dark() { {icons::sun()} } else { {icons::moon()} }
                        </button>
                    </div>
                </div>

                <div class="h-full flex flex-col justify-center pl-24 md:pl-40 py-20 relative">
                    <ul class="space-y-4">
                        {for props.menu.iter().map(|item| {
                            let onclick = {
                                let open = open.clone();
                                let on_navigate = props.on_navigate.clone();
                                let hash = format!("#{}", item.section);
                                Callback::from(move |_: MouseEvent| {
                                    open.set(false);
                                    on_navigate.emit((View::Home, Some(hash.clone())));
                                })
                            };
                            html! {
                                <li key={item.section.clone()} class="overflow-hidden">
                                    <button
                                        {onclick}
                                        class="block text-4xl md:text-7xl font-bold font-space lowercase tracking-tight hover:ml-4 hover:text-teal-600 dark:hover:text-teal-400 transition-all duration-300"
                                    >
                                        {item.label.clone()}
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                    <div class="absolute bottom-20 left-24 md:left-40">
                        <h2 class="text-6xl md:text-8xl font-bold font-space leading-none tracking-tighter text-[#2dd4bf]">
                            {"Wondrous."}
                        </h2>
                    </div>
                </div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: NavigateCallback,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let pointer = use_pointer_position();
    let layer_style = |coefficient: f64| {
        let (x, y) = pointer.scaled(coefficient);
        format!("transform: translate({x:.2}px, {y:.2}px) scale(1.05);")
    };

    let title = HERO_TITLE.split(' ').enumerate().map(|(word_index, word)| {
        html! {
            <span key={word_index} class="flex">
                {for word.chars().enumerate().map(|(char_index, letter)| html! {
                    <span
                        key={char_index}
                        class={classes!(
                            "inline-block",
                            "opacity-0",
                            "animate-[particleReveal_1s_cubic-bezier(0.16,1,0.3,1)_forwards]",
                            (word_index == 1).then_some("text-outline"),
                        )}
                        style={format!("animation-delay: {:.2}s;", letter_reveal_delay(word_index, char_index))}
                    >
                        {letter.to_string()}
                    </span>
                })}
            </span>
        }
    });

    html! {
        <section id="home" class="relative h-screen min-h-[600px] md:min-h-[800px] flex items-center justify-center overflow-hidden pl-16 md:pl-20">
            <div class="absolute inset-0 z-0 bg-black">
                <div class="absolute inset-0 z-0 transition-transform duration-1000 ease-out" style={layer_style(HERO_BACK_LAYER)}>
                    <img src="https://images.unsplash.com/photo-1534088568595-a066f410bcda?q=80&w=2000" alt="Sky" class="w-full h-full object-cover opacity-80" />
                </div>
                <div class="absolute inset-0 z-10 transition-transform duration-1000 ease-out" style={layer_style(HERO_FRONT_LAYER)}>
                    <img
                        src="https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070&auto=format&fit=crop"
                        alt="Modern Architecture"
                        class="w-full h-full object-cover mt-20 grayscale hero-mask"
                    />
                </div>
                <div class="absolute inset-0 bg-gradient-to-t from-gray-50/90 via-transparent to-transparent dark:from-[#0a0a0a] z-20"></div>
            </div>

            <div class="container mx-auto px-6 relative z-30 text-center">
                <p class="text-teal-600 dark:text-teal-400 font-medium tracking-[0.2em] mb-4 opacity-0 animate-[slideUp_0.8s_ease-out_0.2s_forwards]">{"EST. 1998"}</p>
                <h1 class="text-4xl sm:text-6xl md:text-8xl lg:text-9xl font-bold font-space leading-[0.9] tracking-tight mb-8 dark:text-white text-stone-900 flex flex-wrap justify-center gap-x-2 sm:gap-x-6">
                    {for title}
                </h1>
                <p class="max-w-xl mx-auto dark:text-gray-300 text-white text-base md:text-lg mb-10 leading-relaxed opacity-0 animate-[slideUp_0.8s_ease-out_1.2s_forwards] mix-blend-difference">
                    {"General contractor for high-end commercial spaces and bespoke interior design. We craft environments that inspire."}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 opacity-0 animate-[slideUp_0.8s_ease-out_1.4s_forwards]">
                    <button
                        onclick={navigate_to(&props.on_navigate, View::Home, Some("#featured-categories"))}
                        class="group flex items-center gap-2 bg-stone-900 dark:bg-white text-white dark:text-black px-8 py-4 font-bold hover:bg-teal-600 dark:hover:bg-teal-600 hover:text-white transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-teal-400"
                    >
                        {"View Projects"}
                        <span class="group-hover:translate-x-1 transition-transform">{icons::arrow_right()}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    pub stat: Stat,
}

#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let node = use_node_ref();
    let count = use_counter(props.stat.end, node.clone());

    html! {
        <div ref={node} class="p-4">
            <div class="text-3xl md:text-6xl font-bold font-space text-teal-500 mb-2">
                {format!("{count}{}", props.stat.suffix)}
            </div>
            <div class="text-stone-400 text-xs md:text-sm uppercase tracking-wider font-medium">
                {props.stat.label.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: Vec<Stat>,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    html! {
        <section class="py-16 md:py-20 pl-16 md:pl-20 bg-stone-950 border-y border-stone-800">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 text-center">
                    {for props.stats.iter().map(|stat| html! {
                        <StatItem key={stat.label.clone()} stat={stat.clone()} />
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let visible = use_on_screen(node.clone(), REVEAL_OPTIONS);
    let pointer = use_pointer_position();

    let image_style = |direction: f64, delay: &str| {
        let transform = if visible {
            let (x, y) = pointer.scaled(ABOUT_IMAGE_DRIFT_PX * direction);
            format!("translate({x:.2}px, {y:.2}px)")
        } else {
            "scale(0.9)".to_string()
        };
        format!(
            "transition-delay: {delay}; transform: {transform}; transition: opacity 1s ease-out, transform 0.8s ease-out;"
        )
    };
    let active = visible.then_some("active");

    html! {
        <section id="about" class="py-16 md:py-32 pl-16 md:pl-20 bg-gray-50 dark:bg-[#0a0a0a]">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row gap-12 md:gap-16 items-start">
                    <div class="md:w-1/2 md:sticky md:top-32">
                        <h2 class="text-3xl md:text-5xl font-bold font-space mb-6 leading-tight dark:text-white text-stone-900">
                            {"Crafting Spaces"}<br />
                            {"Since "}<span class="text-teal-600 dark:text-teal-400">{"1998"}</span>
                        </h2>
                        <div ref={node} class={classes!("space-y-6", "dark:text-gray-400", "text-stone-600", "leading-relaxed", "reveal", active)}>
                            <p>
                                {"Wondrous is more than a construction company. We are partners in realizing your architectural dreams. With over two decades of experience in commercial and high-end residential sectors, we bring precision, passion, and unparalleled expertise to every project."}
                            </p>
                        </div>
                    </div>
                    <div class="md:w-1/2 relative">
                        <div class="grid grid-cols-2 gap-4">
                            <img
                                src="https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=1200&auto=format&fit=crop"
                                class={classes!("w-full", "h-[300px]", "md:h-[400px]", "object-cover", "rounded-sm", "reveal-scale", active)}
                                style={image_style(1.0, "0.2s")}
                                alt="Interior Detail 1"
                            />
                            <img
                                src="https://images.unsplash.com/photo-1600607686527-6fb886090705?q=80&w=1200&auto=format&fit=crop"
                                class={classes!("w-full", "h-[300px]", "md:h-[400px]", "object-cover", "mt-8", "md:mt-12", "rounded-sm", "reveal-scale", active)}
                                style={image_style(-1.0, "0.4s")}
                                alt="Interior Detail 2"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub projects: Vec<Project>,
    pub on_open_project: Callback<ProjectId>,
}

#[function_component(FeaturedCategories)]
pub fn featured_categories(props: &ProjectListProps) -> Html {
    let active_point = use_state_eq(|| 0_usize);
    let points = use_memo(props.projects.len(), |count| {
        (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    {
        let active_point = active_point.clone();
        use_effect_with(points.clone(), move |points| {
            let points = Rc::clone(points);
            let listener = WindowListener::new("scroll", move |_| {
                let (viewport_width, viewport_height) = viewport_size();
                if viewport_width < FEATURED_DESKTOP_MIN_WIDTH {
                    return;
                }

                let spans: Vec<(f64, f64)> = points.iter().map(element_span).collect();
                if let Some(index) = trigger_line_index(&spans, viewport_height * 0.5) {
                    active_point.set(index);
                }
            });
            move || drop(listener)
        });
    }

    let projects = &props.projects;
    let active = (*active_point).min(projects.len().saturating_sub(1));
    let on_sticky_click = {
        let on_open_project = props.on_open_project.clone();
        let id = projects.get(active).map(|project| project.id);
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = id {
                on_open_project.emit(id);
            }
        })
    };
    let view_button = |project: &Project| {
        html! {
            <button
                onclick={open_project(&props.on_open_project, project.id)}
                class="inline-block px-6 py-3 border border-stone-300 dark:border-stone-700 text-sm font-bold uppercase tracking-widest hover:bg-teal-600 dark:hover:bg-teal-600 hover:border-teal-600 hover:text-white transition-colors dark:text-white text-stone-900 focus:outline-none focus:ring-2 focus:ring-teal-400"
            >
                {"View Project"}
            </button>
        }
    };

    html! {
        <section id="featured-categories" class="pl-16 md:pl-20 bg-white dark:bg-[#0f0f0f] transition-colors duration-300">
            <div class="container mx-auto">
                <div class="py-16 md:py-20 px-6">
                    <h2 class="text-3xl md:text-6xl font-space font-bold max-w-2xl dark:text-white text-stone-900 leading-tight">
                        {"check out our latest"}<br />{"featured projects"}
                    </h2>
                </div>

                <div class="lg:hidden flex flex-col space-y-16 px-6 pb-16">
                    {for projects.iter().map(|project| html! {
                        <div key={project.id} class="flex flex-col">
                            <div class="w-full aspect-[4/3] md:aspect-video mb-6 overflow-hidden relative group rounded-sm" onclick={open_project(&props.on_open_project, project.id)}>
                                <img src={first_image(project)} alt={project.title.clone()} class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105" />
                            </div>
                            <div>
                                <div class="mb-4 text-teal-600 dark:text-teal-400">{icons::hexagon()}</div>
                                <h3 class="text-3xl font-space font-bold mb-4 dark:text-white text-stone-900">{project.title.clone()}</h3>
                                <p class="text-gray-600 dark:text-gray-400 mb-6 leading-relaxed">{project.description.clone()}</p>
                                {view_button(project)}
                            </div>
                        </div>
                    })}
                </div>

                <div class="hidden lg:flex flex-row relative">
                    <div class="w-1/2 h-screen sticky top-0 flex items-center justify-center overflow-hidden bg-gray-100 dark:bg-stone-900 group cursor-pointer z-10" onclick={on_sticky_click}>
                        {for projects.iter().enumerate().map(|(index, project)| html! {
                            <img
                                key={project.id}
                                src={first_image(project)}
                                alt={project.title.clone()}
                                class={classes!(
                                    "absolute", "inset-0", "w-full", "h-full", "object-cover", "transition-all", "duration-1000", "ease-in-out",
                                    if index == active { "opacity-100 scale-100" } else { "opacity-0 scale-110" }
                                )}
                            />
                        })}
                    </div>
                    <div class="w-1/2">
                        {for projects.iter().zip(points.iter()).enumerate().map(|(index, (project, point))| html! {
                            <div key={project.id} ref={point.clone()} class="scroll-point min-h-screen flex items-center px-16 py-20 border-b border-gray-200 dark:border-stone-800 last:border-0 bg-white dark:bg-[#0f0f0f] relative z-20">
                                <div class={classes!(
                                    "transition-all", "duration-1000", "ease-out",
                                    if index == active { "opacity-100 translate-y-0" } else { "opacity-20 translate-y-10" }
                                )}>
                                    <div class="mb-8 text-teal-600 dark:text-teal-400">{icons::hexagon()}</div>
                                    <h3 class="text-5xl font-bold font-space mb-6 dark:text-white text-stone-900">{project.title.clone()}</h3>
                                    <p class="text-lg leading-relaxed dark:text-gray-400 text-stone-600 mb-8 line-clamp-3">{project.description.clone()}</p>
                                    {view_button(project)}
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Showcase)]
pub fn showcase(props: &ProjectListProps) -> Html {
    let container = use_node_ref();
    let strip = use_node_ref();
    let fraction = use_scroll_fraction(container.clone());
    // (strip scroll width, viewport width)
    let extent = use_state_eq(|| (0.0_f64, 0.0_f64));

    {
        let extent = extent.clone();
        use_effect_with((strip.clone(), props.projects.len()), move |(strip, _)| {
            let strip = strip.clone();
            let measure = Rc::new(move || {
                if let Some(element) = strip.cast::<Element>() {
                    let (viewport_width, _) = viewport_size();
                    extent.set((f64::from(element.scroll_width()), viewport_width));
                }
            });

            measure();
            let listener = {
                let measure = Rc::clone(&measure);
                WindowListener::new("resize", move |_| measure())
            };
            let remeasure = Timeout::new(SHOWCASE_REMEASURE_DELAY_MS, move || measure());

            move || {
                drop(listener);
                drop(remeasure);
            }
        });
    }

    let (content_width, viewport_width) = *extent;
    let offset = horizontal_offset(fraction, content_width, viewport_width, SHOWCASE_OVERSCROLL_PX);

    html! {
        <section id="showcase" ref={container} class="relative h-[400vh] bg-stone-100 dark:bg-stone-950 transition-colors duration-300 pl-16 md:pl-20">
            <div class="sticky top-0 h-screen overflow-hidden flex flex-col justify-center">
                <div class="container mx-auto px-6 mb-8 lg:mb-16">
                    <h2 class="text-3xl md:text-6xl font-space font-bold max-w-4xl leading-tight dark:text-white text-stone-900">
                        {"our featured projects showcase,"}<br />
                        {"where "}<span class="text-teal-600 dark:text-teal-400">{"innovation"}</span>{" meets artistry"}
                    </h2>
                </div>
                <div ref={strip} class="flex gap-4 md:gap-8 px-6 will-change-transform" style={format!("transform: translateX({:.2}px);", -offset)}>
                    {for props.projects.iter().map(|project| html! {
                        <div
                            key={project.id}
                            onclick={open_project(&props.on_open_project, project.id)}
                            class="relative flex-none w-[80vw] md:w-[60vw] lg:w-[40vw] aspect-[4/3] md:aspect-[16/9] overflow-hidden group cursor-pointer"
                        >
                            <img src={first_image(project)} alt={project.title.clone()} class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105" />
                            <div class="absolute bottom-0 left-0 p-6 bg-gradient-to-t from-black/80 to-transparent w-full">
                                <span class="text-white font-space font-bold text-xl group-hover:text-teal-400 transition-colors">{project.title.clone()}</span>
                                <p class="text-gray-300 text-sm mt-1">{project.category.clone()}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PartnersProps {
    pub content: Rc<SiteContent>,
    pub on_open_project: Callback<ProjectId>,
}

#[function_component(Partners)]
pub fn partners(props: &PartnersProps) -> Html {
    let selected = use_state_eq(|| None::<usize>);
    let active_card = use_state_eq(|| 0_usize);
    let hovered = use_state_eq(|| None::<String>);
    let cursor = use_node_ref();
    let strip = use_node_ref();
    let cards = use_memo((), |_| {
        (0..PARTNER_STRIP_CARDS)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });

    {
        let cursor = cursor.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::new("mousemove", move |event| {
                let (Some(event), Some(tooltip)) = (
                    event.dyn_ref::<MouseEvent>(),
                    cursor.cast::<HtmlElement>(),
                ) else {
                    return;
                };
                let _ = tooltip.style().set_property(
                    "transform",
                    &format!("translate({}px, {}px)", event.client_x(), event.client_y()),
                );
            });
            move || drop(listener)
        });
    }

    {
        let active_card = active_card.clone();
        use_effect_with(*selected, move |selected| {
            if selected.is_some() {
                set_body_overflow("hidden");
                active_card.set(0);
            } else {
                set_body_overflow("unset");
            }
            || set_body_overflow("unset")
        });
    }

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    let close_button = {
        let selected = selected.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            selected.set(None);
        })
    };
    let step = |direction: f64| {
        let strip = strip.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            let Some(element) = strip.cast::<Element>() else {
                return;
            };
            let (viewport_width, _) = viewport_size();
            let options = ScrollToOptions::new();
            options.set_left(direction * viewport_width * PARTNER_STRIP_STEP_RATIO);
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_by_with_scroll_to_options(&options);
        })
    };
    let on_strip_scroll = {
        let strip = strip.clone();
        let cards = Rc::clone(&cards);
        let active_card = active_card.clone();
        Callback::from(move |_: Event| {
            let Some(container) = strip.cast::<Element>() else {
                return;
            };
            let container_rect = container.get_bounding_client_rect();
            let centres: Vec<f64> = cards
                .iter()
                .filter_map(|card| card.cast::<Element>())
                .map(|card| {
                    let rect = card.get_bounding_client_rect();
                    rect.left() + rect.width() / 2.0 - container_rect.left()
                })
                .collect();
            let container_centre = f64::from(container.client_width()) / 2.0;
            if let Some(index) = nearest_to_center(&centres, container_centre) {
                active_card.set(index);
            }
        })
    };
    let on_strip_wheel = {
        let strip = strip.clone();
        Callback::from(move |event: WheelEvent| {
            if let Some(element) = strip.cast::<Element>() {
                let delta = event.delta_y() + event.delta_x();
                element.set_scroll_left(element.scroll_left() + delta as i32);
            }
        })
    };

    let content = &props.content;
    let client: Option<&Client> = selected.and_then(|index| content.clients.get(index));
    let tooltip_opacity = if hovered.is_some() && client.is_none() { 1 } else { 0 };

    let grid = content.clients.iter().enumerate().map(|(index, item)| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(index)))
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            let name = item.name.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(name.clone())))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        html! {
            <div
                key={item.name.clone()}
                {onclick}
                {onmouseenter}
                {onmouseleave}
                class="group bg-white dark:bg-[#0a0a0a] aspect-[4/3] md:aspect-[16/9] flex flex-col items-center justify-center hover:bg-white dark:hover:bg-white transition-colors cursor-pointer p-8 relative overflow-hidden"
            >
                <div class="w-32 h-16 md:w-48 md:h-24 flex items-center justify-center">
                    <img
                        src={item.logo.clone()}
                        alt={item.name.clone()}
                        class="w-full h-full object-contain grayscale opacity-60 group-hover:grayscale-0 group-hover:opacity-100 transition-all duration-500 dark:brightness-0 dark:invert dark:group-hover:brightness-100 dark:group-hover:invert-0"
                    />
                </div>
            </div>
        }
    });

    let overlay = client.map(|client| {
        let strip_cards = cards.iter().enumerate().filter_map(|(index, node)| {
            let project = content.partner_card_project(index)?;
            let is_active = *active_card == index;
            let onmouseenter = {
                let active_card = active_card.clone();
                Callback::from(move |_: MouseEvent| active_card.set(index))
            };
            let reveal = if is_active { "translate-y-0 opacity-100" } else { "translate-y-4 opacity-0" };
            Some(html! {
                <div
                    key={index}
                    ref={node.clone()}
                    onclick={open_project(&props.on_open_project, project.id)}
                    {onmouseenter}
                    class={classes!(
                        "relative", "flex-none", "snap-center", "w-[85vw]", "md:w-[60vw]", "lg:w-[45vw]", "aspect-[16/9]",
                        "bg-stone-900/50", "shadow-2xl", "overflow-hidden", "group", "select-none", "rounded-sm", "border",
                        "transition-all", "duration-700", "ease-out", "cursor-pointer",
                        if is_active { "border-teal-500/80 scale-100 opacity-100 z-10" } else { "border-white/10 scale-90 opacity-40 hover:opacity-60" }
                    )}
                >
                    <img
                        src={first_image(project)}
                        alt={format!("{} Project {}", client.name, index + 1)}
                        class="w-full h-full object-cover transition-all duration-1000 ease-in-out"
                        style={if is_active { "filter: none;" } else { "filter: grayscale(100%) contrast(80%);" }}
                    />
                    <div class="absolute bottom-0 left-0 w-full p-4 md:p-6 flex flex-col justify-end">
                        <h3 class={classes!("text-xl", "md:text-3xl", "font-space", "font-bold", "text-white", "mb-2", "transition-all", "duration-1000", reveal)}>
                            {project.title.clone()}
                        </h3>
                        <div class={classes!("flex", "items-center", "gap-3", "text-gray-300", "text-xs", "md:text-sm", "uppercase", "tracking-wider", "transition-all", "duration-1000", reveal)}>
                            <span class="text-teal-400 font-bold">{project.year.clone()}</span>
                            <span class="w-1 h-1 bg-white/40 rounded-full"></span>
                            <span>{project.category.clone()}</span>
                        </div>
                        <div class={classes!("mt-4", "flex", "items-center", "gap-2", "text-teal-400", "text-xs", "font-bold", "uppercase", "tracking-widest", "transition-all", "duration-1000", reveal)}>
                            <span>{"View Project"}</span>
                            {icons::arrow_right()}
                        </div>
                    </div>
                </div>
            })
        });

        let backgrounds = (0..PARTNER_STRIP_CARDS).filter_map(|index| {
            let project = content.partner_card_project(index)?;
            Some(html! {
                <img
                    key={index}
                    src={first_image(project)}
                    alt="Background"
                    class={classes!(
                        "absolute", "inset-0", "w-full", "h-full", "object-cover", "blur-sm", "scale-105", "transition-opacity", "duration-700",
                        if *active_card == index { "opacity-100" } else { "opacity-0" }
                    )}
                />
            })
        });

        html! {
            <div class="fixed inset-0 z-[100] overflow-hidden flex flex-col animate-[fadeIn_0.5s_ease-out]" onclick={close.clone()}>
                <div class="absolute inset-0 z-0">
                    {for backgrounds}
                    <div class="absolute inset-0 bg-stone-900/40 backdrop-blur-md"></div>
                    <div class="absolute inset-0 bg-gradient-to-t from-black via-stone-900/60 to-teal-900/30 mix-blend-multiply"></div>
                </div>
                <button
                    onclick={close_button.clone()}
                    aria-label="Close client details"
                    class="absolute top-6 right-6 z-[110] p-3 text-white/70 hover:text-white transition-all hover:rotate-90 duration-300 bg-black/20 rounded-full hover:bg-white/10 backdrop-blur-md"
                >
                    {icons::close()}
                </button>
                <div class="relative z-10 flex flex-col h-full pt-20 pb-8 md:pb-12">
                    <div class="flex-none px-6 md:px-20 mb-8 md:mb-0 max-w-4xl">
                        <div class="h-16 mb-6 opacity-0 animate-[fadeIn_0.5s_ease-out_0.2s_forwards]">
                            <img src={client.logo.clone()} alt={client.name.clone()} class="h-full object-contain brightness-0 invert" />
                        </div>
                        <p class="text-gray-300 text-sm md:text-xl max-w-md leading-relaxed border-l-2 border-teal-500 pl-6 opacity-0 animate-[slideUp_0.5s_ease-out_0.4s_forwards]">
                            {client.description.clone()}
                        </p>
                    </div>
                    <div class="flex-grow flex items-center relative w-full">
                        <button onclick={step(-1.0)} aria-label="Scroll projects left" class="absolute left-2 md:left-8 top-1/2 -translate-y-1/2 z-30 p-2 md:p-4 bg-white/5 hover:bg-white/10 border border-white/10 backdrop-blur-md rounded-full text-white hidden md:block">
                            {icons::chevron_left()}
                        </button>
                        <button onclick={step(1.0)} aria-label="Scroll projects right" class="absolute right-2 md:right-8 top-1/2 -translate-y-1/2 z-30 p-2 md:p-4 bg-white/5 hover:bg-white/10 border border-white/10 backdrop-blur-md rounded-full text-white hidden md:block">
                            {icons::chevron_right()}
                        </button>
                        <div
                            ref={strip.clone()}
                            class="w-full h-full overflow-x-auto flex items-center px-6 md:px-20 gap-6 md:gap-12 py-4 snap-x snap-mandatory no-scrollbar"
                            onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                            onscroll={on_strip_scroll.clone()}
                            onwheel={on_strip_wheel.clone()}
                        >
                            {for strip_cards}
                            <div class="w-4 md:w-20 flex-none"></div>
                        </div>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="partners" class="min-h-screen flex flex-col justify-center py-24 pl-16 md:pl-20 bg-white dark:bg-[#0a0a0a] transition-colors duration-300 border-y border-gray-200 dark:border-stone-800">
            <div ref={cursor} class="fixed top-0 left-0 pointer-events-none z-[120] transition-opacity duration-300 ease-out" style={format!("opacity: {tooltip_opacity};")}>
                <div class="bg-[#2dd4bf] text-stone-900 px-4 py-2 rounded-sm text-xs font-bold uppercase tracking-widest -translate-x-1/2 -translate-y-12 shadow-2xl whitespace-nowrap">
                    {(*hovered).clone().unwrap_or_default()}
                </div>
            </div>

            <div class="container mx-auto px-6">
                <div class="mb-12">
                    <h2 class="text-3xl font-space font-bold dark:text-white text-stone-900 mb-2">{"Trusted By"}</h2>
                    <p class="dark:text-gray-400 text-stone-600">{"Our esteemed clients and partners"}</p>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-px bg-black/10 dark:bg-white/10 border border-black/10 dark:border-white/10">
                    {for grid}
                </div>
            </div>

            {overlay}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    pub eras: Vec<Era>,
}

#[function_component(History)]
pub fn history(props: &HistoryProps) -> Html {
    let active_era = use_state_eq(|| None::<usize>);
    let pointer = use_state_eq(PointerOffset::default);
    let node = use_node_ref();
    let visible = use_on_screen(node.clone(), REVEAL_OPTIONS);

    let onmousemove = {
        let pointer = pointer.clone();
        Callback::from(move |event: MouseEvent| {
            let (width, height) = viewport_size();
            pointer.set(PointerOffset::from_client(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                width,
                height,
            ));
        })
    };
    let on_list_leave = {
        let active_era = active_era.clone();
        Callback::from(move |_: MouseEvent| active_era.set(None))
    };

    let (shift_x, shift_y) = pointer.scaled(HISTORY_CARD_SHIFT_PX);
    let (tilt_x, tilt_y) = pointer.scaled(HISTORY_CARD_TILT_DEG);
    let card_style = format!(
        "transform: translate({shift_x:.2}px, {shift_y:.2}px) rotateY({tilt_x:.2}deg) rotateX({:.2}deg);",
        -tilt_y
    );
    let reveal = if visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-10" };

    html! {
        <section
            id="history"
            class="py-16 md:py-32 pl-16 md:pl-20 bg-gray-100 dark:bg-[#1a1a1a] dark:text-gray-200 text-stone-900 transition-colors duration-300 overflow-hidden"
            {onmousemove}
        >
            <div class="container mx-auto px-6" ref={node}>
                <h2 class={classes!("text-2xl", "md:text-3xl", "font-space", "font-medium", "mb-12", "md:mb-16", "flex", "items-center", "gap-4", "transition-all", "duration-1000", reveal)}>
                    <span class="w-2 h-2 border border-current inline-block"></span>{" In short"}
                </h2>

                <div class="flex flex-col lg:flex-row gap-12 md:gap-16 relative">
                    <div class="lg:w-1/2 relative z-10">
                        <div class="space-y-12 md:space-y-16" onmouseleave={on_list_leave}>
                            {for props.eras.iter().enumerate().map(|(index, era)| {
                                let is_active = *active_era == Some(index);
                                let onmouseenter = {
                                    let active_era = active_era.clone();
                                    Callback::from(move |_: MouseEvent| active_era.set(Some(index)))
                                };
                                let style = format!(
                                    "opacity: {}; transform: translateY({}); transition-delay: {}ms;",
                                    if visible { 1 } else { 0 },
                                    if visible { "0" } else { "20px" },
                                    index * 150
                                );
                                html! {
                                    <div key={index} class="group relative pl-10 md:pl-12 cursor-pointer transition-all duration-700 ease-out" {style} {onmouseenter}>
                                        <div class={classes!("absolute", "left-0", "top-1", "w-[7px]", "h-[7px]", "border", "border-current", "transition-all", "duration-300", is_active.then_some("bg-current scale-150"))}></div>
                                        <h3 class={classes!("text-base", "md:text-lg", "font-bold", "font-space", "uppercase", "mb-2", "transition-colors", "duration-300", if is_active { "text-teal-600 dark:text-teal-400" } else { "opacity-50" })}>
                                            {format!("{} {}", era.year, era.title)}
                                        </h3>
                                        <p class={classes!("text-xs", "md:text-sm", "leading-relaxed", "max-w-md", "transition-all", "duration-300", if is_active { "opacity-100 translate-x-2" } else { "opacity-60" })}>
                                            {era.description.clone()}
                                        </p>
                                    </div>
                                }
                            })}
                        </div>
                    </div>

                    <div class="lg:w-1/2 relative min-h-[400px] md:min-h-[600px] perspective-1000 items-center justify-center pointer-events-none hidden md:flex">
                        <div
                            class={classes!("sticky", "top-32", "w-full", "max-w-sm", "aspect-[3/5]", "rounded-sm", "bg-stone-200", "dark:bg-[#111]", "shadow-2xl", "overflow-hidden", "transition-all", "duration-700", "ease-out", "will-change-transform", if active_era.is_some() { "opacity-100 scale-100" } else { "opacity-0 scale-95" })}
                            style={card_style}
                        >
                            {for props.eras.iter().enumerate().map(|(index, era)| html! {
                                <img
                                    key={index}
                                    src={era.image.clone()}
                                    alt={era.title.clone()}
                                    class={classes!("absolute", "inset-0", "w-full", "h-full", "object-cover", "transition-opacity", "duration-500", if *active_era == Some(index) { "opacity-100" } else { "opacity-0" })}
                                />
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: NavigateCallback,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let onsubmit = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_navigate.emit((View::Success, None));
        })
    };

    let utility_links = [
        (View::Privacy, "Privacy Policy", ""),
        (View::Changelog, "Change Log", ""),
        (View::StyleGuide, "Style Guide", ""),
        (View::SiteMap, "Site Map", ""),
        (View::NotFound, "404 Page", "opacity-50"),
    ];
    let input_class = "w-full bg-transparent border border-white/20 p-4 text-white placeholder-gray-500 focus:border-teal-400 focus:outline-none transition-colors";

    html! {
        <footer id="contact" class="pl-16 md:pl-20 bg-[#1e1e1e] text-white">
            <div class="flex flex-col lg:flex-row h-full">
                <div class="lg:w-1/2 p-8 md:p-12 lg:p-24 border-r border-white/10 flex flex-col justify-between">
                    <h2 class="text-4xl md:text-5xl lg:text-7xl font-bold font-space leading-none mb-4">
                        {"Wondrous."}<br />{"Studio"}
                    </h2>
                    <p class="mt-12 md:mt-20 max-w-md text-gray-400">
                        {"if you have any suggestion or desire for cooperation, feel free to contact us via our contact details or contact form"}
                    </p>
                </div>

                <div class="lg:w-1/2 flex flex-col">
                    <div class="flex flex-col md:flex-row border-b border-white/10">
                        <div class="p-8 md:p-16 w-full md:w-1/2 border-b md:border-b-0 md:border-r border-white/10">
                            <h4 class="text-gray-500 mb-6">{"Address"}</h4>
                            <p class="text-gray-300 leading-relaxed">
                                {"9, 81 Hanover Park,"}<br />{"London SE15 5HD,"}<br />{"United Kingdom"}
                            </p>
                        </div>
                        <div class="p-8 md:p-16 w-full md:w-1/2">
                            <ul class="space-y-2 text-gray-300">
                                <li>
                                    <button onclick={navigate_to(&props.on_navigate, View::Home, Some("#home"))} class="hover:text-teal-400 text-left">{"Home"}</button>
                                </li>
                                <li>
                                    <button onclick={navigate_to(&props.on_navigate, View::Home, Some("#featured-categories"))} class="hover:text-teal-400 text-left">{"Latest Projects"}</button>
                                </li>
                            </ul>
                        </div>
                    </div>

                    <div class="p-8 md:p-12 lg:p-16 flex-grow bg-[#222]">
                        <h3 class="text-2xl md:text-3xl font-bold font-space mb-8">{"share you idea"}<br />{"with our team"}</h3>
                        <form class="space-y-6" {onsubmit}>
                            <input type="text" placeholder="Your Name" required=true class={input_class} />
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <input type="email" placeholder="Email" required=true class={input_class} />
                                <input type="tel" placeholder="Phone" class={input_class} />
                            </div>
                            <textarea placeholder="Your Message" rows="4" class={classes!(input_class, "resize-none")}></textarea>
                            <button type="submit" class="px-8 py-3 border border-white text-white hover:bg-teal-600 hover:border-teal-600 transition-colors uppercase tracking-widest text-sm font-bold mt-4 focus:outline-none focus:ring-2 focus:ring-teal-400">
                                {"Send Message"}
                            </button>
                        </form>
                    </div>
                </div>
            </div>

            <div class="border-t border-white/10 p-6 flex flex-col md:flex-row justify-between text-xs text-gray-600 uppercase tracking-wider gap-4 md:gap-0">
                <span>{"© 2024 Wondrous Studio"}</span>
                <div class="flex gap-6">
                    {for utility_links.into_iter().map(|(view, label, extra)| html! {
                        <button key={view.as_str()} onclick={navigate_to(&props.on_navigate, view, None)} class={classes!("hover:text-teal-400", extra)}>
                            {label}
                        </button>
                    })}
                </div>
            </div>
        </footer>
    }
}
