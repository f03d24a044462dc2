use super::hooks::WindowListener;
use super::icons;
use crate::carousel::{
    Carousel, CarouselAction, CarouselState, OverlayKey, AUTO_ADVANCE_MS, TRANSITION_MS,
};
use crate::content::Project;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

/// Full-screen project view. Mounted with the project id as key, so every
/// project starts at its first image.
#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let carousel = use_reducer_eq(|| Carousel::new(props.project.images.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(carousel.state(), move |state| {
            let timer = match *state {
                CarouselState::Transitioning { .. } => Timeout::new(TRANSITION_MS, move || {
                    dispatcher.dispatch(CarouselAction::Commit)
                }),
                CarouselState::Showing(_) => Timeout::new(AUTO_ADVANCE_MS, move || {
                    dispatcher.dispatch(CarouselAction::Tick)
                }),
            };
            move || drop(timer)
        });
    }

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(props.on_close.clone(), move |on_close| {
            let on_close = on_close.clone();
            let listener = WindowListener::new("keydown", move |event: Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                match OverlayKey::from_key(&event.key()) {
                    Some(OverlayKey::Close) => on_close.emit(()),
                    Some(OverlayKey::Next) => dispatcher.dispatch(CarouselAction::Next),
                    Some(OverlayKey::Previous) => dispatcher.dispatch(CarouselAction::Previous),
                    None => {}
                }
            });
            move || drop(listener)
        });
    }

    let dispatch = |action: CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let project = &props.project;
    let index = carousel.index();
    let image = project.images.get(index).cloned().unwrap_or_default();
    let image_class = if carousel.is_transitioning() {
        "opacity-0 scale-105"
    } else {
        "opacity-100 scale-100"
    };

    html! {
        <div class="fixed inset-0 z-[100] bg-black text-white flex flex-col animate-[fadeIn_0.5s_ease-out]" role="dialog" aria-modal="true">
            <div class="absolute top-0 left-0 w-full z-20 flex justify-between items-center p-4 md:p-8 bg-gradient-to-b from-black/60 to-transparent">
                <button
                    onclick={on_close.clone()}
                    aria-label="Go back to project list"
                    class="flex items-center gap-2 text-sm uppercase tracking-widest font-bold hover:text-teal-400 transition-colors"
                >
                    {icons::arrow_left()}{" Back to Projects"}
                </button>
                <button onclick={on_close} aria-label="Close project details" class="p-2 hover:rotate-90 transition-transform duration-300">
                    {icons::close()}
                </button>
            </div>

            <div class="relative flex-grow w-full h-full overflow-hidden bg-stone-900">
                <img
                    src={image}
                    alt={project.title.clone()}
                    class={classes!("absolute", "inset-0", "w-full", "h-full", "object-cover", "transition-opacity", "duration-500", "ease-in-out", image_class)}
                />
                <button
                    onclick={dispatch(CarouselAction::Previous)}
                    aria-label="Previous image"
                    class="absolute top-1/2 left-4 md:left-8 -translate-y-1/2 p-2 md:p-4 text-white hover:scale-110 transition-all duration-300 z-10 bg-black/60 hover:bg-black/80 backdrop-blur-sm rounded-full"
                >
                    {icons::chevron_left()}
                </button>
                <button
                    onclick={dispatch(CarouselAction::Next)}
                    aria-label="Next image"
                    class="absolute top-1/2 right-4 md:right-8 -translate-y-1/2 p-2 md:p-4 text-white hover:scale-110 transition-all duration-300 z-10 bg-black/60 hover:bg-black/80 backdrop-blur-sm rounded-full"
                >
                    {icons::chevron_right()}
                </button>
            </div>

            <div class="absolute bottom-0 left-0 w-full bg-gradient-to-t from-black via-black/80 to-transparent pt-32 pb-8 md:pb-12 px-6 md:px-20 z-20">
                <div class="container mx-auto flex flex-col md:flex-row items-end justify-between gap-8">
                    <div class="max-w-3xl animate-[slideUp_0.5s_ease-out]">
                        <div class="flex items-center gap-4 mb-2 text-teal-400 uppercase tracking-widest text-xs font-bold">
                            <span>{project.location.clone()}</span>
                            <span class="w-1 h-1 bg-current rounded-full"></span>
                            <span>{project.year.clone()}</span>
                        </div>
                        <h1 class="text-4xl md:text-7xl font-bold font-space mb-4 md:mb-6 leading-none">{project.title.clone()}</h1>
                        <p class="text-gray-300 text-base md:text-xl leading-relaxed max-w-2xl border-l-2 border-teal-500 pl-6">
                            {project.description.clone()}
                        </p>
                    </div>

                    <div class="flex flex-col items-end gap-2 text-right">
                        <div class="text-4xl md:text-6xl font-space font-bold text-white/20">
                            {carousel.counter_label()}
                        </div>
                        <div class="flex gap-2">
                            {for (0..carousel.image_count()).map(|dot| html! {
                                <button
                                    key={dot}
                                    onclick={dispatch(CarouselAction::Jump(dot))}
                                    aria-label={format!("View image {}", dot + 1)}
                                    class={classes!(
                                        "w-8", "md:w-12", "h-1", "rounded-full", "transition-colors",
                                        if dot == index { "bg-teal-500" } else { "bg-white/20 hover:bg-white/40" }
                                    )}
                                />
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
