//! Browser-backed hooks. Each one owns its listener, observer or frame
//! callback and releases it when the component unmounts.

use crate::motion::{
    scroll_fraction, CountUp, IntersectionEntry, ObserverOptions, PointerOffset, SectionTracker,
    VisibilityLatch, ACTIVE_SECTION_BAND, ACTIVE_SECTION_OPTIONS, COUNTER_DURATION_MS,
    REVEAL_OPTIONS,
};
use js_sys::{Array, Reflect};
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// A window event listener that is removed on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let win = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop. `step` receives the frame timestamp and
/// returns whether it wants another frame. Dropping cancels the pending frame.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    _callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let win = window()?;
        let pending = Rc::new(Cell::new(None));
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let callback = {
            let pending = Rc::clone(&pending);
            let slot = Rc::downgrade(&slot);
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                pending.set(None);
                if !step(timestamp) {
                    return;
                }

                let (Some(slot), Some(win)) = (slot.upgrade(), window()) else {
                    return;
                };
                if let Some(callback) = slot.borrow().as_ref() {
                    pending.set(
                        win.request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            })
        };

        pending.set(
            win.request_animation_frame(callback.as_ref().unchecked_ref())
                .ok(),
        );
        *slot.borrow_mut() = Some(callback);

        Some(Self {
            pending,
            _callback: slot,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(handle), Some(win)) = (self.pending.take(), window()) {
            let _ = win.cancel_animation_frame(handle);
        }
    }
}

pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    window()
        .map(|win| Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Observes `targets`. `None` when the platform has no `IntersectionObserver`.
pub fn observe_intersections<F>(
    targets: &[Element],
    options: ObserverOptions,
    mut on_batch: F,
) -> Option<ObserverGuard>
where
    F: FnMut(&[IntersectionObserverEntry], &IntersectionObserver) + 'static,
{
    if !intersection_observer_supported() {
        return None;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> =
                entries.iter().map(JsCast::unchecked_into).collect();
            on_batch(&entries, &observer);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver rejected options: {err:?}");
                return None;
            }
        };

    for target in targets {
        observer.observe(target);
    }

    Some(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// One-shot "has been on screen" flag for the element behind `node`.
#[hook]
pub fn use_on_screen(node: NodeRef, options: ObserverOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let latch = Rc::new(Cell::new(VisibilityLatch::new()));
            let guard = node.cast::<Element>().and_then(|element| {
                let latch = Rc::clone(&latch);
                let visible = visible.clone();
                observe_intersections(&[element], options, move |entries, observer| {
                    for entry in entries {
                        let mut next = latch.get();
                        if next.observe(entry.is_intersecting()) {
                            latch.set(next);
                            visible.set(true);
                            observer.disconnect();
                        }
                    }
                })
            });

            if guard.is_none() {
                debug!("visibility observation unavailable, revealing immediately");
                latch.set(VisibilityLatch::unsupported());
                visible.set(latch.get().is_visible());
            }

            move || drop(guard)
        });
    }

    *visible
}

/// Counts from 0 to `end` once `node` is on screen.
#[hook]
pub fn use_counter(end: u32, node: NodeRef) -> u32 {
    let visible = use_on_screen(node, REVEAL_OPTIONS);
    let value = use_state_eq(|| 0_u32);

    {
        let value = value.clone();
        use_effect_with((visible, end), move |&(visible, end)| {
            let frames = if visible {
                let mut count = CountUp::new(0, end, COUNTER_DURATION_MS);
                let frame_value = value.clone();
                let frames = FrameLoop::start(move |now| {
                    let more = count.frame(now);
                    frame_value.set(count.value());
                    more
                });
                if frames.is_none() {
                    value.set(end);
                }
                frames
            } else {
                None
            };

            move || drop(frames)
        });
    }

    *value
}

/// Progress through the tall element behind `node`, updated on scroll and resize.
#[hook]
pub fn use_scroll_fraction(node: NodeRef) -> f64 {
    let fraction = use_state_eq(|| 0.0_f64);

    {
        let fraction = fraction.clone();
        use_effect_with(node, move |node| {
            let node = node.clone();
            let measure = Rc::new(move || {
                if let Some(element) = node.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    let (_, viewport_height) = viewport_size();
                    fraction.set(scroll_fraction(rect.top(), rect.height(), viewport_height));
                }
            });

            measure();
            let listeners = ["scroll", "resize"].map(|event| {
                let measure = Rc::clone(&measure);
                WindowListener::new(event, move |_| measure())
            });

            move || drop(listeners)
        });
    }

    *fraction
}

/// Window-relative pointer position.
#[hook]
pub fn use_pointer_position() -> PointerOffset {
    let offset = use_state_eq(PointerOffset::default);

    {
        let offset = offset.clone();
        use_effect_with((), move |_| {
            let listener = WindowListener::new("mousemove", move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let (width, height) = viewport_size();
                offset.set(PointerOffset::from_client(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    width,
                    height,
                ));
            });

            move || drop(listener)
        });
    }

    *offset
}

fn section_elements(sections: &[String]) -> Vec<(String, Element)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    sections
        .iter()
        .filter_map(|id| {
            document
                .get_element_by_id(id)
                .map(|element| (id.clone(), element))
        })
        .collect()
}

/// Which of `sections` currently owns the upper band of the viewport.
#[hook]
pub fn use_active_section(sections: &'static [&'static str]) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with(sections, move |sections| {
            let tracker = Rc::new(RefCell::new(SectionTracker::new(sections.iter().copied())));
            let elements = section_elements(tracker.borrow().sections());

            let publish = {
                let tracker = Rc::clone(&tracker);
                move |batch: &[IntersectionEntry]| {
                    let mut tracker = tracker.borrow_mut();
                    if tracker.apply(batch) {
                        active.set(tracker.active().map(ToString::to_string));
                    }
                }
            };

            let targets: Vec<Element> = elements.iter().map(|(_, element)| element.clone()).collect();
            let observer = {
                let publish = publish.clone();
                observe_intersections(&targets, ACTIVE_SECTION_OPTIONS, move |entries, _| {
                    let batch: Vec<IntersectionEntry> = entries
                        .iter()
                        .map(|entry| IntersectionEntry {
                            id: entry.target().id(),
                            is_intersecting: entry.is_intersecting(),
                        })
                        .collect();
                    publish(&batch);
                })
            };

            let fallback = if observer.is_none() {
                debug!("active section falls back to scroll measurement");
                WindowListener::new("scroll", move |_| {
                    let (_, viewport_height) = viewport_size();
                    let batch: Vec<IntersectionEntry> = elements
                        .iter()
                        .map(|(id, element)| {
                            let rect = element.get_bounding_client_rect();
                            IntersectionEntry {
                                id: id.clone(),
                                is_intersecting: ACTIVE_SECTION_BAND.intersects(
                                    rect.top(),
                                    rect.bottom(),
                                    viewport_height,
                                ),
                            }
                        })
                        .collect();
                    publish(&batch);
                })
            } else {
                None
            };

            move || {
                drop(observer);
                drop(fallback);
            }
        });
    }

    (*active).clone()
}
