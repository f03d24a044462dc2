use yew::prelude::*;

fn stroke_icon(size: u32, paths: Html) -> Html {
    html! {
        <svg
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

pub fn menu() -> Html {
    stroke_icon(
        24,
        html! {
            <>
                <line x1="3" y1="6" x2="21" y2="6" />
                <line x1="3" y1="12" x2="21" y2="12" />
                <line x1="3" y1="18" x2="21" y2="18" />
            </>
        },
    )
}

pub fn close() -> Html {
    stroke_icon(
        24,
        html! {
            <>
                <line x1="18" y1="6" x2="6" y2="18" />
                <line x1="6" y1="6" x2="18" y2="18" />
            </>
        },
    )
}

pub fn sun() -> Html {
    stroke_icon(
        20,
        html! {
            <>
                <circle cx="12" cy="12" r="5" />
                <line x1="12" y1="1" x2="12" y2="3" />
                <line x1="12" y1="21" x2="12" y2="23" />
                <line x1="4.22" y1="4.22" x2="5.64" y2="5.64" />
                <line x1="18.36" y1="18.36" x2="19.78" y2="19.78" />
                <line x1="1" y1="12" x2="3" y2="12" />
                <line x1="21" y1="12" x2="23" y2="12" />
                <line x1="4.22" y1="19.78" x2="5.64" y2="18.36" />
                <line x1="18.36" y1="5.64" x2="19.78" y2="4.22" />
            </>
        },
    )
}

pub fn moon() -> Html {
    stroke_icon(
        20,
        html! { <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" /> },
    )
}

pub fn arrow_right() -> Html {
    stroke_icon(
        20,
        html! {
            <>
                <line x1="5" y1="12" x2="19" y2="12" />
                <polyline points="12 5 19 12 12 19" />
            </>
        },
    )
}

pub fn arrow_left() -> Html {
    stroke_icon(
        20,
        html! {
            <>
                <line x1="19" y1="12" x2="5" y2="12" />
                <polyline points="12 19 5 12 12 5" />
            </>
        },
    )
}

pub fn chevron_left() -> Html {
    stroke_icon(40, html! { <polyline points="15 18 9 12 15 6" /> })
}

pub fn chevron_right() -> Html {
    stroke_icon(40, html! { <polyline points="9 18 15 12 9 6" /> })
}

pub fn hexagon() -> Html {
    stroke_icon(
        32,
        html! { <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z" /> },
    )
}

pub fn check() -> Html {
    stroke_icon(
        64,
        html! {
            <>
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                <polyline points="22 4 12 14.01 9 11.01" />
            </>
        },
    )
}

pub fn alert() -> Html {
    stroke_icon(
        64,
        html! {
            <>
                <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" />
                <line x1="12" y1="9" x2="12" y2="13" />
                <line x1="12" y1="17" x2="12.01" y2="17" />
            </>
        },
    )
}

pub fn info() -> Html {
    stroke_icon(
        18,
        html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <line x1="12" y1="16" x2="12" y2="12" />
                <line x1="12" y1="8" x2="12.01" y2="8" />
            </>
        },
    )
}
