use super::sections::Footer;
use super::{icons, navigate_to, NavigateCallback};
use crate::content::{ChangeKind, ChangelogEntry, SiteMapEntry, SiteMapGroup};
use crate::navigation::View;
use web_sys::window;
use yew::prelude::*;

#[hook]
fn use_scroll_top_on_mount() {
    use_effect_with((), |_| {
        if let Some(win) = window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub on_navigate: NavigateCallback,
}

fn back_to_home(on_navigate: &NavigateCallback, class: &'static str) -> Html {
    html! {
        <button onclick={navigate_to(on_navigate, View::Home, None)} class={class}>
            {icons::arrow_left()}{" Back to Home"}
        </button>
    }
}

const BACK_LINK: &str = "flex items-center gap-2 text-teal-600 dark:text-teal-400 font-bold uppercase tracking-widest text-sm mb-12 hover:opacity-80 transition-opacity";
const RETURN_BUTTON: &str = "px-8 py-4 bg-stone-900 dark:bg-white text-white dark:text-black font-bold uppercase tracking-widest hover:bg-teal-600 dark:hover:bg-teal-600 hover:text-white dark:hover:text-white transition-all";

const PRIVACY_SECTIONS: [(&str, &str); 4] = [
    (
        "1. Information Collection",
        "We collect information you provide directly to us, such as when you fill out a contact form, request a quote, or communicate with us. This may include your name, email address, phone number, and project details.",
    ),
    (
        "2. Use of Information",
        "We use the information we collect to respond to your inquiries, provide the services you request, communicate with you about our projects, and improve our website and client experience.",
    ),
    (
        "3. Data Protection",
        "We implement appropriate technical and organizational measures to protect the security of your personal information. However, please note that no method of transmission over the Internet is 100% secure.",
    ),
    (
        "4. Contact Us",
        "If you have any questions about this Privacy Policy, please contact us via our contact form or at privacy@wondrous.studio.",
    ),
];

#[function_component(PrivacyPage)]
pub fn privacy_page(props: &PageProps) -> Html {
    use_scroll_top_on_mount();

    html! {
        <div class="min-h-screen bg-white dark:bg-[#0a0a0a] text-stone-900 dark:text-white animate-[fadeIn_0.5s_ease-out]">
            <div class="container mx-auto px-6 py-20 md:py-32">
                {back_to_home(&props.on_navigate, BACK_LINK)}
                <h1 class="text-5xl md:text-7xl font-bold font-space mb-16">{"Privacy Policy"}</h1>
                <div class="max-w-3xl space-y-12 text-lg leading-relaxed text-gray-600 dark:text-gray-300">
                    {for PRIVACY_SECTIONS.iter().map(|(heading, body)| html! {
                        <section key={*heading}>
                            <h2 class="text-2xl font-bold font-space text-stone-900 dark:text-white mb-4">{*heading}</h2>
                            <p>{*body}</p>
                        </section>
                    })}
                </div>
            </div>
            <Footer on_navigate={props.on_navigate.clone()} />
        </div>
    }
}

#[function_component(SuccessPage)]
pub fn success_page(props: &PageProps) -> Html {
    use_scroll_top_on_mount();

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-white dark:bg-[#0a0a0a] text-stone-900 dark:text-white p-6 text-center animate-[fadeIn_0.5s_ease-out]">
            <div class="text-teal-600 dark:text-teal-400 mb-8 animate-[scaleIn_0.5s_ease-out]">{icons::check()}</div>
            <h1 class="text-4xl md:text-6xl font-bold font-space mb-6">{"Message Sent Successfully!"}</h1>
            <p class="text-xl text-gray-600 dark:text-gray-300 max-w-lg mb-12 leading-relaxed">
                {"Thank you for reaching out to Wondrous Studio. We have received your message and will be in touch with you shortly."}
            </p>
            <button onclick={navigate_to(&props.on_navigate, View::Home, None)} class={RETURN_BUTTON}>
                {"Return Home"}
            </button>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &PageProps) -> Html {
    use_scroll_top_on_mount();

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-white dark:bg-[#0a0a0a] text-stone-900 dark:text-white p-6 text-center animate-[fadeIn_0.5s_ease-out]">
            <div class="text-teal-600 dark:text-teal-400 mb-8">{icons::alert()}</div>
            <h1 class="text-4xl md:text-6xl font-bold font-space mb-6">{"404 - Page Not Found"}</h1>
            <p class="text-xl text-gray-600 dark:text-gray-300 max-w-lg mb-12 leading-relaxed">
                {"The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."}
            </p>
            <button onclick={navigate_to(&props.on_navigate, View::Home, None)} class={RETURN_BUTTON}>
                {"Return Home"}
            </button>
        </div>
    }
}

const PALETTE: [(&str, &str, &str); 4] = [
    ("Teal 600", "#0d9488", "bg-teal-600"),
    ("Teal 400", "#2dd4bf", "bg-teal-400"),
    ("Stone 900", "#1c1917", "bg-stone-900"),
    ("Black (Dark Bg)", "#0a0a0a", "bg-[#0a0a0a] border dark:border-white/10"),
];

const HEADING_SCALE: [(&str, &str); 3] = [
    ("H1", "text-5xl md:text-7xl"),
    ("H2", "text-4xl md:text-5xl"),
    ("H3", "text-2xl md:text-3xl"),
];

#[function_component(StyleGuidePage)]
pub fn style_guide_page(props: &PageProps) -> Html {
    use_scroll_top_on_mount();

    html! {
        <div class="min-h-screen bg-white dark:bg-[#0a0a0a] text-stone-900 dark:text-white animate-[fadeIn_0.5s_ease-out]">
            <div class="container mx-auto px-6 py-20 md:py-32">
                {back_to_home(&props.on_navigate, BACK_LINK)}
                <h1 class="text-5xl md:text-7xl font-bold font-space mb-20">{"Design Style Guide"}</h1>
                <div class="space-y-24">
                    <section>
                        <h2 class="text-2xl font-space font-bold mb-8 border-b dark:border-white/10 pb-4">{"Colors"}</h2>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                            {for PALETTE.iter().map(|(name, hex, swatch)| html! {
                                <div key={*name} class="space-y-2">
                                    <div class={classes!("h-32", "rounded-sm", *swatch)}></div>
                                    <div class="font-bold">{*name}</div>
                                    <div class="text-sm opacity-60">{*hex}</div>
                                </div>
                            })}
                        </div>
                    </section>

                    <section>
                        <h2 class="text-2xl font-space font-bold mb-8 border-b dark:border-white/10 pb-4">{"Typography"}</h2>
                        <div class="space-y-12">
                            <div class="grid md:grid-cols-2 gap-8">
                                <div>
                                    <div class="text-sm uppercase tracking-widest text-gray-500 mb-2">{"Space Grotesk - Headings"}</div>
                                    <div class="text-6xl font-space font-bold">{"Building Visions"}</div>
                                </div>
                                <div>
                                    <div class="text-sm uppercase tracking-widest text-gray-500 mb-2">{"Inter - Body"}</div>
                                    <p class="text-lg leading-relaxed text-gray-600 dark:text-gray-300">
                                        {"General contractor for high-end commercial spaces and bespoke interior design. We craft environments that inspire."}
                                    </p>
                                </div>
                            </div>
                            <div class="space-y-4">
                                {for HEADING_SCALE.iter().map(|(tag, size)| html! {
                                    <div key={*tag} class="flex items-baseline gap-8">
                                        <span class="w-24 text-sm text-gray-500">{*tag}</span>
                                        <span class={classes!("font-space", "font-bold", *size)}>{format!("Heading {}", &tag[1..])}</span>
                                    </div>
                                })}
                            </div>
                        </div>
                    </section>

                    <section>
                        <h2 class="text-2xl font-space font-bold mb-8 border-b dark:border-white/10 pb-4">{"UI Elements"}</h2>
                        <div class="flex flex-wrap gap-8 mb-12">
                            <button class="px-8 py-4 bg-stone-900 dark:bg-white text-white dark:text-black font-bold hover:bg-teal-600 dark:hover:bg-teal-600 hover:text-white transition-all duration-300">
                                {"Primary Button"}
                            </button>
                            <button class="px-8 py-4 border border-stone-300 dark:border-stone-700 text-sm font-bold uppercase tracking-widest hover:bg-teal-600 hover:border-teal-600 hover:text-white transition-colors">
                                {"Secondary Button"}
                            </button>
                            <button class="flex items-center gap-2 text-teal-600 dark:text-teal-400 font-bold uppercase tracking-widest text-sm hover:opacity-80">
                                {"Link Button "}{icons::arrow_right()}
                            </button>
                        </div>
                    </section>
                </div>
            </div>
            <Footer on_navigate={props.on_navigate.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteMapProps {
    pub groups: Vec<SiteMapGroup>,
    pub on_navigate: NavigateCallback,
}

#[function_component(SiteMapPage)]
pub fn site_map_page(props: &SiteMapProps) -> Html {
    use_scroll_top_on_mount();
    let selected = use_state_eq(|| None::<SiteMapEntry>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let detail = (*selected).clone().map(|entry| {
        html! {
            <div class="fixed inset-0 z-[150] bg-black/80 backdrop-blur-sm flex items-center justify-center p-6 animate-[fadeIn_0.3s_ease-out]" onclick={close.clone()}>
                <div
                    class="bg-white dark:bg-[#1a1a1a] p-8 md:p-12 max-w-2xl w-full border border-teal-500/30 shadow-2xl relative animate-[scaleIn_0.3s_ease-out]"
                    onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                >
                    <button onclick={close.clone()} aria-label="Close description" class="absolute top-4 right-4 p-2 text-gray-500 hover:text-teal-500 transition-colors">
                        {icons::close()}
                    </button>
                    <div class="text-teal-500 mb-4">{icons::hexagon()}</div>
                    <h3 class="text-3xl md:text-4xl font-space font-bold mb-6 text-stone-900 dark:text-white">{entry.name}</h3>
                    <p class="text-lg text-gray-600 dark:text-gray-300 leading-relaxed">{entry.description}</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="min-h-screen bg-white dark:bg-[#0a0a0a] text-stone-900 dark:text-white animate-[fadeIn_0.5s_ease-out]">
            <div class="container mx-auto px-6 py-20 md:py-32">
                {back_to_home(&props.on_navigate, BACK_LINK)}
                <h1 class="text-5xl md:text-7xl font-bold font-space mb-20">{"Site Structure"}</h1>
                <div class="grid md:grid-cols-3 gap-16">
                    {for props.groups.iter().map(|group| html! {
                        <div key={group.category.clone()}>
                            <h2 class="text-2xl font-space font-bold mb-8 border-b-2 border-teal-500 pb-4 inline-block">{group.category.clone()}</h2>
                            <ul class="space-y-4">
                                {for group.items.iter().map(|item| {
                                    let onclick = {
                                        let selected = selected.clone();
                                        let item = item.clone();
                                        Callback::from(move |_: MouseEvent| selected.set(Some(item.clone())))
                                    };
                                    html! {
                                        <li key={item.name.clone()}>
                                            <button {onclick} class="flex items-center gap-3 text-lg text-gray-600 dark:text-gray-300 hover:text-teal-600 dark:hover:text-teal-400 transition-colors text-left group w-full">
                                                <span class="w-1.5 h-1.5 bg-teal-500 rounded-full group-hover:scale-150 transition-transform"></span>
                                                {item.name.clone()}
                                                <span class="opacity-0 group-hover:opacity-100 transition-opacity ml-auto">{icons::info()}</span>
                                            </button>
                                        </li>
                                    }
                                })}
                            </ul>
                        </div>
                    })}
                </div>
                <div class="mt-20 p-8 bg-gray-100 dark:bg-white/5 rounded-sm border border-gray-200 dark:border-white/10">
                    <h3 class="font-bold font-space text-xl mb-4">{"Note to Developers"}</h3>
                    <p class="text-gray-600 dark:text-gray-400 leading-relaxed">
                        {"This site is a single-page application. Navigation is a state change of the current view rather than a route change, and the theme is shared across every section. Click on any element above to see its description."}
                    </p>
                </div>
            </div>
            {detail}
            <Footer on_navigate={props.on_navigate.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChangelogProps {
    pub entries: Vec<ChangelogEntry>,
    pub on_navigate: NavigateCallback,
}

#[function_component(ChangelogPage)]
pub fn changelog_page(props: &ChangelogProps) -> Html {
    use_scroll_top_on_mount();

    html! {
        <div class="min-h-screen bg-black text-white animate-[fadeIn_0.5s_ease-out]">
            <div class="p-8 md:p-20">
                {back_to_home(&props.on_navigate, "flex items-center gap-2 text-teal-400 font-bold uppercase tracking-widest text-sm mb-12 hover:opacity-80 transition-opacity")}
                <h1 class="text-5xl md:text-7xl font-bold font-space mb-16">{"Change Log"}</h1>
                <div class="max-w-4xl space-y-16">
                    {for props.entries.iter().enumerate().map(|(index, entry)| {
                        let accent = match entry.kind {
                            ChangeKind::Specified => "bg-teal-500",
                            ChangeKind::Unspecified => "bg-red-500",
                        };
                        html! {
                            <div key={index} class="border-l border-white/20 pl-8 relative">
                                <div class={classes!("absolute", "-left-1.5", "top-2", "w-3", "h-3", "rounded-full", accent)}></div>
                                <div class="flex flex-col md:flex-row md:items-center gap-4 mb-6">
                                    <span class="text-2xl font-bold font-space">{entry.title.clone()}</span>
                                    <span class="text-gray-500 text-sm uppercase tracking-widest">{entry.date.clone()}</span>
                                </div>
                                <ul class="space-y-4">
                                    {for entry.items.iter().map(|item| html! {
                                        <li class="text-gray-300 text-lg leading-relaxed">{item.clone()}</li>
                                    })}
                                </ul>
                            </div>
                        }
                    })}
                </div>
            </div>
            <Footer on_navigate={props.on_navigate.clone()} />
        </div>
    }
}
