use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use onlybulls_landing::analytics::{self, scroll, AnalyticsConfig};
use onlybulls_landing::{config, vitals};

mod components {
    pub mod cta_button;
    pub mod lazy_section;
    pub mod pricing_cta;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod privacy;
}

use components::cta_button::{CtaButton, CtaVariant};
use pages::{landing::Landing, privacy::PrivacyPolicy};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

pub fn smooth_scroll_to(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Features", "benefits"),
    ("Demo", "demo"),
    ("Download", "app-download"),
    ("FAQ", "faq"),
];

/// Where a header CTA click is attributed; the open burger menu is the mobile header.
fn header_cta_location(menu_open: bool) -> &'static str {
    if menu_open {
        "header-mobile"
    } else {
        "header"
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    let scroll_callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            is_scrolled.set(window.scroll_y().unwrap_or(0.0) > 40.0);
                        }) as Box<dyn FnMut()>)
                    };
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Nav scroll listener unavailable: {:?}", e);
                    }
                    Box::new(move || {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Could not remove nav scroll listener: {:?}", e);
                        }
                    })
                }
                None => Box::new(|| ()),
            };
            destructor
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |label: &'static str, target: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            smooth_scroll_to(target);
        });
        html! {
            <a href={format!("#{}", target)} class="nav-link" {onclick}>{label}</a>
        }
    };

    let download_app = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            smooth_scroll_to("app-download");
        })
    };

    let cta_location = header_cta_location(*menu_open);

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Only Bulls"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|&(label, target)| nav_link(label, target)) }
                    <CtaButton
                        variant={CtaVariant::Outline}
                        analytics_label="Download App"
                        analytics_location={cta_location}
                        onclick={download_app}
                    >
                        {"Download App"}
                    </CtaButton>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    // Analytics, scroll-depth tracking and vitals are page-wide and start once.
    use_effect_with_deps(|_| {
        analytics::init(&AnalyticsConfig::from_env());
        let scroll_tracking = match scroll::attach_scroll_tracking(analytics::tracker()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Scroll tracking unavailable: {:?}", e);
                None
            }
        };
        vitals::measure(analytics::tracker());
        move || {
            if let Some(handle) = scroll_tracking {
                handle.detach();
            }
        }
    }, ());

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    #[cfg(debug_assertions)]
    tracing_wasm::set_as_global_default();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_cta_is_attributed_to_mobile_menu_when_open() {
        assert_eq!(header_cta_location(false), "header");
        assert_eq!(header_cta_location(true), "header-mobile");
    }
}
