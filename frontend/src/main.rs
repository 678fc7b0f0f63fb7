use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod controllers;
mod components {
    pub mod case_studies;
    pub mod contact;
    pub mod framework;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod not_found;
    pub mod portfolio;
}

use pages::{not_found::NotFound, portfolio::Portfolio};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/case-studies/:id")]
    CaseStudy { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering portfolio");
            html! { <Portfolio /> }
        },
        Route::CaseStudy { id } => {
            info!("Rendering portfolio with case study {} open", id);
            html! { <Portfolio expanded_case={Some(id)} /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Expertise"),
    ("#case-studies", "Case Studies"),
    ("#framework", "PURE Framework"),
    ("#testimonials", "Testimonials"),
    ("#gallery", "Screenshots"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new({
                let window = window.clone();
                move || {
                    if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > 80.0);
                    }
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Vishal Choudhary"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        padding: 1rem 2rem;
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                        font-size: 1.2rem;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem 2rem;
                            background: rgba(0, 0, 0, 0.95);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
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

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
