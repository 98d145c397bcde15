use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks {
    pub mod animation;
    pub mod interval;
    pub mod storage;
}
mod components {
    pub mod assessment;
    pub mod blog_teaser;
    pub mod courses;
    pub mod cta;
    pub mod faq;
    pub mod hero_carousel;
    pub mod onboarding;
    pub mod requirements;
}
mod pages {
    pub mod blog_post;
    pub mod home;
    pub mod knowledge_hub;
}

use pages::{blog_post::BlogPost, home::Home, knowledge_hub::KnowledgeHub};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/knowledge")]
    KnowledgeHub,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::KnowledgeHub => {
            info!("Rendering Knowledge Hub page");
            html! { <KnowledgeHub /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering Blog Post page");
            html! { <BlogPost {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to Academy"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #0a0a0a;
                    color: #fff;
                }
                .not-found-page h1 { font-size: 4rem; }
                .not-found-page p { color: #999; }
                .not-found-home { color: #7EB2FF; text-decoration: none; }
                "#}
            </style>
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    web_sys::window()
                        .unwrap()
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
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
                    {"Ottobon Academy"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#courses" class="nav-link" onclick={close_menu.clone()}>
                        {"Courses"}
                    </a>
                    <a href="/#assessment" class="nav-link" onclick={close_menu.clone()}>
                        {"Assessment"}
                    </a>
                    <a href="/#faq" class="nav-link" onclick={close_menu.clone()}>
                        {"FAQ"}
                    </a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::KnowledgeHub} classes="nav-link">
                            {"Knowledge Hub"}
                        </Link<Route>>
                    </div>
                    <a href="/#enroll" class="nav-enroll-button" onclick={close_menu}>
                        {"Enroll"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                * { margin: 0; padding: 0; box-sizing: border-box; }
                body {
                    background: #0a0a0a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                        Helvetica, Arial, sans-serif;
                }
                html { scroll-behavior: smooth; }
                @keyframes academy-fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes academy-slide-up {
                    from { opacity: 0; transform: translateY(1.5rem); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .animate-fade-in { animation: academy-fade-in 0.6s ease-out both; }
                .animate-slide-up { animation: academy-slide-up 0.6s ease-out both; }
                .delay-100 { animation-delay: 0.1s; }
                .delay-200 { animation-delay: 0.2s; }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1rem 2rem;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 10, 10, 0.9);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
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
                    font-size: 1.2rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }
                .nav-link:hover { color: #7EB2FF; }
                .nav-enroll-button {
                    background: #1E90FF;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    transition: all 0.3s ease;
                }
                .nav-enroll-button:hover { background: #1873CC; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: rgba(10, 10, 10, 0.97);
                        padding: 1.5rem;
                    }
                    .nav-right.mobile-menu-open { display: flex; }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
