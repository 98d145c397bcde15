use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::content::api::{self, format_publish_date, BlogListItem};
use crate::content::Remote;
use crate::Route;

#[function_component(KnowledgeHub)]
pub fn knowledge_hub() -> Html {
    let posts = use_state(|| Remote::<Vec<BlogListItem>>::Loading);
    let attempt = use_state(|| 0u32);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    {
        let posts = posts.clone();
        use_effect_with_deps(
            move |_| {
                posts.set(Remote::Loading);
                let posts = posts.clone();
                spawn_local(async move {
                    match api::list_posts().await {
                        Ok(list) => posts.set(Remote::Ready(list)),
                        Err(e) => {
                            error!("failed to load knowledge hub posts: {}", e);
                            posts.set(Remote::Failed(e.to_string()));
                        }
                    }
                });
                || ()
            },
            *attempt,
        );
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    let grid = match &*posts {
        Remote::Loading => (0..6)
            .map(|_| html! { <div class="hub-skeleton"></div> })
            .collect::<Html>(),
        Remote::Failed(_) => html! {
            <div class="hub-error">
                <div class="hub-error-icon">{"📡"}</div>
                <h2>{"Something went wrong"}</h2>
                <p>{"We couldn't reach the Knowledge Hub right now."}</p>
                <button class="hub-retry" onclick={on_retry}>{"Try again"}</button>
            </div>
        },
        Remote::Ready(list) if list.is_empty() => html! {
            <div class="hub-error">
                <div class="hub-error-icon">{"📝"}</div>
                <h2>{"Nothing here yet"}</h2>
                <p>{"New articles are on the way. Check back soon."}</p>
            </div>
        },
        Remote::Ready(list) => list
            .iter()
            .map(|post| {
                html! {
                    <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }} classes="hub-card">
                        <div class="hub-card-image">
                            <img
                                src={post.image_url.clone().unwrap_or_default()}
                                alt={post.title.clone()}
                                loading="lazy"
                            />
                            <span class="hub-card-category">{&post.category}</span>
                        </div>
                        <div class="hub-card-body">
                            <h3>{&post.title}</h3>
                            <p>{&post.excerpt}</p>
                            <div class="hub-card-meta">
                                <span>
                                    { post.published_at.as_deref().map(format_publish_date).unwrap_or_default() }
                                </span>
                                <span class="hub-card-more">{"Read More →"}</span>
                            </div>
                        </div>
                    </Link<Route>>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div class="hub-page">
            <main>
                <div class="hub-inner">
                    <nav class="hub-breadcrumb">
                        <Link<Route> to={Route::Home} classes="hub-back">
                            {"← Back to Academy"}
                        </Link<Route>>
                    </nav>

                    <header class="hub-header">
                        <h1>{"Knowledge Hub"}</h1>
                        <p>
                            {"Insights, case studies, and updates from the world of AI and professional development."}
                        </p>
                    </header>

                    <div class="hub-grid">
                        { grid }
                    </div>
                </div>
            </main>

            <style>
                {r#"
                .hub-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #fff;
                    padding: 6rem 2rem 4rem;
                }
                .hub-inner { max-width: 1100px; margin: 0 auto; }
                .hub-breadcrumb { margin-bottom: 1.5rem; }
                .hub-back {
                    color: #999;
                    text-decoration: none;
                    font-size: 0.9rem;
                    transition: color 0.3s ease;
                }
                .hub-back:hover { color: #fff; }
                .hub-header { text-align: center; margin-bottom: 3rem; }
                .hub-header h1 {
                    font-size: 3rem;
                    background: linear-gradient(45deg, #818cf8, #c084fc);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 1rem;
                }
                .hub-header p {
                    color: #999;
                    font-size: 1.15rem;
                    max-width: 600px;
                    margin: 0 auto;
                }
                .hub-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .hub-skeleton {
                    height: 360px;
                    border-radius: 12px;
                    background: rgba(26, 26, 26, 0.85);
                    animation: hub-pulse 1.5s ease-in-out infinite;
                }
                @keyframes hub-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .hub-error {
                    grid-column: 1 / -1;
                    text-align: center;
                    padding: 4rem 1rem;
                }
                .hub-error-icon { font-size: 3rem; margin-bottom: 1rem; }
                .hub-error h2 { margin-bottom: 0.5rem; }
                .hub-error p { color: #999; }
                .hub-retry {
                    margin-top: 1.5rem;
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    color: #7EB2FF;
                    border-radius: 999px;
                    padding: 0.7rem 1.8rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hub-retry:hover { background: rgba(30, 144, 255, 0.2); }
                .hub-card {
                    display: block;
                    background: linear-gradient(135deg, rgba(26, 26, 26, 0.95), #111);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hub-card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-5px);
                }
                .hub-card-image { position: relative; height: 200px; }
                .hub-card-image img { width: 100%; height: 100%; object-fit: cover; }
                .hub-card-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: #4f46e5;
                    color: #fff;
                    font-size: 0.7rem;
                    font-weight: 600;
                    padding: 0.3rem 0.8rem;
                    border-radius: 999px;
                }
                .hub-card-body { padding: 1.5rem; }
                .hub-card-body h3 { color: #fff; font-size: 1.25rem; margin-bottom: 0.75rem; }
                .hub-card-body p { color: #999; font-size: 0.9rem; margin-bottom: 1rem; }
                .hub-card-meta {
                    display: flex;
                    justify-content: space-between;
                    color: #666;
                    font-size: 0.85rem;
                }
                .hub-card-more { color: #7EB2FF; }
                "#}
            </style>
        </div>
    }
}
