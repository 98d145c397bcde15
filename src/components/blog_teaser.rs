use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::content::api::{self, format_publish_date, BlogListItem};
use crate::content::Remote;
use crate::Route;

const TEASER_COUNT: usize = 3;

#[function_component(BlogTeaserSection)]
pub fn blog_teaser_section() -> Html {
    let posts = use_state(|| Remote::<Vec<BlogListItem>>::Loading);
    let attempt = use_state(|| 0u32);

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
                            error!("failed to load blog teaser posts: {}", e);
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

    let cards = match &*posts {
        Remote::Loading => (0..TEASER_COUNT)
            .map(|_| html! { <div class="teaser-skeleton"></div> })
            .collect::<Html>(),
        Remote::Failed(_) => html! {
            <div class="teaser-error">
                <p>{"Couldn't load the latest articles."}</p>
                <button class="teaser-retry" onclick={on_retry}>{"Try again"}</button>
            </div>
        },
        Remote::Ready(list) => list
            .iter()
            .take(TEASER_COUNT)
            .map(|post| {
                html! {
                    <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }} classes="teaser-card">
                        <div class="teaser-image">
                            <img
                                src={post.image_url.clone().unwrap_or_default()}
                                alt={post.title.clone()}
                                loading="lazy"
                            />
                            <span class="teaser-category">{&post.category}</span>
                        </div>
                        <div class="teaser-body">
                            <h3>{&post.title}</h3>
                            <p>{&post.excerpt}</p>
                            <div class="teaser-meta">
                                <span>
                                    { post.published_at.as_deref().map(format_publish_date).unwrap_or_default() }
                                </span>
                                <span class="teaser-more">{"Read More →"}</span>
                            </div>
                        </div>
                    </Link<Route>>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <section class="blog-teaser-section">
            <div class="teaser-inner">
                <div class="teaser-header">
                    <div>
                        <h2>{"Latest from the Knowledge Hub"}</h2>
                        <p>{"Stay updated with insights and industry trends"}</p>
                    </div>
                    <Link<Route> to={Route::KnowledgeHub} classes="teaser-all">
                        {"Explore All Articles →"}
                    </Link<Route>>
                </div>
                <div class="teaser-grid">
                    { cards }
                </div>
            </div>

            <style>
                {r#"
                .blog-teaser-section {
                    padding: 4rem 2rem;
                    background: #0a0a0a;
                }
                .teaser-inner { max-width: 1100px; margin: 0 auto; }
                .teaser-header {
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 2rem;
                }
                .teaser-header h2 {
                    font-size: 2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .teaser-header p { color: #999; margin-top: 0.25rem; }
                .teaser-all {
                    color: #7EB2FF;
                    font-weight: 600;
                    text-decoration: none;
                    white-space: nowrap;
                }
                .teaser-all:hover { color: #a5c8ff; }
                .teaser-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .teaser-skeleton {
                    height: 380px;
                    border-radius: 12px;
                    background: rgba(26, 26, 26, 0.85);
                    animation: teaser-pulse 1.5s ease-in-out infinite;
                }
                @keyframes teaser-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .teaser-error {
                    grid-column: 1 / -1;
                    text-align: center;
                    padding: 3rem 1rem;
                    color: #999;
                }
                .teaser-retry {
                    margin-top: 1rem;
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    color: #7EB2FF;
                    border-radius: 999px;
                    padding: 0.6rem 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .teaser-retry:hover { background: rgba(30, 144, 255, 0.2); }
                .teaser-card {
                    display: block;
                    background: linear-gradient(135deg, rgba(26, 26, 26, 0.95), #111);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .teaser-card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-5px);
                }
                .teaser-image { position: relative; height: 190px; }
                .teaser-image img { width: 100%; height: 100%; object-fit: cover; }
                .teaser-category {
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
                .teaser-body { padding: 1.5rem; }
                .teaser-body h3 { color: #fff; font-size: 1.2rem; margin-bottom: 0.75rem; }
                .teaser-body p { color: #999; font-size: 0.9rem; margin-bottom: 1rem; }
                .teaser-meta {
                    display: flex;
                    justify-content: space-between;
                    color: #666;
                    font-size: 0.85rem;
                }
                .teaser-more { color: #7EB2FF; }
                "#}
            </style>
        </section>
    }
}
