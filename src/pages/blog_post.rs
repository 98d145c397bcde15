use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;
use yew_router::components::Link;

use crate::content::api::{self, format_publish_date, BlogPostDetail};
use crate::content::Remote;
use crate::Route;

/// Badge styling bucket for a post category.
fn category_class(category: &str) -> &'static str {
    match category {
        "Course Updates" => "category-course-updates",
        "Career Tips" => "category-career-tips",
        "AI Trends" => "category-ai-trends",
        "Student Success" => "category-student-success",
        "AI Education" => "category-ai-education",
        _ => "category-default",
    }
}

fn share_target(platform: &str, url: &str, title: &str) -> Option<String> {
    let encoded_url = urlencoding::encode(url).into_owned();
    match platform {
        "linkedin" => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encoded_url
        )),
        "twitter" => Some(format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            encoded_url,
            urlencoding::encode(title)
        )),
        "facebook" => Some(format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            encoded_url
        )),
        _ => None,
    }
}

fn share_on(platform: &'static str, title: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let url = window.location().href().unwrap_or_default();
    if let Some(target) = share_target(platform, &url, title) {
        let _ = window.open_with_url_and_target_and_features(&target, "_blank", "width=600,height=400");
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let post = use_state(|| Remote::<BlogPostDetail>::Loading);
    let attempt = use_state(|| 0u32);
    let reading_progress = use_state(|| 0.0f64);
    let is_helpful = use_state(|| None::<bool>);
    let article_ref = use_node_ref();

    {
        let post = post.clone();
        use_effect_with_deps(
            move |(slug, _attempt): &(String, u32)| {
                post.set(Remote::Loading);
                let slug = slug.clone();
                let post = post.clone();
                spawn_local(async move {
                    match api::get_post(&slug).await {
                        Ok(detail) => post.set(Remote::Ready(detail)),
                        Err(e) => {
                            error!("failed to load post {}: {}", slug, e);
                            post.set(Remote::Failed(e.to_string()));
                        }
                    }
                });
                || ()
            },
            (props.slug.clone(), *attempt),
        );
    }

    // Reading progress follows how far the article has scrolled through the
    // viewport.
    {
        let reading_progress = reading_progress.clone();
        let article_ref = article_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let inner = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let Some(article) = article_ref.cast::<Element>() else {
                        return;
                    };
                    let rect = article.get_bounding_client_rect();
                    let viewport = inner
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if rect.height() > 0.0 {
                        let scrolled = ((viewport - rect.top()) / rect.height()).clamp(0.0, 1.0);
                        reading_progress.set(scrolled * 100.0);
                    }
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    let _ = web_sys::window().unwrap().remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    let body = match &*post {
        Remote::Loading => html! {
            <main class="post-loading">{"Loading post…"}</main>
        },
        Remote::Failed(_) => html! {
            <main class="post-missing">
                <div class="post-missing-icon">{"📝"}</div>
                <h1>{"Post Not Found"}</h1>
                <p>{"The blog post you're looking for doesn't exist or couldn't be loaded."}</p>
                <div class="post-missing-actions">
                    <button class="post-retry" onclick={on_retry}>{"Try again"}</button>
                    <Link<Route> to={Route::KnowledgeHub} classes="post-back-link">
                        {"Back to Knowledge Hub"}
                    </Link<Route>>
                </div>
            </main>
        },
        Remote::Ready(detail) => {
            let title = detail.item.title.clone();
            let share = |platform: &'static str| {
                let title = title.clone();
                Callback::from(move |_: MouseEvent| share_on(platform, &title))
            };
            let mark_helpful = |value: bool| {
                let is_helpful = is_helpful.clone();
                Callback::from(move |_: MouseEvent| is_helpful.set(Some(value)))
            };
            let date = detail
                .item
                .published_at
                .as_deref()
                .map(format_publish_date)
                .unwrap_or_default();

            html! {
                <>
                    <section class="post-hero">
                        <div class="post-hero-backdrop">
                            <img
                                src={detail.item.image_url.clone().unwrap_or_default()}
                                alt={detail.item.title.clone()}
                            />
                        </div>
                        <div class="post-hero-content">
                            <nav class="post-breadcrumb">
                                <Link<Route> to={Route::KnowledgeHub} classes="post-back-link">
                                    {"← Back to Knowledge Hub"}
                                </Link<Route>>
                            </nav>
                            <span class={classes!("post-category", category_class(&detail.item.category))}>
                                {&detail.item.category}
                            </span>
                            <h1>{&detail.item.title}</h1>
                            <p class="post-date">{date}</p>
                            <p class="post-excerpt">{&detail.item.excerpt}</p>
                            <div class="post-byline">
                                <span>{format!("By {}", detail.author)}</span>
                                <span>{&detail.read_time}</span>
                            </div>
                            <div class="post-share">
                                <span>{"Share:"}</span>
                                <button class="share-button linkedin" onclick={share("linkedin")}>{"LinkedIn"}</button>
                                <button class="share-button twitter" onclick={share("twitter")}>{"Twitter"}</button>
                                <button class="share-button facebook" onclick={share("facebook")}>{"Facebook"}</button>
                            </div>
                        </div>
                    </section>

                    <main class="post-main">
                        <article ref={article_ref.clone()} class="post-article">
                            { Html::from_html_unchecked(AttrValue::from(detail.content.clone())) }
                        </article>

                        <div class="post-feedback">
                            <h3>{"Was this article helpful?"}</h3>
                            <div class="feedback-buttons">
                                <button
                                    class={classes!("feedback-button", (*is_helpful == Some(true)).then(|| "chosen"))}
                                    onclick={mark_helpful(true)}
                                >
                                    {"Yes, helpful!"}
                                </button>
                                <button
                                    class={classes!("feedback-button", (*is_helpful == Some(false)).then(|| "chosen"))}
                                    onclick={mark_helpful(false)}
                                >
                                    {"Could be better"}
                                </button>
                            </div>
                            {
                                match *is_helpful {
                                    Some(true) => html! { <p>{"Thank you for your feedback! 🎉"}</p> },
                                    Some(false) => html! { <p>{"Thanks for the feedback. We'll improve it! 💪"}</p> },
                                    None => html! {},
                                }
                            }
                        </div>

                        <div class="post-footer">
                            <Link<Route> to={Route::KnowledgeHub} classes="post-footer-back">
                                {"← Back to Knowledge Hub"}
                            </Link<Route>>
                        </div>
                    </main>
                </>
            }
        }
    };

    html! {
        <div class="post-page">
            <div class="post-progress">
                <div
                    class="post-progress-fill"
                    style={format!("width: {:.1}%;", *reading_progress)}
                />
            </div>
            { body }

            <style>
                {r#"
                .post-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #fff;
                }
                .post-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    z-index: 60;
                    background: rgba(255, 255, 255, 0.1);
                }
                .post-progress-fill {
                    height: 100%;
                    background: linear-gradient(90deg, #4f46e5, #9333ea);
                    transition: width 0.1s linear;
                }
                .post-loading {
                    padding-top: 8rem;
                    text-align: center;
                    color: #999;
                }
                .post-missing {
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                    max-width: 28rem;
                    margin: 0 auto;
                }
                .post-missing-icon { font-size: 3.5rem; margin-bottom: 1.5rem; }
                .post-missing h1 { font-size: 2.2rem; margin-bottom: 1rem; }
                .post-missing p { color: #999; margin-bottom: 2rem; }
                .post-missing-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    align-items: center;
                }
                .post-retry {
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    color: #7EB2FF;
                    border-radius: 999px;
                    padding: 0.7rem 1.8rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .post-retry:hover { background: rgba(30, 144, 255, 0.2); }
                .post-back-link {
                    color: #818cf8;
                    text-decoration: none;
                    font-size: 0.9rem;
                    transition: color 0.3s ease;
                }
                .post-back-link:hover { color: #a5b4fc; }
                .post-hero {
                    position: relative;
                    padding: 7rem 2rem 3rem;
                    overflow: hidden;
                }
                .post-hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .post-hero-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.3;
                }
                .post-hero-backdrop::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #0a0a0a, rgba(10, 10, 10, 0.8), rgba(10, 10, 10, 0.4));
                }
                .post-hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 800px;
                    margin: 0 auto;
                }
                .post-breadcrumb { margin-bottom: 1.5rem; }
                .post-category {
                    display: inline-block;
                    border: 1px solid;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 500;
                    padding: 0.4rem 1rem;
                    margin-bottom: 1.5rem;
                }
                .category-course-updates { background: rgba(59, 130, 246, 0.2); color: #93c5fd; border-color: rgba(59, 130, 246, 0.3); }
                .category-career-tips { background: rgba(34, 197, 94, 0.2); color: #86efac; border-color: rgba(34, 197, 94, 0.3); }
                .category-ai-trends { background: rgba(168, 85, 247, 0.2); color: #d8b4fe; border-color: rgba(168, 85, 247, 0.3); }
                .category-student-success { background: rgba(234, 179, 8, 0.2); color: #fde047; border-color: rgba(234, 179, 8, 0.3); }
                .category-ai-education { background: rgba(236, 72, 153, 0.2); color: #f9a8d4; border-color: rgba(236, 72, 153, 0.3); }
                .category-default { background: rgba(107, 114, 128, 0.2); color: #d1d5db; border-color: rgba(107, 114, 128, 0.3); }
                .post-hero-content h1 {
                    font-size: 2.5rem;
                    line-height: 1.2;
                    margin-bottom: 1rem;
                }
                .post-date { color: #999; margin-bottom: 1rem; }
                .post-excerpt {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .post-byline {
                    display: flex;
                    gap: 1.5rem;
                    color: #999;
                    margin-bottom: 2rem;
                }
                .post-share {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                }
                .post-share > span { color: #999; font-size: 0.9rem; }
                .share-button {
                    color: #fff;
                    font-weight: 500;
                    border: none;
                    border-radius: 10px;
                    padding: 0.7rem 1.4rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .share-button:hover { transform: scale(1.05); }
                .share-button.linkedin { background: #1d4ed8; }
                .share-button.twitter { background: #0284c7; }
                .share-button.facebook { background: #1e3a8a; }
                .post-main {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem 2rem 4rem;
                }
                .post-article {
                    line-height: 1.8;
                    color: #d1d5db;
                }
                .post-article h2, .post-article h3 {
                    color: #fff;
                    margin: 2rem 0 1rem;
                }
                .post-article p { margin-bottom: 1.25rem; }
                .post-article img { max-width: 100%; border-radius: 10px; }
                .post-feedback {
                    margin-top: 4rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                }
                .post-feedback h3 { margin-bottom: 1.25rem; }
                .feedback-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .feedback-button {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    border-radius: 10px;
                    padding: 0.7rem 1.4rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .feedback-button:hover { border-color: rgba(255, 255, 255, 0.6); }
                .feedback-button.chosen {
                    background: #4f46e5;
                    border-color: #4f46e5;
                }
                .post-feedback p { color: #999; }
                .post-footer {
                    margin-top: 3rem;
                    text-align: center;
                }
                .post-footer-back {
                    display: inline-block;
                    background: linear-gradient(90deg, #4f46e5, #9333ea);
                    color: #fff;
                    font-weight: 600;
                    border-radius: 12px;
                    padding: 1rem 2rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .post-footer-back:hover { box-shadow: 0 8px 24px rgba(79, 70, 229, 0.4); }
                @media (max-width: 768px) {
                    .post-hero-content h1 { font-size: 1.8rem; }
                    .post-main { padding: 1.5rem 1rem 3rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_get_their_own_badge_class() {
        assert_eq!(category_class("AI Trends"), "category-ai-trends");
        assert_eq!(category_class("Career Tips"), "category-career-tips");
    }

    #[test]
    fn unknown_categories_fall_back_to_the_default_badge() {
        assert_eq!(category_class("Gardening"), "category-default");
        assert_eq!(category_class(""), "category-default");
    }

    #[test]
    fn share_targets_encode_the_page_url() {
        let url = "https://academy.example/blog/ai paths";
        let target = share_target("linkedin", url, "AI Paths").unwrap();
        assert!(target.starts_with("https://www.linkedin.com/sharing/share-offsite/?url="));
        assert!(target.contains("https%3A%2F%2Facademy.example%2Fblog%2Fai%20paths"));

        let tweet = share_target("twitter", url, "AI Paths & You").unwrap();
        assert!(tweet.contains("text=AI%20Paths%20%26%20You"));
    }

    #[test]
    fn unknown_share_platforms_are_rejected() {
        assert!(share_target("myspace", "https://x", "t").is_none());
    }
}
