use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "🎯",
        "Industry-Ready Skills",
        "Salesforce, Oracle, Cloud Computing & Full Stack Development",
    ),
    (
        "🤖",
        "AI-Enhanced Learning",
        "Personalized curriculum that adapts to your learning style",
    ),
    (
        "💼",
        "Consulting Success",
        "Graduate as an independent consultant, not just an employee",
    ),
];

fn scroll_to_id(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(CallToActionSection)]
pub fn call_to_action_section() -> Html {
    let on_assessment = Callback::from(|_: MouseEvent| scroll_to_id("talent-compass"));
    let on_courses = Callback::from(|_: MouseEvent| scroll_to_id("courses"));

    html! {
        <section id="enroll" class="cta-section">
            <div class="cta-inner">
                <h2>{"Ready to Transform Your Career?"}</h2>
                <p class="cta-lede">
                    {"Join thousands of students who have successfully transitioned into independent consultants through our AI-enhanced learning programs."}
                </p>

                <div class="cta-benefits">
                    {
                        BENEFITS.iter().map(|(icon, title, detail)| html! {
                            <div class="cta-benefit">
                                <div class="benefit-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*detail}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="cta-actions">
                    <button class="cta-primary" onclick={on_assessment}>
                        {"Take Free Assessment"}
                    </button>
                    <button class="cta-outline" onclick={on_courses}>
                        {"View Programs"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .cta-section {
                    padding: 5rem 2rem;
                    background: #0a0a0a;
                    scroll-margin-top: 96px;
                }
                .cta-inner {
                    max-width: 900px;
                    margin: 0 auto;
                    text-align: center;
                }
                .cta-inner h2 {
                    font-size: 2.5rem;
                    color: #fff;
                    margin-bottom: 1.25rem;
                }
                .cta-lede {
                    color: #bfdbfe;
                    font-size: 1.15rem;
                    max-width: 600px;
                    margin: 0 auto 3rem;
                }
                .cta-benefits {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .cta-benefit {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(5px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 10px;
                    padding: 1.5rem;
                }
                .benefit-icon { font-size: 1.8rem; margin-bottom: 0.75rem; }
                .cta-benefit h3 { color: #fff; margin-bottom: 0.5rem; }
                .cta-benefit p { color: #bfdbfe; font-size: 0.9rem; }
                .cta-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .cta-primary {
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 600;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .cta-primary:hover { box-shadow: 0 8px 24px rgba(37, 99, 235, 0.4); }
                .cta-outline {
                    background: transparent;
                    color: #60a5fa;
                    font-size: 1.1rem;
                    font-weight: 600;
                    border: 2px solid #2563eb;
                    border-radius: 999px;
                    padding: 1rem 2rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .cta-outline:hover { background: rgba(37, 99, 235, 0.1); }
                "#}
            </style>
        </section>
    }
}
