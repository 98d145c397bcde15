use yew::prelude::*;
use yew::{Children, Properties};

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "What does Ottobon Academy include?",
        "Guided learning paths, mentor sessions, portfolio projects, assessments, resume craft, role matching, and interview prep—optimized with AI to cut learning time.",
    ),
    (
        "Do you help with job placement?",
        "We support your full job journey: ATS-ready resume, role targeting, mock interviews with feedback, and post-placement check-ins.",
    ),
    (
        "How much time should I budget for Academy?",
        "Expect structured weekly cadence with project work. Many learners complete core paths in 12–16 weeks, depending on prior experience.",
    ),
    (
        "Can I join while working full-time?",
        "Yes. We design schedules for working professionals with asynchronous modules plus mentor checkpoints.",
    ),
    (
        "What courses are available in the Academy?",
        "We offer AI for UI/UX Design, AI in Marketing, AI Agent Development, and AI Data Labeling. Each course includes practical projects and industry-relevant skills.",
    ),
    (
        "How does the AI-powered learning work?",
        "Our AI system personalizes your learning path, provides instant feedback on projects, and adapts the curriculum based on your progress and career goals.",
    ),
    (
        "What support do I get as a student?",
        "You'll have access to dedicated mentors, peer study groups, career counseling, and our AI-powered learning assistant available 24/7.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="faq-inner">
                <h2>{"FAQ"}</h2>
                <div class="faq-rule"></div>
                {
                    FAQ_ENTRIES.iter().map(|(question, answer)| html! {
                        <FaqItem question={question.to_string()}>
                            <p>{*answer}</p>
                        </FaqItem>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 4rem 2rem;
                    background: #0a0a0a;
                    scroll-margin-top: 96px;
                }
                .faq-inner {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-inner h2 {
                    text-align: center;
                    font-size: 2.5rem;
                    color: #fff;
                }
                .faq-rule {
                    width: 120px;
                    height: 2px;
                    margin: 0.75rem auto 2.5rem;
                    background: linear-gradient(90deg, #60a5fa, #c084fc);
                    border-radius: 999px;
                }
                .faq-item {
                    background: rgba(17, 37, 55, 0.7);
                    backdrop-filter: blur(5px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .faq-item:hover {
                    background: rgba(17, 37, 55, 0.8);
                    box-shadow: 0 0 30px rgba(59, 130, 246, 0.2);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 500;
                    text-align: left;
                    padding: 1.4rem 1.5rem;
                    cursor: pointer;
                }
                .toggle-icon { color: #60a5fa; font-size: 1.3rem; }
                .faq-answer {
                    display: none;
                    padding: 0 1.5rem 1.4rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-item.open .faq-answer { display: block; padding-top: 1rem; }
                .faq-answer p { color: #bfdbfe; line-height: 1.6; }
                "#}
            </style>
        </section>
    }
}
