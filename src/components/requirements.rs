use yew::prelude::*;

use crate::hooks::animation::{use_animation, AnimationOptions};

const HARDWARE_ITEMS: &[(&str, &str)] = &[
    ("Computer:", "Standard Chromebook or basic laptop"),
    ("Internet:", "10+ Mbps connection speed"),
    ("Software:", "Modern web browser (Chrome, Firefox, Safari)"),
    ("Optional:", "Webcam and microphone for collaborative sessions"),
];

const PROGRAM_ITEMS: &[(&str, &str)] = &[
    ("Duration:", "12 weeks intensive training"),
    ("Weekly commitment:", "40 hours (full-time)"),
    ("Structure:", "Core modules (AM) + Hands-on practice (PM)"),
    ("Career Support:", "4 additional weeks of job placement"),
];

fn requirement_list(intro: &str, items: &[(&str, &str)]) -> Html {
    html! {
        <div class="requirements-card">
            <p class="requirements-intro">{intro}</p>
            <ul>
                {
                    items.iter().map(|(label, detail)| html! {
                        <li>
                            <span class="check">{"✓"}</span>
                            <span><strong>{*label}</strong>{" "}{*detail}</span>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}

#[function_component(RequirementsSection)]
pub fn requirements_section() -> Html {
    let inner_ref = use_animation(
        "animate-slide-up",
        AnimationOptions {
            animate_on_load: false,
            ..AnimationOptions::default()
        },
    );

    html! {
        <section class="requirements-section">
            <div class="requirements-inner" ref={inner_ref}>
                <div class="requirements-column">
                    <h2>{"Hardware & Connectivity Requirements"}</h2>
                    { requirement_list(
                        "Our cloud-based learning platform is accessible with minimal hardware requirements:",
                        HARDWARE_ITEMS,
                    ) }
                </div>
                <div class="requirements-column">
                    <h2>{"Program Structure & Time Commitment"}</h2>
                    { requirement_list(
                        "Our immersive 12-week program prepares you for real-world consulting challenges:",
                        PROGRAM_ITEMS,
                    ) }
                </div>
            </div>

            <style>
                {r#"
                .requirements-section {
                    padding: 4rem 2rem;
                    background: #0a0a0a;
                }
                .requirements-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                }
                .requirements-column h2 {
                    text-align: center;
                    color: #fff;
                    font-size: 1.4rem;
                    margin-bottom: 1.25rem;
                }
                .requirements-card {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(5px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 10px;
                    padding: 1.5rem;
                }
                .requirements-intro { color: #fff; margin-bottom: 1rem; }
                .requirements-card ul { list-style: none; }
                .requirements-card li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.6rem;
                    margin-bottom: 0.75rem;
                    color: #d1d5db;
                }
                .requirements-card .check { color: #60a5fa; }
                @media (max-width: 900px) {
                    .requirements-inner { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
