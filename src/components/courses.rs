use yew::prelude::*;

use crate::hooks::animation::{use_staggered_animation, AnimationOptions};

struct Course {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    icon: &'static str,
}

const COURSES: &[Course] = &[
    Course {
        title: "AI for UI/UX Designer",
        description: "Integrate AI into UI/UX workflows for smarter, data-driven design and personalized user experiences.",
        category: "Career Launch",
        icon: "🎨",
    },
    Course {
        title: "AI in Marketing",
        description: "Master AI-driven marketing strategies and automation tools to transform customer engagement.",
        category: "Career Launch",
        icon: "📈",
    },
    Course {
        title: "AI Agent Development",
        description: "Build intelligent AI agents and autonomous systems using cutting-edge frameworks and NLP.",
        category: "Career Launch",
        icon: "🤖",
    },
    Course {
        title: "AI Data Labeling",
        description: "Specialize in high-quality data annotation and labeling workflows for training robust AI models.",
        category: "Career Launch",
        icon: "🏷️",
    },
];

#[function_component(CoursesSection)]
pub fn courses_section() -> Html {
    let grid_ref = use_staggered_animation(
        "course-card-visible",
        AnimationOptions {
            animate_on_load: false,
            ..AnimationOptions::default()
        },
    );

    html! {
        <section id="courses" class="courses-section">
            <div class="courses-inner">
                <h2>{"Programs Built for the AI Economy"}</h2>
                <p class="courses-lede">
                    {"Four focused tracks, each pairing expert mentorship with portfolio projects that hiring managers recognize."}
                </p>
                <div class="courses-grid" ref={grid_ref}>
                    {
                        COURSES.iter().map(|course| html! {
                            <div class="course-card">
                                <div class="course-icon">{course.icon}</div>
                                <span class="course-category">{course.category}</span>
                                <h3>{course.title}</h3>
                                <p>{course.description}</p>
                                <a href="#talent-compass" class="course-link">
                                    {"Find your fit →"}
                                </a>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .courses-section {
                    padding: 4rem 2rem;
                    background: #0a0a0a;
                    scroll-margin-top: 96px;
                }
                .courses-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }
                .courses-inner h2 {
                    font-size: 2.2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .courses-lede {
                    color: #999;
                    max-width: 600px;
                    margin: 1rem auto 2.5rem;
                }
                .courses-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .course-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem 1.5rem;
                    text-align: left;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: all 0.5s ease;
                }
                .course-card.course-card-visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .course-card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-4px);
                }
                .course-icon { font-size: 2rem; }
                .course-category {
                    align-self: flex-start;
                    font-size: 0.7rem;
                    font-weight: 600;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: #7EB2FF;
                    background: rgba(30, 144, 255, 0.1);
                    padding: 0.25rem 0.6rem;
                    border-radius: 999px;
                }
                .course-card h3 { color: #fff; font-size: 1.2rem; }
                .course-card p { color: #999; font-size: 0.95rem; line-height: 1.5; flex: 1; }
                .course-link {
                    color: #7EB2FF;
                    text-decoration: none;
                    font-weight: 600;
                    font-size: 0.95rem;
                }
                .course-link:hover { color: #a5c8ff; }
                "#}
            </style>
        </section>
    }
}
