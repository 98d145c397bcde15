use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::hooks::interval::use_interval;

const AUTOPLAY_INTERVAL_MS: u32 = 6_000;

struct Slide {
    subtitle: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    alt: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        subtitle: "Up-Skill",
        title: "Master AI-Powered Skills for Career Growth",
        description: "Learn cutting-edge AI technologies with hands-on projects. From UI/UX design automation to agent development, gain job-ready skills through expert-led programs with guaranteed placement support.",
        image: "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&w=2070&q=80",
        alt: "AI-powered learning dashboard with analytics and progress tracking",
    },
    Slide {
        subtitle: "Job Assistance",
        title: "Land Your Dream Role with AI Job Tools",
        description: "Access ATS-optimized resume builders, AI interview prep, and personalized job matching. Get real-time feedback, salary insights, and direct connections to hiring managers at top companies.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=2015&q=80",
        alt: "Career success dashboard showing job matches and interview preparation",
    },
    Slide {
        subtitle: "Career Assist",
        title: "Get Expert Mentorship Every Step of the Way",
        description: "Connect with industry leaders for personalized guidance. Ask technical questions, review code, plan your career path, and get insider advice from professionals at FAANG companies.",
        image: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?auto=format&fit=crop&w=2070&q=80",
        alt: "Professional mentor providing career guidance and technical advice",
    },
];

/// Slide position plus hover-pause flag. The active index is always within
/// `[0, len)` and navigation wraps at both ends.
#[derive(Clone, PartialEq)]
pub struct CarouselState {
    active: usize,
    paused: bool,
    len: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
    Jump(usize),
    Pause,
    Resume,
    /// Autoplay tick. Advances unless the pointer is over the carousel.
    Tick,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            active: 0,
            paused: false,
            len,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    fn next(&self) -> Self {
        Self {
            active: (self.active + 1) % self.len,
            ..self.clone()
        }
    }

    fn prev(&self) -> Self {
        Self {
            active: (self.active + self.len - 1) % self.len,
            ..self.clone()
        }
    }

    fn jump(&self, index: usize) -> Self {
        if index < self.len {
            Self {
                active: index,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    fn with_paused(&self, paused: bool) -> Self {
        Self {
            paused,
            ..self.clone()
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        match action {
            CarouselAction::Next => Rc::new(self.next()),
            CarouselAction::Prev => Rc::new(self.prev()),
            CarouselAction::Jump(index) => Rc::new(self.jump(index)),
            CarouselAction::Pause => Rc::new(self.with_paused(true)),
            CarouselAction::Resume => Rc::new(self.with_paused(false)),
            CarouselAction::Tick => {
                if self.paused {
                    self
                } else {
                    Rc::new(self.next())
                }
            }
        }
    }
}

#[function_component(HeroCarousel)]
pub fn hero_carousel() -> Html {
    let state = use_reducer(|| CarouselState::new(SLIDES.len()));
    let dispatcher = state.dispatcher();

    {
        let dispatcher = dispatcher.clone();
        use_interval(move || dispatcher.dispatch(CarouselAction::Tick), AUTOPLAY_INTERVAL_MS);
    }

    // Arrow keys page through the slides.
    {
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    match e.key().as_str() {
                        "ArrowLeft" => dispatcher.dispatch(CarouselAction::Prev),
                        "ArrowRight" => dispatcher.dispatch(CarouselAction::Next),
                        _ => {}
                    }
                }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
                window
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    let _ = web_sys::window().unwrap().remove_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let on_prev = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Next))
    };
    let on_enter = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Pause))
    };
    let on_leave = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Resume))
    };

    let track_style = format!(
        "transform: translateX(-{}%);",
        state.active() * 100
    );

    html! {
        <section class="hero-carousel" id="hero">
            <div class="carousel-viewport" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="carousel-track" style={track_style}>
                    {
                        SLIDES.iter().map(|slide| html! {
                            <div class="carousel-slide">
                                <div class="slide-card">
                                    <div class="slide-content">
                                        <span class="slide-subtitle">{slide.subtitle}</span>
                                        <h1>{slide.title}</h1>
                                        <p>{slide.description}</p>
                                        <a href="#talent-compass" class="slide-cta">
                                            {"Start Your Journey →"}
                                        </a>
                                    </div>
                                    <div class="slide-image">
                                        <img src={slide.image} alt={slide.alt} loading="lazy" />
                                    </div>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <button class="carousel-arrow prev" onclick={on_prev} aria-label="Previous slide">
                {"‹"}
            </button>
            <button class="carousel-arrow next" onclick={on_next} aria-label="Next slide">
                {"›"}
            </button>

            <div class="carousel-dots">
                {
                    SLIDES.iter().enumerate().map(|(i, slide)| {
                        let dispatcher = dispatcher.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(CarouselAction::Jump(i));
                        });
                        html! {
                            <button
                                class={classes!("carousel-dot", (i == state.active()).then(|| "active"))}
                                {onclick}
                                aria-label={format!("Go to slide {}", i + 1)}
                                title={slide.title}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .hero-carousel {
                    position: relative;
                    padding: 7rem 2rem 3rem;
                    background: #0a0a0a;
                }
                .carousel-viewport {
                    max-width: 1200px;
                    margin: 0 auto;
                    overflow: hidden;
                    border-radius: 12px;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease;
                }
                .carousel-slide {
                    min-width: 100%;
                }
                .slide-card {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    background: linear-gradient(135deg, rgba(26, 26, 26, 0.95), #0a0a0a);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .slide-content {
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .slide-subtitle {
                    align-self: flex-start;
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #7EB2FF;
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                }
                .slide-content h1 {
                    font-size: 2.5rem;
                    line-height: 1.2;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .slide-content p {
                    color: #999;
                    font-size: 1.1rem;
                    line-height: 1.6;
                }
                .slide-cta {
                    align-self: flex-start;
                    background: #1E90FF;
                    color: #fff;
                    font-weight: 600;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .slide-cta:hover {
                    background: #1873CC;
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.4);
                }
                .slide-image {
                    position: relative;
                    min-height: 280px;
                }
                .slide-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(255, 255, 255, 0.9);
                    color: #1a1a1a;
                    border: none;
                    border-radius: 50%;
                    width: 48px;
                    height: 48px;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    z-index: 2;
                }
                .carousel-arrow:hover {
                    background: #fff;
                    transform: translateY(-50%) scale(1.1);
                }
                .carousel-arrow.prev { left: 2rem; }
                .carousel-arrow.next { right: 2rem; }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .carousel-dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 999px;
                    border: none;
                    background: #444;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-dot:hover { background: #666; }
                .carousel-dot.active {
                    width: 32px;
                    background: #1E90FF;
                }
                @media (max-width: 768px) {
                    .slide-card { grid-template-columns: 1fr; }
                    .slide-content { padding: 2rem; }
                    .slide-content h1 { font-size: 1.8rem; }
                    .carousel-arrow.prev { left: 0.5rem; }
                    .carousel-arrow.next { right: 0.5rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: CarouselState, action: CarouselAction) -> CarouselState {
        Rc::try_unwrap(Rc::new(state).reduce(action)).unwrap_or_else(|rc| (*rc).clone())
    }

    #[test]
    fn next_wraps_from_last_slide_to_first() {
        let mut state = CarouselState::new(3);
        for _ in 0..3 {
            state = apply(state, CarouselAction::Next);
        }
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn prev_wraps_from_first_slide_to_last() {
        let state = apply(CarouselState::new(3), CarouselAction::Prev);
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        let mut state = CarouselState::new(3);
        let moves = [
            CarouselAction::Next,
            CarouselAction::Next,
            CarouselAction::Prev,
            CarouselAction::Next,
            CarouselAction::Next,
            CarouselAction::Next,
            CarouselAction::Prev,
            CarouselAction::Prev,
            CarouselAction::Prev,
            CarouselAction::Prev,
        ];
        for action in moves {
            state = apply(state, action);
            assert!(state.active() < 3);
        }
    }

    #[test]
    fn jump_ignores_out_of_range_indexes() {
        let state = apply(CarouselState::new(3), CarouselAction::Jump(7));
        assert_eq!(state.active(), 0);
        let state = apply(state, CarouselAction::Jump(2));
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn tick_advances_only_while_unpaused() {
        let state = apply(CarouselState::new(3), CarouselAction::Tick);
        assert_eq!(state.active(), 1);

        let state = apply(state, CarouselAction::Pause);
        assert!(state.paused());
        let state = apply(state, CarouselAction::Tick);
        assert_eq!(state.active(), 1);

        let state = apply(state, CarouselAction::Resume);
        assert!(!state.paused());
        let state = apply(state, CarouselAction::Tick);
        assert_eq!(state.active(), 2);
    }
}
