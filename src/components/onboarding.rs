use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::hooks::animation::{use_animation, AnimationOptions};
use crate::hooks::storage::{has_seen_onboarding, mark_onboarding_seen, BrowserFlags};

/// Exit/enter animation window between steps.
const TRANSITION_MS: u32 = 500;
/// How long the completion screen stays up before the modal closes itself.
const COMPLETE_DISMISS_MS: u32 = 2_000;

struct Narrator {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
    image: &'static str,
}

struct OnboardingStep {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    background: &'static str,
    narrator: Option<Narrator>,
}

const STEPS: &[OnboardingStep] = &[
    OnboardingStep {
        title: "Welcome to Your Learning Journey",
        description: "Every great technology career starts with a single step. At Ottobon Academy, we'll guide you through a transformative experience tailored to your unique strengths and aspirations.",
        icon: "🚀",
        background: "step-bg-blue",
        narrator: Some(Narrator {
            name: "Alex Chen",
            role: "Program Director",
            quote: "We don't just teach technology – we cultivate tomorrow's tech leaders through immersive, personalized learning.",
            image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=256&q=80",
        }),
    },
    OnboardingStep {
        title: "Discover Your Unique Path",
        description: "Through our proprietary personality assessment, we'll identify your natural strengths and match you with the perfect learning track that aligns with your abilities.",
        icon: "🧭",
        background: "step-bg-purple",
        narrator: Some(Narrator {
            name: "Dr. Maya Wilson",
            role: "Career Assessment Specialist",
            quote: "Your career journey should leverage your natural talents. Our assessment identifies paths where you'll truly excel.",
            image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-4.0.3&auto=format&fit=crop&w=256&q=80",
        }),
    },
    OnboardingStep {
        title: "Build Real-World Skills",
        description: "You'll tackle real industry projects, collaborating with mentors who have implemented enterprise solutions at leading companies.",
        icon: "⚒️",
        background: "step-bg-green",
        narrator: Some(Narrator {
            name: "James Rodriguez",
            role: "Industry Mentor",
            quote: "The projects you'll build here are the same challenges we face daily at Fortune 500 companies. You'll be job-ready from day one.",
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=256&q=80",
        }),
    },
    OnboardingStep {
        title: "Join the Elite Network",
        description: "Graduate into our community of tech professionals, gaining access to exclusive job opportunities, continued learning, and career advancement resources.",
        icon: "🌐",
        background: "step-bg-amber",
        narrator: Some(Narrator {
            name: "Sophia Kim",
            role: "Alumni Relations",
            quote: "Our graduates don't just find jobs – they build meaningful careers with continued support from our ever-growing network.",
            image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?ixlib=rb-4.0.3&auto=format&fit=crop&w=256&q=80",
        }),
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepperPhase {
    Step(usize),
    Complete,
    Dismissed,
}

/// Narrative position plus the visibility flag that drives the card's
/// exit/enter animation. All transitions are total; the step index stays
/// within `[0, len)` until the `Complete` state.
#[derive(Clone, PartialEq)]
pub struct StepperState {
    phase: StepperPhase,
    visible: bool,
    len: usize,
}

pub enum StepperAction {
    /// Move one step forward, or from the final step to `Complete`.
    Advance,
    /// Jump straight to an arbitrary step.
    GoTo(usize),
    /// Close the modal from any state.
    Dismiss,
    SetVisible(bool),
}

impl StepperState {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            phase: StepperPhase::Step(0),
            visible: true,
            len,
        }
    }

    pub fn phase(&self) -> StepperPhase {
        self.phase
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    fn advance(&self) -> Self {
        let phase = match self.phase {
            StepperPhase::Step(i) if i + 1 < self.len => StepperPhase::Step(i + 1),
            StepperPhase::Step(_) => StepperPhase::Complete,
            other => other,
        };
        Self {
            phase,
            visible: true,
            ..self.clone()
        }
    }

    fn go_to(&self, index: usize) -> Self {
        match self.phase {
            StepperPhase::Step(_) if index < self.len => Self {
                phase: StepperPhase::Step(index),
                visible: true,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    fn dismiss(&self) -> Self {
        Self {
            phase: StepperPhase::Dismissed,
            ..self.clone()
        }
    }
}

impl Reducible for StepperState {
    type Action = StepperAction;

    fn reduce(self: Rc<Self>, action: StepperAction) -> Rc<Self> {
        match action {
            StepperAction::Advance => Rc::new(self.advance()),
            StepperAction::GoTo(index) => Rc::new(self.go_to(index)),
            StepperAction::Dismiss => Rc::new(self.dismiss()),
            StepperAction::SetVisible(visible) => Rc::new(Self {
                visible,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OnboardingExperienceProps {
    pub on_close: Callback<()>,
}

#[function_component(OnboardingExperience)]
pub fn onboarding_experience(props: &OnboardingExperienceProps) -> Html {
    let state = use_reducer(|| StepperState::new(STEPS.len()));
    let dispatcher = state.dispatcher();
    let pending = use_mut_ref(|| None::<Timeout>);
    let modal_ref = use_animation("animate-fade-in", AnimationOptions::default());

    // The one-time "seen" flag is read and then written on first display.
    // Nothing consults it before showing the modal again; the storage
    // contract is kept as-is.
    use_effect_with_deps(
        move |_| {
            let flags = BrowserFlags;
            let seen = has_seen_onboarding(&flags);
            info!("onboarding shown (previously seen: {})", seen);
            if !seen {
                mark_onboarding_seen(&flags);
            }
            || ()
        },
        (),
    );

    // Pending transition timers die with the component.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| move || drop(pending.borrow_mut().take()),
            (),
        );
    }

    // The completion screen closes itself after a short hold, and dismissal
    // from any path tells the parent to unmount us.
    {
        let dispatcher = dispatcher.clone();
        let pending = pending.clone();
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |phase| {
                match phase {
                    StepperPhase::Complete => {
                        *pending.borrow_mut() = Some(Timeout::new(COMPLETE_DISMISS_MS, move || {
                            dispatcher.dispatch(StepperAction::Dismiss);
                        }));
                    }
                    StepperPhase::Dismissed => on_close.emit(()),
                    StepperPhase::Step(_) => {}
                }
                || ()
            },
            state.phase(),
        );
    }

    // Hide the card, then commit the transition once the exit animation has
    // had its window.
    let transition = {
        let dispatcher = dispatcher.clone();
        let pending = pending.clone();
        move |action: StepperAction| {
            dispatcher.dispatch(StepperAction::SetVisible(false));
            let dispatcher = dispatcher.clone();
            *pending.borrow_mut() = Some(Timeout::new(TRANSITION_MS, move || {
                dispatcher.dispatch(action);
            }));
        }
    };

    let on_continue = {
        let transition = transition.clone();
        Callback::from(move |_: MouseEvent| transition(StepperAction::Advance))
    };
    let on_skip = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(StepperAction::Dismiss))
    };

    let current = match state.phase() {
        StepperPhase::Step(i) => Some(i),
        _ => None,
    };

    if state.phase() == StepperPhase::Dismissed {
        return html! {};
    }

    let progress = match state.phase() {
        StepperPhase::Step(i) => ((i + 1) * 100) / STEPS.len(),
        _ => 100,
    };

    html! {
        <div class="onboarding-overlay">
            <div class="onboarding-modal" ref={modal_ref}>
                <div class="onboarding-progress-row">
                    <div class="onboarding-progress-track">
                        <div
                            class="onboarding-progress-fill"
                            style={format!("width: {}%;", progress)}
                        />
                    </div>
                    <button class="onboarding-skip" onclick={on_skip.clone()}>{"Skip"}</button>
                </div>

                <div class={classes!("onboarding-card", state.visible().then(|| "visible"))}>
                    {
                        if let Some(i) = current {
                            let step = &STEPS[i];
                            html! {
                                <div class="onboarding-step">
                                    <div class={classes!("step-pane", step.background)}>
                                        <div class="step-icon">{step.icon}</div>
                                        <h2>{step.title}</h2>
                                        <p>{step.description}</p>
                                        <button class="step-continue" onclick={on_continue.clone()}>
                                            { if i + 1 < STEPS.len() { "Continue" } else { "Get Started" } }
                                        </button>
                                        <p class="step-counter">
                                            {format!("Step {} of {}", i + 1, STEPS.len())}
                                        </p>
                                    </div>
                                    <div class="narrator-pane">
                                        {
                                            if let Some(narrator) = &step.narrator {
                                                html! {
                                                    <>
                                                        <div class="narrator-header">
                                                            <img src={narrator.image} alt={narrator.name} loading="lazy" />
                                                            <div>
                                                                <h3>{narrator.name}</h3>
                                                                <p>{narrator.role}</p>
                                                            </div>
                                                        </div>
                                                        <blockquote class="narrator-quote">
                                                            {narrator.quote}
                                                        </blockquote>
                                                    </>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <div class="step-dots">
                                            {
                                                STEPS.iter().enumerate().map(|(dot, _)| {
                                                    let transition = transition.clone();
                                                    let onclick = Callback::from(move |_: MouseEvent| {
                                                        transition(StepperAction::GoTo(dot));
                                                    });
                                                    html! {
                                                        <button
                                                            class={classes!("step-dot", (dot == i).then(|| "active"))}
                                                            {onclick}
                                                            aria-label={format!("Go to step {}", dot + 1)}
                                                        />
                                                    }
                                                }).collect::<Html>()
                                            }
                                        </div>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="onboarding-complete">
                                    <div class="complete-badge">{"✓"}</div>
                                    <h2>{"You're All Set!"}</h2>
                                    <p>
                                        {"Your journey with Ottobon Academy begins now. Explore our programs and discover your path to tech excellence."}
                                    </p>
                                    <button class="step-continue" onclick={on_skip}>
                                        {"Explore Ottobon"}
                                    </button>
                                </div>
                            }
                        }
                    }
                </div>
            </div>

            <style>
                {r#"
                .onboarding-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(5px);
                }
                .onboarding-modal {
                    width: min(900px, calc(100% - 2rem));
                }
                .onboarding-progress-row {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                }
                .onboarding-progress-track {
                    flex: 1;
                    height: 10px;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    overflow: hidden;
                }
                .onboarding-progress-fill {
                    height: 100%;
                    background: #fff;
                    border-radius: 999px;
                    transition: width 0.5s ease;
                }
                .onboarding-skip {
                    background: rgba(255, 255, 255, 0.2);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.3rem 1rem;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .onboarding-skip:hover { background: rgba(255, 255, 255, 0.3); }
                .onboarding-card {
                    background: #fff;
                    color: #1a1a1a;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.4);
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.5s ease;
                }
                .onboarding-card.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .onboarding-step {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                }
                .step-pane {
                    padding: 2.5rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    align-items: flex-start;
                }
                .step-bg-blue { background: linear-gradient(90deg, #3b82f6, #4f46e5); }
                .step-bg-purple { background: linear-gradient(90deg, #a855f7, #ec4899); }
                .step-bg-green { background: linear-gradient(90deg, #22c55e, #10b981); }
                .step-bg-amber { background: linear-gradient(90deg, #f59e0b, #f97316); }
                .step-icon { font-size: 2.5rem; }
                .step-pane h2 { font-size: 1.8rem; line-height: 1.25; }
                .step-pane p { color: rgba(255, 255, 255, 0.9); line-height: 1.6; }
                .step-continue {
                    background: #fff;
                    color: #2563eb;
                    font-weight: 600;
                    border: none;
                    border-radius: 999px;
                    padding: 0.7rem 1.8rem;
                    cursor: pointer;
                    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.15);
                    transition: all 0.3s ease;
                }
                .step-continue:hover { background: #eff6ff; }
                .step-counter {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.7);
                    margin-top: 1rem;
                }
                .narrator-pane {
                    background: #f9fafb;
                    padding: 2.5rem;
                    display: flex;
                    flex-direction: column;
                }
                .narrator-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .narrator-header img {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid #fff;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                }
                .narrator-header h3 { color: #111827; }
                .narrator-header p { font-size: 0.85rem; color: #6b7280; }
                .narrator-quote {
                    flex: 1;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 10px;
                    padding: 1.5rem;
                    color: #374151;
                    font-style: italic;
                    box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
                }
                .step-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }
                .step-dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 999px;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .step-dot:hover { background: #9ca3af; }
                .step-dot.active { width: 24px; background: #2563eb; }
                .onboarding-complete {
                    padding: 2.5rem;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .complete-badge {
                    width: 80px;
                    height: 80px;
                    border-radius: 50%;
                    background: #22c55e;
                    color: #fff;
                    font-size: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .onboarding-complete p { color: #4b5563; max-width: 28rem; }
                @media (max-width: 768px) {
                    .onboarding-step { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: StepperState, action: StepperAction) -> StepperState {
        Rc::try_unwrap(Rc::new(state).reduce(action)).unwrap_or_else(|rc| (*rc).clone())
    }

    #[test]
    fn advancing_through_every_step_reaches_complete() {
        let mut state = StepperState::new(4);
        for expected in 1..4 {
            state = apply(state, StepperAction::Advance);
            assert_eq!(state.phase(), StepperPhase::Step(expected));
        }
        state = apply(state, StepperAction::Advance);
        assert_eq!(state.phase(), StepperPhase::Complete);
    }

    #[test]
    fn dismiss_works_from_any_state() {
        let from_first = apply(StepperState::new(4), StepperAction::Dismiss);
        assert_eq!(from_first.phase(), StepperPhase::Dismissed);

        let mut state = StepperState::new(4);
        state = apply(state, StepperAction::Advance);
        state = apply(state, StepperAction::Dismiss);
        assert_eq!(state.phase(), StepperPhase::Dismissed);

        let mut state = StepperState::new(4);
        for _ in 0..4 {
            state = apply(state, StepperAction::Advance);
        }
        assert_eq!(state.phase(), StepperPhase::Complete);
        state = apply(state, StepperAction::Dismiss);
        assert_eq!(state.phase(), StepperPhase::Dismissed);
    }

    #[test]
    fn go_to_jumps_within_bounds_only() {
        let state = apply(StepperState::new(4), StepperAction::GoTo(2));
        assert_eq!(state.phase(), StepperPhase::Step(2));

        let state = apply(state, StepperAction::GoTo(9));
        assert_eq!(state.phase(), StepperPhase::Step(2));
    }

    #[test]
    fn advance_past_complete_is_inert() {
        let mut state = StepperState::new(2);
        state = apply(state, StepperAction::Advance);
        state = apply(state, StepperAction::Advance);
        assert_eq!(state.phase(), StepperPhase::Complete);
        state = apply(state, StepperAction::Advance);
        assert_eq!(state.phase(), StepperPhase::Complete);
    }

    #[test]
    fn transitions_restore_visibility() {
        let mut state = StepperState::new(4);
        state = apply(state, StepperAction::SetVisible(false));
        assert!(!state.visible());
        state = apply(state, StepperAction::Advance);
        assert!(state.visible());
    }
}
