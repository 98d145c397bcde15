use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

struct Question {
    id: u32,
    text: &'static str,
    options: &'static [&'static str],
}

const QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        text: "When faced with a complex problem, you typically:",
        options: &[
            "Break it down into smaller components and tackle each systematically",
            "Look for patterns and similarities to problems you've solved before",
            "Gather input from others to gain different perspectives",
            "Rely on intuition and creative approaches",
        ],
    },
    Question {
        id: 2,
        text: "Which best describes your approach to learning new technologies?",
        options: &[
            "Reading documentation and following tutorials step-by-step",
            "Experimenting and building small projects to test capabilities",
            "Taking structured courses with assessments",
            "Learning as needed when solving real problems",
        ],
    },
    Question {
        id: 3,
        text: "When working on a team project, you prefer to:",
        options: &[
            "Take a leadership role organizing tasks and timelines",
            "Focus on technical implementation and problem solving",
            "Bridge communication between technical and non-technical members",
            "Contribute creative ideas and alternative approaches",
        ],
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuizView {
    Intro,
    Questions,
    Results,
}

/// The quiz is a three-view machine over a fixed question list. Answers map
/// question id to the selected option index; re-selecting overwrites.
/// `Results` is terminal; only a full reload starts over.
#[derive(Clone, PartialEq)]
pub struct QuizState {
    view: QuizView,
    current: usize,
    answers: HashMap<u32, usize>,
    len: usize,
}

pub enum QuizAction {
    Start,
    Select { question: u32, option: usize },
    Next,
    Prev,
}

impl QuizState {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            view: QuizView::Intro,
            current: 0,
            answers: HashMap::new(),
            len,
        }
    }

    pub fn view(&self) -> QuizView {
        self.view
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn answer(&self, question: u32) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    fn start(&self) -> Self {
        match self.view {
            QuizView::Intro => Self {
                view: QuizView::Questions,
                current: 0,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    fn select(&self, question: u32, option: usize) -> Self {
        if self.view != QuizView::Questions {
            return self.clone();
        }
        let mut answers = self.answers.clone();
        answers.insert(question, option);
        Self {
            answers,
            ..self.clone()
        }
    }

    fn next(&self) -> Self {
        match self.view {
            QuizView::Questions if self.current + 1 < self.len => Self {
                current: self.current + 1,
                ..self.clone()
            },
            QuizView::Questions => Self {
                view: QuizView::Results,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    fn prev(&self) -> Self {
        match self.view {
            QuizView::Questions if self.current > 0 => Self {
                current: self.current - 1,
                ..self.clone()
            },
            QuizView::Questions => Self {
                view: QuizView::Intro,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}

impl Reducible for QuizState {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: QuizAction) -> Rc<Self> {
        match action {
            QuizAction::Start => Rc::new(self.start()),
            QuizAction::Select { question, option } => Rc::new(self.select(question, option)),
            QuizAction::Next => Rc::new(self.next()),
            QuizAction::Prev => Rc::new(self.prev()),
        }
    }
}

// The results panel shows a fixed profile; no scoring is derived from the
// collected answers.
const STRENGTHS: &[(&str, u32)] = &[
    ("Technical Aptitude", 82),
    ("Problem Solving", 75),
    ("Client Communication", 68),
];

#[function_component(AssessmentSection)]
pub fn assessment_section() -> Html {
    let state = use_reducer(|| QuizState::new(QUESTIONS.len()));
    let dispatcher = state.dispatcher();

    let on_start = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::Start))
    };
    let on_next = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::Next))
    };
    let on_prev = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::Prev))
    };

    let body = match state.view() {
        QuizView::Intro => html! {
            <div class="quiz-intro">
                <h3>{"Career Aptitude Assessment"}</h3>
                <p>
                    {"This assessment evaluates your natural aptitudes, working style, and personal strengths to match you with the ideal technology consulting path."}
                </p>
                <div class="quiz-benefits">
                    <h4>{"Benefits of completing this assessment:"}</h4>
                    <ul>
                        <li>{"Personalized program recommendations based on your strengths"}</li>
                        <li>{"Potential tuition discount of up to 90% based on results"}</li>
                        <li>{"Insights to help counselors create your optimal learning path"}</li>
                    </ul>
                </div>
                <button class="quiz-primary" onclick={on_start}>
                    {"Start Your Assessment"}
                </button>
            </div>
        },
        QuizView::Questions => {
            let question = &QUESTIONS[state.current()];
            html! {
                <div class="quiz-question">
                    <h3>{format!("{}. {}", state.current() + 1, question.text)}</h3>
                    <div class="quiz-options">
                        {
                            question.options.iter().enumerate().map(|(index, option)| {
                                let selected = state.answer(question.id) == Some(index);
                                let dispatcher = dispatcher.clone();
                                let question_id = question.id;
                                let onchange = Callback::from(move |_: Event| {
                                    dispatcher.dispatch(QuizAction::Select {
                                        question: question_id,
                                        option: index,
                                    });
                                });
                                html! {
                                    <label class={classes!("quiz-option", selected.then(|| "selected"))}>
                                        <input
                                            type="radio"
                                            name={format!("q{}", question.id)}
                                            checked={selected}
                                            {onchange}
                                        />
                                        <span>{*option}</span>
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="quiz-nav">
                        <button class="quiz-secondary" onclick={on_prev}>{"Previous"}</button>
                        <button class="quiz-primary" onclick={on_next}>
                            { if state.current() + 1 < QUESTIONS.len() { "Next" } else { "See Results" } }
                        </button>
                    </div>
                </div>
            }
        }
        QuizView::Results => html! {
            <div class="quiz-results">
                <h3>{"Your Consultant Potential Profile"}</h3>
                <div class="results-grid">
                    <div>
                        <h4>{"Your Strengths"}</h4>
                        {
                            STRENGTHS.iter().map(|(label, pct)| html! {
                                <div class="strength-row">
                                    <div class="strength-label">
                                        <span>{*label}</span>
                                        <span>{format!("{}%", pct)}</span>
                                    </div>
                                    <div class="strength-track">
                                        <div class="strength-fill" style={format!("width: {}%;", pct)} />
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div>
                        <h4>{"Recommended Paths"}</h4>
                        <ul class="results-paths">
                            <li><strong>{"Primary: "}</strong>{"AI Consulting – Generative AI Solutions"}</li>
                            <li><strong>{"Secondary: "}</strong>{"Business Applications – Salesforce CX"}</li>
                            <li><strong>{"Scholarship Eligible: "}</strong>{"75% tuition reduction"}</li>
                            <li><strong>{"Additional Discount: "}</strong>{"Up to 15% more based on experience"}</li>
                        </ul>
                    </div>
                </div>
                <div class="results-callout">
                    <h4>{"Congratulations!"}</h4>
                    <p>
                        {"Based on your assessment, you currently qualify for a 75% tuition reduction. Combined with your experience-based discount, you could receive up to 90% off your total tuition."}
                    </p>
                    <p>
                        {"We recommend exploring our AI Consulting track, where your technical aptitude and problem-solving skills will be valuable assets."}
                    </p>
                    <p>
                        {"Schedule a call with our admissions team to discuss your results and finalize your discount eligibility."}
                    </p>
                </div>
                <div class="results-actions">
                    <a href="#enroll" class="quiz-primary">{"Apply Now"}</a>
                    <button class="quiz-outline">{"Schedule Consultation"}</button>
                </div>
            </div>
        },
    };

    html! {
        <div id="talent-compass">
            <section id="assessment" class="assessment-section">
                <div class="assessment-inner">
                    <h2>{"Career Aptitude Assessment"}</h2>
                    <p class="assessment-lede">
                        {"Discover your unique strengths and the perfect program match through our comprehensive assessment tool. Find your ideal path and maximize your potential."}
                    </p>
                    <div class="assessment-banner">
                        <strong>{"Save up to 90% on your tuition"}</strong>
                        <span>{"Assessment results combined with your background can qualify you for substantial discounts"}</span>
                    </div>
                    <div class="assessment-card">
                        { body }
                    </div>
                </div>

                <style>
                    {r#"
                    .assessment-section {
                        padding: 4rem 2rem;
                        background: linear-gradient(90deg, #2563eb, #9333ea);
                        color: #fff;
                    }
                    .assessment-inner {
                        max-width: 900px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .assessment-inner h2 { font-size: 2.2rem; margin-bottom: 1rem; }
                    .assessment-lede {
                        max-width: 600px;
                        margin: 0 auto 2rem;
                        opacity: 0.9;
                    }
                    .assessment-banner {
                        display: inline-flex;
                        flex-direction: column;
                        gap: 0.25rem;
                        background: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(5px);
                        border-radius: 10px;
                        padding: 1rem 2rem;
                        margin-bottom: 2.5rem;
                    }
                    .assessment-banner strong { font-size: 1.1rem; }
                    .assessment-banner span { opacity: 0.9; font-size: 0.95rem; }
                    .assessment-card {
                        background: #fff;
                        color: #1a1a1a;
                        border-radius: 12px;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
                        padding: 2.5rem;
                        text-align: left;
                    }
                    .quiz-intro { text-align: center; }
                    .quiz-intro h3 { font-size: 1.5rem; margin-bottom: 1rem; }
                    .quiz-intro > p { color: #4b5563; margin-bottom: 1.5rem; }
                    .quiz-benefits {
                        background: #eff6ff;
                        border-left: 4px solid #3b82f6;
                        border-radius: 0 8px 8px 0;
                        padding: 1rem 1.5rem;
                        text-align: left;
                        margin-bottom: 1.5rem;
                    }
                    .quiz-benefits ul { margin-top: 0.5rem; padding-left: 1.2rem; }
                    .quiz-benefits li { margin: 0.3rem 0; color: #374151; }
                    .quiz-primary {
                        display: inline-block;
                        background: #2563eb;
                        color: #fff;
                        font-weight: 600;
                        border: none;
                        border-radius: 999px;
                        padding: 0.8rem 2rem;
                        cursor: pointer;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .quiz-primary:hover { background: #1d4ed8; box-shadow: 0 4px 14px rgba(37, 99, 235, 0.4); }
                    .quiz-secondary {
                        background: #e5e7eb;
                        color: #1f2937;
                        border: none;
                        border-radius: 999px;
                        padding: 0.8rem 2rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .quiz-secondary:hover { background: #d1d5db; }
                    .quiz-outline {
                        background: transparent;
                        color: #2563eb;
                        border: 2px solid #2563eb;
                        border-radius: 999px;
                        padding: 0.8rem 2rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .quiz-outline:hover { background: #2563eb; color: #fff; }
                    .quiz-question h3 { font-size: 1.25rem; margin-bottom: 1.25rem; }
                    .quiz-options { display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 2rem; }
                    .quiz-option {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 10px;
                        padding: 0.9rem 1rem;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .quiz-option:hover { background: #f9fafb; }
                    .quiz-option.selected { border-color: #2563eb; background: rgba(37, 99, 235, 0.05); }
                    .quiz-option input { margin-top: 0.2rem; }
                    .quiz-nav { display: flex; justify-content: space-between; }
                    .quiz-results h3 { font-size: 1.5rem; margin-bottom: 1.5rem; }
                    .results-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .results-grid h4 { margin-bottom: 1rem; }
                    .strength-row { margin-bottom: 1rem; }
                    .strength-label {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.3rem;
                        font-weight: 500;
                    }
                    .strength-track {
                        height: 8px;
                        background: #e5e7eb;
                        border-radius: 999px;
                        overflow: hidden;
                    }
                    .strength-fill {
                        height: 100%;
                        background: #2563eb;
                        border-radius: 999px;
                    }
                    .results-paths { list-style: none; }
                    .results-paths li { margin: 0.5rem 0; color: #374151; }
                    .results-callout {
                        background: #eff6ff;
                        border-left: 4px solid #3b82f6;
                        border-radius: 0 10px 10px 0;
                        padding: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .results-callout h4 { margin-bottom: 0.75rem; }
                    .results-callout p { color: #374151; margin-bottom: 0.75rem; }
                    .results-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
                    @media (max-width: 768px) {
                        .results-grid { grid-template-columns: 1fr; }
                        .assessment-card { padding: 1.5rem; }
                    }
                    "#}
                </style>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: QuizState, action: QuizAction) -> QuizState {
        Rc::try_unwrap(Rc::new(state).reduce(action)).unwrap_or_else(|rc| (*rc).clone())
    }

    fn started() -> QuizState {
        apply(QuizState::new(3), QuizAction::Start)
    }

    #[test]
    fn start_moves_from_intro_to_questions() {
        let state = started();
        assert_eq!(state.view(), QuizView::Questions);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn reselecting_overwrites_the_previous_answer() {
        let state = apply(
            started(),
            QuizAction::Select {
                question: 1,
                option: 2,
            },
        );
        let state = apply(
            state,
            QuizAction::Select {
                question: 1,
                option: 0,
            },
        );
        assert_eq!(state.answer_count(), 1);
        assert_eq!(state.answer(1), Some(0));
    }

    #[test]
    fn prev_from_first_question_returns_to_intro() {
        let state = apply(started(), QuizAction::Prev);
        assert_eq!(state.view(), QuizView::Intro);
    }

    #[test]
    fn advancing_past_the_last_question_shows_results() {
        let mut state = started();
        state = apply(state, QuizAction::Next);
        state = apply(state, QuizAction::Next);
        assert_eq!(state.view(), QuizView::Questions);
        assert_eq!(state.current(), 2);
        state = apply(state, QuizAction::Next);
        assert_eq!(state.view(), QuizView::Results);
    }

    #[test]
    fn results_view_is_terminal() {
        let mut state = started();
        for _ in 0..3 {
            state = apply(state, QuizAction::Next);
        }
        assert_eq!(state.view(), QuizView::Results);
        let state = apply(state, QuizAction::Prev);
        assert_eq!(state.view(), QuizView::Results);
        let state = apply(state, QuizAction::Next);
        assert_eq!(state.view(), QuizView::Results);
    }

    #[test]
    fn answers_collected_across_questions_keep_unique_keys() {
        let mut state = started();
        state = apply(
            state,
            QuizAction::Select {
                question: 1,
                option: 3,
            },
        );
        state = apply(state, QuizAction::Next);
        state = apply(
            state,
            QuizAction::Select {
                question: 2,
                option: 1,
            },
        );
        assert_eq!(state.answer_count(), 2);
        assert_eq!(state.answer(1), Some(3));
        assert_eq!(state.answer(2), Some(1));
    }

    #[test]
    fn selecting_outside_the_question_view_is_ignored() {
        let state = apply(
            QuizState::new(3),
            QuizAction::Select {
                question: 1,
                option: 0,
            },
        );
        assert_eq!(state.answer_count(), 0);
    }
}
