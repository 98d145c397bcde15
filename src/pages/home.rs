use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::assessment::AssessmentSection;
use crate::components::blog_teaser::BlogTeaserSection;
use crate::components::courses::CoursesSection;
use crate::components::cta::CallToActionSection;
use crate::components::faq::FaqSection;
use crate::components::hero_carousel::HeroCarousel;
use crate::components::onboarding::OnboardingExperience;
use crate::components::requirements::RequirementsSection;

/// Delay before the onboarding modal pops over a fresh page view.
const ONBOARDING_DELAY_MS: u32 = 3_000;

#[function_component(Home)]
pub fn home() -> Html {
    let show_onboarding = use_state(|| false);

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

    // Raise the onboarding overlay a few seconds after landing. The timer
    // dies with the page if the visitor navigates away first.
    {
        let show_onboarding = show_onboarding.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(ONBOARDING_DELAY_MS, move || {
                    show_onboarding.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let on_onboarding_close = {
        let show_onboarding = show_onboarding.clone();
        Callback::from(move |_| show_onboarding.set(false))
    };

    html! {
        <div class="home-page">
            <HeroCarousel />
            <CoursesSection />
            <AssessmentSection />
            <BlogTeaserSection />
            <CallToActionSection />
            <RequirementsSection />
            <FaqSection />
            {
                if *show_onboarding {
                    html! { <OnboardingExperience on_close={on_onboarding_close} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
