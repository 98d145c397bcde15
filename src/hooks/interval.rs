use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Run `callback` every `millis` milliseconds for as long as the component
/// stays mounted. The underlying timer is cancelled on unmount (dropping a
/// gloo `Interval` clears it), so ticks never reach unmounted state.
///
/// The callback is captured when the interval is (re)created, so it should
/// only close over render-stable handles such as a reducer dispatcher.
#[hook]
pub fn use_interval<F>(callback: F, millis: u32)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |millis| {
            let interval = Interval::new(*millis, callback);
            move || drop(interval)
        },
        millis,
    );
}
