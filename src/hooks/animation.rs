use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const LOAD_DELAY_MS: u32 = 100;
const STAGGER_STEP_MS: u32 = 150;

/// Options shared by both animation hooks.
#[derive(Clone, PartialEq)]
pub struct AnimationOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Keep the classes once applied instead of removing them when the
    /// element scrolls back out of the viewport.
    pub once: bool,
    /// Apply on mount (after a short delay) instead of waiting for the
    /// element to intersect the viewport.
    pub animate_on_load: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px",
            once: true,
            animate_on_load: true,
        }
    }
}

/// Split a class string into unique tokens, preserving first-seen order.
/// `DomTokenList::add` already has set semantics, so deduplicating here
/// just keeps repeated hook invocations from issuing redundant DOM calls.
fn split_class_tokens(classes: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = Vec::new();
    for token in classes.split_whitespace() {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

fn add_classes(element: &Element, classes: &str) {
    let list = element.class_list();
    for token in split_class_tokens(classes) {
        let _ = list.add_1(token);
    }
}

fn remove_classes(element: &Element, classes: &str) {
    let list = element.class_list();
    for token in split_class_tokens(classes) {
        let _ = list.remove_1(token);
    }
}

fn observer_options(options: &AnimationOptions) -> IntersectionObserverInit {
    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(options.threshold));
    init.root_margin(options.root_margin);
    init
}

enum AnimationCleanup {
    None,
    Delay(Timeout),
    Delays(Vec<Timeout>),
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>,
    },
}

impl AnimationCleanup {
    fn cancel(self) {
        if let AnimationCleanup::Observer { observer, .. } = &self {
            observer.disconnect();
        }
        // Dropping a gloo Timeout clears the underlying timer.
    }
}

/// Attach CSS animation classes to the returned node either shortly after
/// mount or when the node crosses the visibility threshold. The observer or
/// pending timer is torn down with the component.
#[hook]
pub fn use_animation(classes: &'static str, options: AnimationOptions) -> NodeRef {
    let node_ref = use_node_ref();

    {
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |(classes, options)| {
                let classes = *classes;
                let cleanup = match node_ref.cast::<Element>() {
                    None => AnimationCleanup::None,
                    Some(element) if options.animate_on_load => {
                        let target = element.clone();
                        AnimationCleanup::Delay(Timeout::new(LOAD_DELAY_MS, move || {
                            add_classes(&target, classes);
                        }))
                    }
                    Some(element) => {
                        let once = options.once;
                        let target = element.clone();
                        let callback = Closure::wrap(Box::new(
                            move |entries: Vec<IntersectionObserverEntry>| {
                                for entry in entries {
                                    if entry.is_intersecting() {
                                        // Re-adding on later intersections is a
                                        // no-op thanks to classList set semantics.
                                        add_classes(&target, classes);
                                    } else if !once {
                                        remove_classes(&target, classes);
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(Vec<IntersectionObserverEntry>)>);
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &observer_options(options),
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                AnimationCleanup::Observer {
                                    observer,
                                    _callback: callback,
                                }
                            }
                            Err(_) => AnimationCleanup::None,
                        }
                    }
                };
                move || cleanup.cancel()
            },
            (classes, options),
        );
    }

    node_ref
}

/// Apply `child_class` to each child of the returned container with an
/// incrementing delay per child, for a cascading reveal.
#[hook]
pub fn use_staggered_animation(child_class: &'static str, options: AnimationOptions) -> NodeRef {
    let node_ref = use_node_ref();

    {
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |(child_class, options)| {
                let child_class = *child_class;
                let cleanup = match node_ref.cast::<Element>() {
                    None => AnimationCleanup::None,
                    Some(container) if options.animate_on_load => {
                        AnimationCleanup::Delays(stagger_children(
                            &container,
                            child_class,
                            LOAD_DELAY_MS,
                        ))
                    }
                    Some(container) => {
                        let once = options.once;
                        let target = container.clone();
                        let callback = Closure::wrap(Box::new(
                            move |entries: Vec<IntersectionObserverEntry>| {
                                let Some(entry) = entries.into_iter().next() else {
                                    return;
                                };
                                if entry.is_intersecting() {
                                    for timeout in stagger_children(&target, child_class, 0) {
                                        // Once the container is visible the
                                        // reveal runs to completion.
                                        timeout.forget();
                                    }
                                } else if !once {
                                    for i in 0..target.children().length() {
                                        if let Some(child) = target.children().item(i) {
                                            remove_classes(&child, child_class);
                                        }
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(Vec<IntersectionObserverEntry>)>);
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &observer_options(options),
                        ) {
                            Ok(observer) => {
                                observer.observe(&container);
                                AnimationCleanup::Observer {
                                    observer,
                                    _callback: callback,
                                }
                            }
                            Err(_) => AnimationCleanup::None,
                        }
                    }
                };
                move || cleanup.cancel()
            },
            (child_class, options),
        );
    }

    node_ref
}

fn stagger_children(container: &Element, child_class: &'static str, base_ms: u32) -> Vec<Timeout> {
    let children = container.children();
    let mut timeouts = Vec::with_capacity(children.length() as usize);
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            timeouts.push(Timeout::new(base_ms + i * STAGGER_STEP_MS, move || {
                add_classes(&child, child_class);
            }));
        }
    }
    timeouts
}

#[cfg(test)]
mod tests {
    use super::split_class_tokens;

    #[test]
    fn tokens_split_on_whitespace() {
        assert_eq!(
            split_class_tokens("animate-fade-in delay-100"),
            vec!["animate-fade-in", "delay-100"],
        );
    }

    #[test]
    fn repeated_tokens_collapse() {
        assert_eq!(
            split_class_tokens("fade fade slide fade"),
            vec!["fade", "slide"],
        );
    }

    // Applying the same class string twice must not grow the class set:
    // model DomTokenList's set semantics over a plain Vec.
    #[test]
    fn double_application_does_not_duplicate() {
        let mut applied: Vec<String> = Vec::new();
        for _ in 0..2 {
            for token in split_class_tokens("animate-scale-in delay-100") {
                if !applied.iter().any(|t| t == token) {
                    applied.push(token.to_string());
                }
            }
        }
        assert_eq!(applied, vec!["animate-scale-in", "delay-100"]);
    }
}
