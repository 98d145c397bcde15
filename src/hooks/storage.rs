use web_sys::window;

pub const HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";

/// Key-value capability over whatever persists flags for this client.
/// Components take the capability rather than reaching for the global
/// storage object directly, so flag logic stays testable off-browser.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `FlagStore` backed by the browser's localStorage. All failures
/// (storage disabled, quota) degrade to "flag absent".
#[derive(Clone, Default, PartialEq)]
pub struct BrowserFlags;

impl FlagStore for BrowserFlags {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn has_seen_onboarding(store: &impl FlagStore) -> bool {
    store.get(HAS_SEEN_ONBOARDING).as_deref() == Some("true")
}

pub fn mark_onboarding_seen(store: &impl FlagStore) {
    store.set(HAS_SEEN_ONBOARDING, "true");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryFlags(RefCell<HashMap<String, String>>);

    impl FlagStore for MemoryFlags {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.into(), value.into());
        }
    }

    #[test]
    fn onboarding_flag_round_trips() {
        let store = MemoryFlags::default();
        assert!(!has_seen_onboarding(&store));
        mark_onboarding_seen(&store);
        assert!(has_seen_onboarding(&store));
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let store = MemoryFlags::default();
        mark_onboarding_seen(&store);
        mark_onboarding_seen(&store);
        assert_eq!(store.get(HAS_SEEN_ONBOARDING).as_deref(), Some("true"));
    }
}
