use crate::config::AppConfig;
use crate::transport::Browser;
use notices::{Feed, FetchState};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// The effect reruns only when this changes, i.e. when the fetched URL changes.
fn effect_key(config: &AppConfig) -> String {
    notices::endpoint(&config.api_base)
}

/// Load the notice list once per mount, and again whenever the notices URL changes.
///
/// Results arriving after the calling component went away are ignored.
pub fn use_notices() -> FetchState {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = use_state_eq(FetchState::default);
    let feed = use_mut_ref(|| Feed::new(Rc::new(Browser)));
    let key = effect_key(&config);

    {
        let state = state.clone();
        let base = config.api_base;

        use_effect_with_deps(
            move |_: &String| {
                let task = feed.borrow_mut().attach(&base, move |new| state.set(new));

                if let Some(task) = task {
                    spawn_local(task);
                }

                move || feed.borrow_mut().detach()
            },
            key,
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> AppConfig {
        AppConfig {
            api_base: base.to_string(),
        }
    }

    #[test]
    fn trailing_slash_does_not_change_the_key() {
        assert_eq!(effect_key(&config("/api")), effect_key(&config("/api/")));
    }

    #[test]
    fn other_base_changes_the_key() {
        assert_ne!(
            effect_key(&config("/api")),
            effect_key(&config("https://school.test/api"))
        );
    }
}
