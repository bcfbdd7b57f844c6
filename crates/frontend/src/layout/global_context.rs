use contracts::content::TopicKey;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

const TOPIC_PARAM: &str = "topic";

/// Page-wide state: which example topic is selected.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub selected_topic: RwSignal<Option<TopicKey>>,
}

impl AppGlobalContext {
    pub fn new(initial: Option<TopicKey>) -> Self {
        Self {
            selected_topic: RwSignal::new(initial),
        }
    }

    pub fn select(&self, topic: TopicKey) {
        log::debug!("select topic: '{}'", topic);
        self.selected_topic.set(Some(topic));
    }

    pub fn is_selected(&self, topic: TopicKey) -> bool {
        self.selected_topic.get() == Some(topic)
    }

    /// Mirrors the selection into `?topic=` with `history.replaceState`, so a
    /// reload reopens the same tab. Other query parameters are kept. The
    /// initial value comes from `AppConfig`.
    pub fn init_router_integration(&self) {
        let this = *self;
        Effect::new(move |_| {
            let Some(topic) = this.selected_topic.get() else {
                return;
            };
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let new_url = format!("?{}", merge_topic_query(&current_search, topic));

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

/// Sets `topic` in an existing query string, leaving the other parameters
/// untouched. Parameters come back sorted by name.
fn merge_topic_query(search: &str, topic: TopicKey) -> String {
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.insert(TOPIC_PARAM.to_string(), topic.as_str().to_string());
    serde_qs::to_string(&params).unwrap_or_default()
}

/// Hook to use the page context.
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_selection_is_exclusive() {
        Owner::new().with(|| {
            let ctx = AppGlobalContext::new(None);
            assert!(TopicKey::all().iter().all(|t| !ctx.is_selected(*t)));

            ctx.select(TopicKey::View);
            ctx.select(TopicKey::Signals);

            let selected: Vec<_> = TopicKey::all()
                .into_iter()
                .filter(|t| ctx.is_selected(*t))
                .collect();
            assert_eq!(selected, vec![TopicKey::Signals]);
        });
    }

    #[test]
    fn test_merge_topic_into_empty_query() {
        assert_eq!(merge_topic_query("", TopicKey::View), "topic=view");
        assert_eq!(merge_topic_query("?", TopicKey::Signals), "topic=signals");
    }

    #[test]
    fn test_merge_topic_keeps_log_level() {
        let merged = merge_topic_query("?log=debug&topic=view", TopicKey::Props);
        assert_eq!(merged, "log=debug&topic=props");

        let config = AppConfig::from_query(&merged);
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.topic, Some(TopicKey::Props));
    }

    #[test]
    fn test_merge_topic_adds_to_foreign_params() {
        let merged = merge_topic_query("utm_source=mail", TopicKey::Components);
        assert_eq!(merged, "topic=components&utm_source=mail");
    }
}
