use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::{TabButton, TabButtonAttrs};
use contracts::content::{catalog, Catalog, ExampleTopic, TopicKey};
use leptos::prelude::*;

const CONTENT_ID: &str = "tab-content";
pub const EMPTY_HINT: &str = "Please select a topic.";

/// What the panel under the tab menu shows.
#[derive(Debug, PartialEq, Eq)]
pub enum TabContent<'a> {
    Empty,
    Example(&'a ExampleTopic),
}

pub fn tab_content(catalog: &Catalog, selected: Option<TopicKey>) -> TabContent<'_> {
    match selected.and_then(|key| catalog.example(key)) {
        Some(example) => TabContent::Example(example),
        None => TabContent::Empty,
    }
}

fn tab_attrs(topic: TopicKey) -> TabButtonAttrs {
    TabButtonAttrs::default()
        .with_id(format!("tab-{}", topic.as_str()))
        .with_aria_controls(CONTENT_ID)
}

/// Tab menu over the example topics plus the panel for the selected one.
#[component]
pub fn Examples() -> impl IntoView {
    let ctx = use_global_context();

    let panel = move || match tab_content(catalog(), ctx.selected_topic.get()) {
        TabContent::Empty => view! { <p>{EMPTY_HINT}</p> }.into_any(),
        TabContent::Example(example) => view! {
            <div>
                <h3>{example.title.clone()}</h3>
                <p>{example.description.clone()}</p>
                <pre>
                    <code>{example.code.clone()}</code>
                </pre>
            </div>
        }
        .into_any(),
    };

    view! {
        <section id="examples">
            <h2>"Examples"</h2>
            <menu>
                {TopicKey::all()
                    .into_iter()
                    .map(|topic| {
                        view! {
                            <TabButton
                                is_selected=Signal::derive(move || ctx.is_selected(topic))
                                attrs=tab_attrs(topic)
                                on_activate=Callback::new(move |_| ctx.select(topic))
                            >
                                {topic.label()}
                            </TabButton>
                        }
                    })
                    .collect_view()}
            </menu>
            <div id=CONTENT_ID>{panel}</div>
        </section>
    }
}
