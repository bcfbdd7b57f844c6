use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::sections::{CoreConcepts, Examples};
use leptos::prelude::*;

pub const CLOSING_HEADING: &str = "Time to get started!";

#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
    // Selection state for the examples tab menu, shared via context.
    let ctx = AppGlobalContext::new(config.topic);
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <Header />
        <main>
            <CoreConcepts />
            <Examples />
            <h2>{CLOSING_HEADING}</h2>
        </main>
    }
}
