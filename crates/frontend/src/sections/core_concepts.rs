use crate::shared::components::concept_card::ConceptCard;
use contracts::content::catalog;
use leptos::prelude::*;

#[component]
pub fn CoreConcepts() -> impl IntoView {
    let concepts = catalog().concepts.clone();

    view! {
        <section id="core-concepts">
            <h2>"Core Concepts"</h2>
            <ul>
                {concepts
                    .into_iter()
                    .map(|concept| view! { <ConceptCard concept=concept /> })
                    .collect_view()}
            </ul>
        </section>
    }
}
