use contracts::content::CoreConcept;
use leptos::prelude::*;

#[component]
pub fn ConceptCard(concept: CoreConcept) -> impl IntoView {
    let CoreConcept {
        image,
        title,
        description,
    } = concept;

    view! {
        <li>
            <img src=image alt=title.clone() />
            <h3>{title}</h3>
            <p>{description}</p>
        </li>
    }
}
