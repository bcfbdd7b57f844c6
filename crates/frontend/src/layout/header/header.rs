use leptos::prelude::*;

pub const TITLE: &str = "Leptos Essentials";
pub const TAGLINE: &str =
    "Fundamental Leptos concepts you will need for almost any app you are going to build!";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header">
            <img src="/static/images/leptos-core-concepts.png" alt="Stylized atom" />
            <h1>{TITLE}</h1>
            <p>{TAGLINE}</p>
        </header>
    }
}
