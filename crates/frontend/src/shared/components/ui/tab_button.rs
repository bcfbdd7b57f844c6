use leptos::prelude::*;

/// Class put on the button of the selected tab. Stylesheets target
/// `menu button.active`; an unselected button never carries it.
pub const ACTIVE_CLASS: &str = "active";

/// Optional attributes forwarded unchanged onto the `<button>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabButtonAttrs {
    pub id: Option<String>,
    pub title: Option<String>,
    pub aria_controls: Option<String>,
}

impl TabButtonAttrs {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_aria_controls(mut self, target: impl Into<String>) -> Self {
        self.aria_controls = Some(target.into());
        self
    }
}

/// Attribute values the `<button>` is rendered with for one render pass.
/// Every attribute of the button is bound from this value; `None` fields are
/// left off the element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabButtonState {
    /// `Some(ACTIVE_CLASS)` when selected, otherwise the attribute is omitted.
    pub class: Option<&'static str>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub aria_controls: Option<String>,
}

impl TabButtonState {
    /// A missing selection flag counts as "not selected".
    pub fn project(is_selected: Option<bool>, attrs: &TabButtonAttrs) -> Self {
        Self {
            class: active_class(is_selected.unwrap_or(false)),
            id: attrs.id.clone(),
            title: attrs.title.clone(),
            aria_controls: attrs.aria_controls.clone(),
        }
    }
}

pub fn active_class(is_selected: bool) -> Option<&'static str> {
    is_selected.then_some(ACTIVE_CLASS)
}

fn dispatch_activate(on_activate: Option<Callback<()>>) {
    if let Some(handler) = on_activate {
        handler.run(());
    }
}

/// One item of a tab menu: `<li><button>children</button></li>`.
///
/// Holds no state. The owner decides which tab is selected and passes the
/// flag on every render; clicks go straight to `on_activate`.
#[component]
pub fn TabButton(
    /// Whether this tab is the active view. Defaults to `false`.
    #[prop(optional, into)]
    is_selected: MaybeProp<bool>,
    /// Extra attributes for the button element
    #[prop(optional)]
    attrs: TabButtonAttrs,
    /// Activation handler
    #[prop(optional)]
    on_activate: Option<Callback<()>>,
    /// Label
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let project = move || {
        let state = TabButtonState::project(is_selected.get(), &attrs);
        log::debug!("TabButton render: selected={}", state.class.is_some());
        state
    };
    let state = Memo::new(move |_| project());

    view! {
        <li>
            <button
                class=move || state.get().class
                id=move || state.get().id
                title=move || state.get().title
                aria-controls=move || state.get().aria_controls
                on:click=move |_| dispatch_activate(on_activate)
            >
                {children.map(|children| children())}
            </button>
        </li>
    }
}
