//! Small building blocks: labeled text field, toggle button, card.

use leptos::*;

/// Class list for a toggle button.
pub fn toggle_class(active: bool, active_class: &str) -> String {
    if active {
        format!("toggle {}", active_class)
    } else {
        "toggle toggle-idle".to_string()
    }
}

/// Text input bound to a value and an input callback.
#[component]
pub fn TextField(
    /// Label above the input
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    /// HTML input type
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] class: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the raw text on every keystroke
    #[prop(into)]
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            {label.map(|text| view! { <label class="field-label">{text}</label> })}
            <input
                type=input_type
                class=format!("input {}", class)
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

/// Button with active-state styling.
#[component]
pub fn ToggleButton(
    #[prop(into)] active: Signal<bool>,
    /// Class added while active
    #[prop(default = "toggle-active")]
    active_class: &'static str,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || toggle_class(active.get(), active_class)
            on:click=move |_| on_click.call(())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            <div class="card-content">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_class() {
        assert_eq!(toggle_class(true, "toggle-accent"), "toggle toggle-accent");
        assert_eq!(toggle_class(false, "toggle-accent"), "toggle toggle-idle");
    }
}
