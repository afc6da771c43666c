use leptos::prelude::*;

/// Button rendered as an inline text link
#[component]
pub fn LinkButton(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("link-button {}", additional_class()).trim_end().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
