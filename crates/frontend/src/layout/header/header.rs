use crate::layout::header::store_switcher::StoreSwitcher;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let nav_open = RwSignal::new(false);

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="button button--ghost header__nav-trigger"
                    aria-label="Toggle navigation"
                    on:click=move |_| nav_open.update(|open| *open = !*open)
                >
                    {"☰"}
                </button>
                <span class="header__title">"Storefront"</span>
            </div>
            <div class="header__actions">
                <StoreSwitcher />
            </div>
        </header>
        <Show when=move || nav_open.get()>
            <nav class="navigation">
                <StoreSwitcher mobile_view=true />
            </nav>
        </Show>
    }
}
