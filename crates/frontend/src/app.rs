use crate::layout::header::store_switcher::{provide_store_switcher, TalonConfig};
use crate::layout::header::Header;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One controller for the header and navigation switchers.
    provide_store_switcher(TalonConfig::available_stores());

    view! {
        <Header />
    }
}
