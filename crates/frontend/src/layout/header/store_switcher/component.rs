use leptos::prelude::*;

use super::controller::{use_store_switcher, StoreSwitcherController, TalonConfig};
use super::view_model::{default_classes, StoreSwitcherClasses, StoreSwitcherView};
use crate::shared::classify::ClassMap;
use crate::shared::components::ui::LinkButton;

/// Store view switcher.
///
/// Renders an empty container until at least two stores are available, then
/// one link per store in the order the controller reports them.
#[component]
pub fn StoreSwitcher(
    /// Use the mobile container class
    #[prop(optional, into)]
    mobile_view: MaybeProp<bool>,
    /// Class overrides merged over the defaults
    #[prop(optional)]
    classes: Option<StoreSwitcherClasses>,
) -> impl IntoView {
    let switcher = use_store_switcher(TalonConfig::available_stores());
    let classes = ClassMap::merge(
        &default_classes(),
        classes.map(|c| c.to_class_map()).as_ref(),
    );

    let view_model = Memo::new({
        let switcher = switcher.clone();
        move |_| {
            StoreSwitcherView::build(
                mobile_view.get().unwrap_or(false),
                &classes,
                &switcher.available_stores(),
            )
        }
    });

    view! {
        <div class=move || view_model.with(|m| m.root_class.clone())>
            {move || {
                let switcher = switcher.clone();
                view_model.get().toggle.map(|toggle| {
                    view! {
                        <div class=toggle.class>
                            {toggle.items.into_iter().map(|item| {
                                let switcher = switcher.clone();
                                let label = item.label.clone();
                                let on_click = Callback::new(move |_: leptos::ev::MouseEvent| item.activate(&switcher));
                                view! {
                                    <LinkButton on_click=on_click>
                                        <span>{label}</span>
                                    </LinkButton>
                                }
                            }).collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
