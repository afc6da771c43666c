//! Default [`StoreSwitcherController`]: loads stores over GraphQL and
//! performs the switch in the browser.

use contracts::shared::store_config::AvailableStores;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use super::api::fetch_available_stores;
use super::controller::{StoreSwitcherController, TalonConfig};
use super::switch_plan::{
    Navigation, PageLocation, SwitchPlan, SwitchSettings, STORE_VIEW_CODE_KEY,
};

fn load_from_storage(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .filter(|value| !value.is_empty())
}

fn save_to_storage(key: &str, value: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

fn current_location() -> PageLocation {
    match window() {
        Some(w) => {
            let location = w.location();
            PageLocation {
                pathname: location.pathname().unwrap_or_default(),
                search: location.search().unwrap_or_default(),
            }
        }
        None => PageLocation::default(),
    }
}

fn navigate(navigation: &Navigation) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let result = match navigation {
        Navigation::Reload => location.reload(),
        Navigation::Assign(url) => location.assign(url),
    };
    if let Err(e) = result {
        log::error!("store switcher: navigation failed: {:?}", e);
    }
}

#[derive(Clone, Copy)]
pub struct StoreSwitcherTalon {
    available_stores: RwSignal<AvailableStores>,
    current_store_code: RwSignal<Option<String>>,
    settings: SwitchSettings,
}

impl StoreSwitcherTalon {
    pub fn new(config: TalonConfig) -> Self {
        let talon = Self {
            available_stores: RwSignal::new(AvailableStores::default()),
            current_store_code: RwSignal::new(load_from_storage(STORE_VIEW_CODE_KEY)),
            settings: SwitchSettings::from_build_env(),
        };
        talon.load(config);
        talon
    }

    fn load(&self, config: TalonConfig) {
        let this = *self;
        let store_code = this.current_store_code.get_untracked();

        spawn_local(async move {
            match fetch_available_stores(config, store_code.as_deref()).await {
                Ok(data) => {
                    let stores = data.stores();
                    log::debug!("store switcher: loaded {} store views", stores.len());

                    if this.current_store_code.get_untracked().is_none() {
                        this.current_store_code
                            .set(Some(data.current_store_code().to_string()));
                    }
                    this.available_stores.set(stores);
                }
                Err(e) => {
                    log::error!("store switcher: failed to load available stores: {}", e);
                }
            }
        });
    }
}

impl StoreSwitcherController for StoreSwitcherTalon {
    fn available_stores(&self) -> AvailableStores {
        self.available_stores.get()
    }

    fn handle_switch_store(&self, store_code: &str) {
        let stores = self.available_stores.get_untracked();
        let Some(target) = stores.get(store_code) else {
            log::warn!("store switcher: unknown store code '{}'", store_code);
            return;
        };

        let current = self.current_store_code.get_untracked();
        let plan = SwitchPlan::build(target, current.as_deref(), &current_location(), self.settings);

        for (key, value) in &plan.storage {
            save_to_storage(key, value);
        }
        self.current_store_code.set(Some(target.store_code.clone()));
        navigate(&plan.navigation);
    }
}
