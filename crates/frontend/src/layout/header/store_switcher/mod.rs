//! Store view switcher shown in the storefront header and navigation.
//!
//! The component only renders; store data and the switch side effects live
//! behind [`StoreSwitcherController`], injected through context.

pub mod api;
pub mod component;
pub mod controller;
pub mod switch_plan;
pub mod talon;
pub mod view_model;

pub use component::StoreSwitcher;
pub use controller::{
    provide_store_switcher, use_store_switcher, StoreSwitcherController, StoreSwitcherHandle,
    TalonConfig,
};
pub use view_model::{StoreItem, StoreSwitcherClasses, StoreSwitcherView, StoreToggle};
