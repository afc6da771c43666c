pub mod header;
pub mod store_switcher;

pub use header::Header;
pub use store_switcher::StoreSwitcher;
