pub mod link_button;

pub use link_button::LinkButton;
