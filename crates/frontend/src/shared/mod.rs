pub mod api_utils;
pub mod classify;
pub mod components;
