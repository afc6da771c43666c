pub mod graphql;
pub mod store_config;
