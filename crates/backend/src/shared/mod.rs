pub mod config;
pub mod graphql;
