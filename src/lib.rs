pub mod classify;
pub mod config;
pub mod export;
pub mod fetch;
pub mod process;
pub mod schema;
