pub mod animal;
pub mod app;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod page;
