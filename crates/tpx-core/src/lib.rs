pub mod config;
pub mod logging;

pub mod hooks;
pub mod identity;
pub mod rewrite;
pub mod schedule;
pub mod settings;
pub mod store;
