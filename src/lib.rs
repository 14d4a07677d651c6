//! Mergington High School API: view extracurricular activities and sign
//! students up for them or drop them.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod shutdown;
pub mod web;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
