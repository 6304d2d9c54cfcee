//! Library crate root re-exporting config, profile, and service modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod profiles;
pub mod service;
