//! Profile records, their JSON store, and the spawner-tuple renderer.

pub mod export;
pub mod record;
pub mod render;
pub mod store;

pub use export::{export_profiles, render_all};
pub use record::{Profile, ProfilePatch};
pub use render::{render, RenderedProfile, SpawnerCommandConfig, SpawnerConfig};
pub use store::{ProfileStore, RemoveStatus, UpdateStatus};
