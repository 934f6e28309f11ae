pub mod app;
pub mod articles;
pub mod clock;
pub mod config;
pub mod dates;
pub mod entries;
pub mod errors;
pub mod feedback;
pub mod goals;
pub mod handlers;
pub mod models;
pub mod motivation;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
